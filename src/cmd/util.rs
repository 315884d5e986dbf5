use sfjmesh::mesh::{DecodeConfig, InfluenceScheme, Result};

/// Build a decode configuration from CLI arguments.
///
/// The scheme label goes through `FromStr`, so an unknown label surfaces as
/// the decoder's own scheme error rather than a clap failure.
pub(crate) fn parse_config(scheme: &str, faces: bool) -> Result<DecodeConfig> {
	let scheme: InfluenceScheme = scheme.parse()?;
	Ok(DecodeConfig {
		scheme,
		read_faces: faces,
	})
}
