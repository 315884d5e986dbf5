use std::str::FromStr;

use crate::mesh::MeshError;

/// Encoding strategy for per-vertex bone influence lists.
///
/// The three observed file revisions never mix strategies within one file,
/// and nothing in the byte stream identifies which one is in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfluenceScheme {
	/// Each vertex carries a `u32` influence count followed by that many
	/// `(bone_index, weight)` pairs.
	ExplicitCount,
	/// Each vertex carries exactly four `(bone_index, weight)` pairs with no
	/// count field.
	FixedFour,
}

impl InfluenceScheme {
	/// Render the scheme as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::ExplicitCount => "explicit",
			Self::FixedFour => "fixed4",
		}
	}
}

impl FromStr for InfluenceScheme {
	type Err = MeshError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value {
			"explicit" => Ok(Self::ExplicitCount),
			"fixed4" => Ok(Self::FixedFour),
			other => Err(MeshError::InvalidScheme { scheme: other.to_owned() }),
		}
	}
}

/// Caller-selected field layout for one decode call.
///
/// The format carries no version tag, so the configuration must come from
/// out-of-band knowledge of the file's revision. A wrong configuration either
/// fails with an EOF error or decodes structurally valid garbage; the decoder
/// never guesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeConfig {
	/// Influence list layout for every vertex in the file.
	pub scheme: InfluenceScheme,
	/// Whether a face block follows the vertex block. When false, nothing
	/// past the last vertex is read.
	pub read_faces: bool,
}

#[cfg(test)]
mod tests {
	use super::InfluenceScheme;
	use crate::mesh::MeshError;

	#[test]
	fn scheme_labels_round_trip() {
		for scheme in [InfluenceScheme::ExplicitCount, InfluenceScheme::FixedFour] {
			let parsed: InfluenceScheme = scheme.as_str().parse().expect("label parses");
			assert_eq!(parsed, scheme);
		}
	}

	#[test]
	fn unknown_scheme_label_is_rejected() {
		let err = "fixed8".parse::<InfluenceScheme>().expect_err("unknown label should fail");
		assert!(matches!(err, MeshError::InvalidScheme { scheme } if scheme == "fixed8"));
	}
}
