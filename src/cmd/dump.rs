use std::path::PathBuf;

use sfjmesh::mesh::{MeshData, MeshFile, Result};

use crate::cmd::util::parse_config;

/// Dump the fully decoded mesh as pretty-printed JSON.
pub fn run(path: PathBuf, scheme: &str, faces: bool) -> Result<()> {
	let config = parse_config(scheme, faces)?;
	let mesh = MeshFile::open(&path, config)?;

	let payload = DumpJson {
		path: path.display().to_string(),
		scheme: config.scheme.as_str(),
		read_faces: config.read_faces,
		mesh: &mesh.data,
	};

	println!("{}", render_json(&payload)?);
	Ok(())
}

fn render_json(payload: &DumpJson<'_>) -> Result<String> {
	Ok(serde_json::to_string_pretty(payload)?)
}

#[derive(serde::Serialize)]
struct DumpJson<'a> {
	path: String,
	scheme: &'static str,
	read_faces: bool,
	mesh: &'a MeshData,
}
