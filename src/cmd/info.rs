use std::path::PathBuf;

use sfjmesh::mesh::{MeshFile, Result};

use crate::cmd::util::parse_config;

/// Print high-level mesh statistics.
pub fn run(path: PathBuf, scheme: &str, faces: bool) -> Result<()> {
	let config = parse_config(scheme, faces)?;
	let mesh = MeshFile::open(&path, config)?;
	let stats = mesh.stats();

	println!("path: {}", path.display());
	println!("scheme: {}", config.scheme.as_str());
	println!("read_faces: {}", config.read_faces);
	println!("texture_count: {}", stats.texture_count);
	println!("vertex_count: {}", stats.vertex_count);
	println!("face_count: {}", stats.face_count);
	println!("influence_total: {}", stats.influence_total);
	println!("influence_min: {}", stats.influence_min);
	println!("influence_max: {}", stats.influence_max);

	Ok(())
}
