use std::path::PathBuf;

use sfjmesh::mesh::{MeshFile, Result, Vertex};

use crate::cmd::util::parse_config;

/// Print per-vertex attribute lines, up to `limit` vertices.
pub fn run(path: PathBuf, scheme: &str, faces: bool, limit: usize) -> Result<()> {
	let config = parse_config(scheme, faces)?;
	let mesh = MeshFile::open(&path, config)?;

	println!("path: {}", path.display());
	println!("vertex_count: {}", mesh.data.vertices.len());

	for (index, vertex) in mesh.data.vertices.iter().enumerate().take(limit) {
		println!("  [{index}] {}", vertex_label(vertex));
	}

	let shown = mesh.data.vertices.len().min(limit);
	if shown < mesh.data.vertices.len() {
		println!("  ... {} more", mesh.data.vertices.len() - shown);
	}

	Ok(())
}

fn vertex_label(vertex: &Vertex) -> String {
	format!(
		"pos ({:.4}, {:.4}, {:.4}) normal ({:.4}, {:.4}, {:.4}) uv ({:.4}, {:.4}) influences {}",
		vertex.position[0],
		vertex.position[1],
		vertex.position[2],
		vertex.normal[0],
		vertex.normal[1],
		vertex.normal[2],
		vertex.uv[0],
		vertex.uv[1],
		vertex.influences.len(),
	)
}

#[cfg(test)]
mod tests {
	use super::vertex_label;
	use sfjmesh::mesh::{BoneInfluence, Vertex};

	#[test]
	fn label_reports_position_and_influence_count() {
		let vertex = Vertex {
			position: [1.0, 2.0, 3.0],
			normal: [0.0, 0.0, 1.0],
			tangent: [1.0, 0.0, 0.0],
			uv: [0.5, 0.25],
			influences: vec![BoneInfluence { bone_index: 4, weight: 1.0 }],
		};

		let label = vertex_label(&vertex);
		assert!(label.contains("pos (1.0000, 2.0000, 3.0000)"));
		assert!(label.contains("uv (0.5000, 0.2500)"));
		assert!(label.contains("influences 1"));
	}
}
