use std::fs;
use std::path::Path;

use crate::mesh::{DecodeConfig, MeshData, Result, decode_mesh};

/// An SFJ mesh decoded eagerly from disk.
#[derive(Debug)]
pub struct MeshFile {
	/// Configuration the bytes were decoded under.
	pub config: DecodeConfig,
	/// The decoded mesh.
	pub data: MeshData,
}

impl MeshFile {
	/// Read `path` and decode it under `config`.
	///
	/// The file handle lives only for the duration of the read and is closed
	/// on every exit path; only decoded data is retained.
	pub fn open(path: impl AsRef<Path>, config: DecodeConfig) -> Result<Self> {
		let raw = fs::read(path)?;
		let data = decode_mesh(&raw, config)?;
		Ok(Self { config, data })
	}

	/// Derive summary statistics from the decoded mesh.
	pub fn stats(&self) -> MeshStats {
		MeshStats::from_mesh(&self.data)
	}
}

/// Aggregate counts over a decoded mesh, for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshStats {
	/// Declared texture count from the header.
	pub texture_count: u32,
	/// Number of decoded vertices.
	pub vertex_count: usize,
	/// Number of decoded faces.
	pub face_count: usize,
	/// Total influence pairs across all vertices.
	pub influence_total: usize,
	/// Fewest influences on any single vertex; 0 for an empty mesh.
	pub influence_min: usize,
	/// Most influences on any single vertex; 0 for an empty mesh.
	pub influence_max: usize,
}

impl MeshStats {
	/// Compute statistics for `mesh`.
	pub fn from_mesh(mesh: &MeshData) -> Self {
		let counts = mesh.vertices.iter().map(|vertex| vertex.influences.len());

		Self {
			texture_count: mesh.texture_count,
			vertex_count: mesh.vertices.len(),
			face_count: mesh.faces.len(),
			influence_total: counts.clone().sum(),
			influence_min: counts.clone().min().unwrap_or(0),
			influence_max: counts.max().unwrap_or(0),
		}
	}
}
