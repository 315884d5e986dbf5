mod bytes;
mod config;
mod data;
mod decode;
mod error;
mod file;

/// Decode configuration and influence scheme selection.
pub use config::{DecodeConfig, InfluenceScheme};
/// Decoded mesh data model.
pub use data::{BoneInfluence, Face, MeshData, Vertex};
/// Single-pass decode entry point.
pub use decode::decode_mesh;
/// Error and result aliases.
pub use error::{MeshError, Result};
/// File abstraction and summary statistics.
pub use file::{MeshFile, MeshStats};
