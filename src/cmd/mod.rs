/// Full-mesh JSON dump command.
pub mod dump;
/// File-level summary command.
pub mod info;
/// Vertex listing command.
pub mod verts;

mod util;
