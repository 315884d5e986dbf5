/// One bone's pull on a vertex.
///
/// The bone index references a skeleton that is not part of this format; the
/// decoder treats it as opaque. Weights are stored as-is and are not required
/// to sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct BoneInfluence {
	/// Opaque index into an external skeleton.
	pub bone_index: u32,
	/// Raw influence weight.
	pub weight: f32,
}

/// A single skinned vertex record.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Vertex {
	/// Object-space position.
	pub position: [f32; 3],
	/// Vertex normal.
	pub normal: [f32; 3],
	/// Vertex tangent.
	pub tangent: [f32; 3],
	/// Texture coordinate.
	pub uv: [f32; 2],
	/// Bone influences, length per the active scheme.
	pub influences: Vec<BoneInfluence>,
}

/// One triangle as indices into the vertex list.
///
/// Indices are stored as read; no revision of the format validated them
/// against the vertex count and this decoder preserves that behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Face {
	/// Three vertex-list indices in file order.
	pub indices: [u32; 3],
}

/// A fully decoded SFJ mesh.
///
/// Produced in one piece by a single decode call; never partially populated.
/// Vertex and face order matches file order, which is semantically meaningful
/// because faces index into the vertex list.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct MeshData {
	/// Declared count of referenced textures. Informational only; no texture
	/// data follows it in any observed revision.
	pub texture_count: u32,
	/// Vertex records in file order.
	pub vertices: Vec<Vertex>,
	/// Triangle list; empty when the source variant stores no face block.
	pub faces: Vec<Face>,
}
