use crate::mesh::bytes::Cursor;
use crate::mesh::{BoneInfluence, DecodeConfig, Face, InfluenceScheme, MeshData, MeshError, Result, Vertex};

/// Fixed attribute bytes per vertex: 3+3+3 position/normal/tangent floats
/// plus 2 uv floats.
const VERTEX_ATTR_SIZE: usize = 44;
/// Bytes per influence pair: u32 bone index + f32 weight.
const INFLUENCE_SIZE: usize = 8;
/// Bytes per face: three u32 vertex indices.
const FACE_SIZE: usize = 12;
/// Influence pairs per vertex under [`InfluenceScheme::FixedFour`].
const FIXED_INFLUENCES: usize = 4;

/// Decode one SFJ mesh from `bytes` under `config`.
///
/// Reads front-to-back in a single pass: texture count, vertex count, vertex
/// records, then the face block when `config.read_faces` is set. Bytes past
/// the last decoded field are left unread. Decode is all-or-nothing; on error
/// no partial mesh is returned.
///
/// The format carries no magic number, so a stream decoded under the wrong
/// configuration either fails with an EOF error or yields a structurally
/// valid but meaningless mesh. Face indices are returned as stored, without
/// bounds-checking against the vertex count.
pub fn decode_mesh(bytes: &[u8], config: DecodeConfig) -> Result<MeshData> {
	let mut cursor = Cursor::new(bytes);

	let texture_count = cursor.read_u32_le()?;
	let num_verts = cursor.read_u32_le()?;
	check_count(&cursor, "vertex", num_verts, config.scheme.min_record_size())?;

	let mut vertices = Vec::with_capacity(num_verts as usize);
	for _ in 0..num_verts {
		vertices.push(read_vertex(&mut cursor, config.scheme)?);
	}

	let faces = if config.read_faces { read_face_block(&mut cursor)? } else { Vec::new() };

	Ok(MeshData {
		texture_count,
		vertices,
		faces,
	})
}

fn read_vertex(cursor: &mut Cursor<'_>, scheme: InfluenceScheme) -> Result<Vertex> {
	let position = cursor.read_vec3_le()?;
	let normal = cursor.read_vec3_le()?;
	let tangent = cursor.read_vec3_le()?;
	let uv = cursor.read_vec2_le()?;
	let influences = scheme.read_influences(cursor)?;

	Ok(Vertex {
		position,
		normal,
		tangent,
		uv,
		influences,
	})
}

impl InfluenceScheme {
	/// Smallest encoded size of one vertex record under this scheme, used to
	/// bound the vertex count against the bytes actually present.
	fn min_record_size(self) -> usize {
		match self {
			Self::ExplicitCount => VERTEX_ATTR_SIZE + 4,
			Self::FixedFour => VERTEX_ATTR_SIZE + FIXED_INFLUENCES * INFLUENCE_SIZE,
		}
	}

	fn read_influences(self, cursor: &mut Cursor<'_>) -> Result<Vec<BoneInfluence>> {
		let count = match self {
			Self::ExplicitCount => {
				let count = cursor.read_u32_le()?;
				check_count(cursor, "influence", count, INFLUENCE_SIZE)?;
				count as usize
			}
			Self::FixedFour => FIXED_INFLUENCES,
		};

		let mut influences = Vec::with_capacity(count);
		for _ in 0..count {
			influences.push(BoneInfluence {
				bone_index: cursor.read_u32_le()?,
				weight: cursor.read_f32_le()?,
			});
		}
		Ok(influences)
	}
}

fn read_face_block(cursor: &mut Cursor<'_>) -> Result<Vec<Face>> {
	let num_faces = cursor.read_u32_le()?;
	check_count(cursor, "face", num_faces, FACE_SIZE)?;

	let mut faces = Vec::with_capacity(num_faces as usize);
	for _ in 0..num_faces {
		faces.push(Face {
			indices: [cursor.read_u32_le()?, cursor.read_u32_le()?, cursor.read_u32_le()?],
		});
	}
	Ok(faces)
}

/// Validate a declared element count before allocating or looping.
///
/// Counts come from untrusted input; the implied byte size must be
/// representable and must fit in the bytes still available, otherwise a
/// hostile count could demand an unbounded allocation.
fn check_count(cursor: &Cursor<'_>, field: &'static str, count: u32, elem_size: usize) -> Result<()> {
	let need = (count as usize)
		.checked_mul(elem_size)
		.ok_or(MeshError::CountOverflow { field, count, elem_size })?;

	if need > cursor.remaining() {
		return Err(MeshError::UnexpectedEof {
			at: cursor.pos(),
			need,
			rem: cursor.remaining(),
		});
	}
	Ok(())
}
