use crate::mesh::{MeshError, Result};

/// Simple bounded cursor over an immutable byte slice.
///
/// All multi-byte reads are little-endian; the SFJ format has no other
/// representation.
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Return current byte offset.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Read exactly `n` bytes and advance cursor.
	pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
		if n > self.remaining() {
			return Err(MeshError::UnexpectedEof {
				at: self.pos,
				need: n,
				rem: self.remaining(),
			});
		}

		let start = self.pos;
		self.pos += n;
		Ok(&self.bytes[start..self.pos])
	}

	/// Read a little-endian `u32`.
	pub fn read_u32_le(&mut self) -> Result<u32> {
		let raw = self.read_exact(4)?;
		let mut buf = [0_u8; 4];
		buf.copy_from_slice(raw);
		Ok(u32::from_le_bytes(buf))
	}

	/// Read a little-endian IEEE-754 `f32`.
	pub fn read_f32_le(&mut self) -> Result<f32> {
		let raw = self.read_exact(4)?;
		let mut buf = [0_u8; 4];
		buf.copy_from_slice(raw);
		Ok(f32::from_le_bytes(buf))
	}

	/// Read three consecutive little-endian `f32` values.
	pub fn read_vec3_le(&mut self) -> Result<[f32; 3]> {
		Ok([self.read_f32_le()?, self.read_f32_le()?, self.read_f32_le()?])
	}

	/// Read two consecutive little-endian `f32` values.
	pub fn read_vec2_le(&mut self) -> Result<[f32; 2]> {
		Ok([self.read_f32_le()?, self.read_f32_le()?])
	}
}
