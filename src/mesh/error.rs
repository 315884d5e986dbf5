use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, MeshError>;

/// Errors produced while reading and decoding SFJ mesh data.
#[derive(Debug, Error)]
pub enum MeshError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Not enough bytes remained for a requested read.
	#[error("unexpected eof at offset {at}, need {need} bytes, remaining {rem}")]
	UnexpectedEof {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// A declared element count implies a byte size that cannot be represented.
	#[error("{field} count {count} overflows at {elem_size} bytes per element")]
	CountOverflow {
		/// Name of the count field being validated.
		field: &'static str,
		/// Declared element count.
		count: u32,
		/// Byte size of one element.
		elem_size: usize,
	},
	/// Decoded data could not be rendered as JSON.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Influence scheme label was not recognized.
	#[error("invalid influence scheme: {scheme} (expected explicit or fixed4)")]
	InvalidScheme {
		/// User-provided scheme string.
		scheme: String,
	},
}
