//! Decoder for the SFJ binary mesh format.
//!
//! The format is a headerless little-endian stream with no magic number or
//! version tag; callers select the field layout explicitly via
//! [`mesh::DecodeConfig`].

/// SFJ mesh decoding: byte cursor, configuration, data model, decode loop.
pub mod mesh;
