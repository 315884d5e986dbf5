#![allow(missing_docs)]

use std::fs;
use std::path::PathBuf;

use sfjmesh::mesh::{DecodeConfig, InfluenceScheme, MeshFile, decode_mesh};

fn push_u32(bytes: &mut Vec<u8>, value: u32) {
	bytes.extend_from_slice(&value.to_le_bytes());
}

fn push_f32s(bytes: &mut Vec<u8>, values: &[f32]) {
	for value in values {
		bytes.extend_from_slice(&value.to_le_bytes());
	}
}

/// Two-vertex explicit-count mesh with one triangle, written as a real file.
fn explicit_fixture_bytes() -> Vec<u8> {
	let mut bytes = Vec::new();
	push_u32(&mut bytes, 1);
	push_u32(&mut bytes, 2);

	for (offset, bone) in [(0.0_f32, 0_u32), (1.0, 3)] {
		push_f32s(&mut bytes, &[offset, offset, offset]);
		push_f32s(&mut bytes, &[0.0, 0.0, 1.0]);
		push_f32s(&mut bytes, &[1.0, 0.0, 0.0]);
		push_f32s(&mut bytes, &[offset, offset]);
		push_u32(&mut bytes, 2);
		for pair in 0..2_u32 {
			push_u32(&mut bytes, bone + pair);
			push_f32s(&mut bytes, &[0.5]);
		}
	}

	push_u32(&mut bytes, 1);
	for index in [0_u32, 1, 1] {
		push_u32(&mut bytes, index);
	}
	bytes
}

fn fixture_path(name: &str) -> PathBuf {
	std::env::temp_dir().join(format!("sfjmesh_test_{name}"))
}

#[test]
fn open_decodes_fixture_from_disk() {
	let path = fixture_path("explicit_two_verts.mesh");
	fs::write(&path, explicit_fixture_bytes()).expect("fixture writes");

	let config = DecodeConfig {
		scheme: InfluenceScheme::ExplicitCount,
		read_faces: true,
	};
	let mesh = MeshFile::open(&path, config).expect("fixture opens");
	fs::remove_file(&path).ok();

	assert_eq!(mesh.data.texture_count, 1);
	assert_eq!(mesh.data.vertices.len(), 2);
	assert_eq!(mesh.data.faces.len(), 1);
	assert_eq!(mesh.data.faces[0].indices, [0, 1, 1]);
	assert_eq!(mesh.data.vertices[1].influences.len(), 2);
	assert_eq!(mesh.data.vertices[1].influences[0].bone_index, 3);

	let stats = mesh.stats();
	assert_eq!(stats.influence_total, 4);
	assert_eq!(stats.influence_min, 2);
	assert_eq!(stats.influence_max, 2);
}

#[test]
fn file_and_slice_decodes_agree() {
	let bytes = explicit_fixture_bytes();
	let path = fixture_path("explicit_agree.mesh");
	fs::write(&path, &bytes).expect("fixture writes");

	let config = DecodeConfig {
		scheme: InfluenceScheme::ExplicitCount,
		read_faces: true,
	};
	let from_file = MeshFile::open(&path, config).expect("fixture opens");
	fs::remove_file(&path).ok();
	let from_slice = decode_mesh(&bytes, config).expect("slice decodes");

	assert_eq!(from_file.data, from_slice);
}

#[test]
fn same_fixture_without_face_block_reading() {
	let bytes = explicit_fixture_bytes();
	let config = DecodeConfig {
		scheme: InfluenceScheme::ExplicitCount,
		read_faces: false,
	};

	// The trailing face block stays unread under read_faces=false.
	let mesh = decode_mesh(&bytes, config).expect("slice decodes");
	assert_eq!(mesh.vertices.len(), 2);
	assert!(mesh.faces.is_empty());
}
