use std::fs;
use std::path::Path;

use openlasir_core::{IrCode, Packet, decode_general_packet, encode_general_packet};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Vector {
    name: String,
    packet: Packet,
    code: IrCode,
}

fn load_vectors() -> Vec<Vector> {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");
    let path = root.join("tests").join("golden").join("vectors.json");

    let json = fs::read_to_string(&path).expect("read vectors.json");
    serde_json::from_str(&json).expect("parse vectors")
}

#[test]
fn golden_encode() {
    for vector in load_vectors() {
        let packet = vector.packet;
        let actual = encode_general_packet(
            packet.block_id,
            packet.device_id,
            packet.mode,
            packet.data,
        );
        assert_eq!(actual, vector.code, "golden mismatch in {}", vector.name);
    }
}

#[test]
fn golden_decode() {
    for vector in load_vectors() {
        let actual = decode_general_packet(vector.code.address, vector.code.command);
        assert_eq!(actual, vector.packet, "golden mismatch in {}", vector.name);
    }
}

#[test]
fn golden_fire_vector_matches_fire_encoder() {
    let vectors = load_vectors();
    let fire = vectors
        .iter()
        .find(|vector| vector.name == "fire_red")
        .expect("fire_red vector");
    let code = openlasir_core::encode_laser_tag_fire(7, 42, 4);
    assert_eq!(code, fire.code);
}
