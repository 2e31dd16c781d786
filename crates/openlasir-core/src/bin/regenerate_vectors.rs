use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use openlasir_core::{IrCode, Packet};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
struct Vector {
    name: String,
    packet: Packet,
    code: IrCode,
}

fn main() -> ExitCode {
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn run() -> Result<(), String> {
    let path = PathBuf::from("tests").join("golden").join("vectors.json");
    let json = fs::read_to_string(&path)
        .map_err(|err| format!("failed to read {}: {}", path.display(), err))?;
    let mut vectors: Vec<Vector> = serde_json::from_str(&json)
        .map_err(|err| format!("failed to parse {}: {}", path.display(), err))?;

    for vector in &mut vectors {
        vector.code = vector.packet.encode();
    }

    let lines = vectors
        .iter()
        .map(serde_json::to_string)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| format!("JSON serialization failed: {}", err))?;
    let output = format!("[\n  {}\n]\n", lines.join(",\n  "));
    fs::write(&path, output)
        .map_err(|err| format!("failed to write {}: {}", path.display(), err))?;
    Ok(())
}
