use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::Value;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("openlasir"))
}

fn stdout_json(cmd: &mut Command) -> Value {
    let assert = cmd.assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    serde_json::from_str(&stdout).expect("valid json")
}

#[test]
fn help_lists_subcommands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("encode").and(contains("decode")).and(contains("fire")));
}

#[test]
fn fire_by_color_name() {
    cmd()
        .args(["fire", "--block", "7", "--device", "42", "--color", "Red"])
        .assert()
        .success()
        .stdout("{\"address\":7,\"command\":32810}\n");
}

#[test]
fn encode_by_mode_name() {
    let value = stdout_json(cmd().args([
        "encode",
        "--block",
        "1",
        "--device",
        "200",
        "--mode",
        "general_interact",
        "--data",
        "5",
    ]));
    assert_eq!(value["address"], 1);
    assert_eq!(value["command"], 43976);
}

#[test]
fn encode_masks_wide_values() {
    let value = stdout_json(cmd().args([
        "encode", "--block", "0", "--device", "0", "--mode", "0x3d", "--data", "0x0b",
    ]));
    assert_eq!(value["command"], 0x7D00);
}

#[test]
fn encode_strict_rejects_wide_mode() {
    cmd()
        .args([
            "encode", "--block", "0", "--device", "0", "--mode", "40", "--strict",
        ])
        .assert()
        .code(2)
        .stderr(contains("error: mode out of range").and(contains("hint:")));
}

#[test]
fn unknown_color_shows_error_and_hint() {
    cmd()
        .args(["fire", "--block", "0", "--device", "0", "--color", "Purple"])
        .assert()
        .failure()
        .stderr(contains("unknown color name").and(contains("hint:")));
}

#[test]
fn invalid_block_shows_error_and_hint() {
    cmd()
        .args(["fire", "--block", "256", "--device", "0", "--color", "Red"])
        .assert()
        .failure()
        .stderr(contains("invalid block").and(contains("hint:")));
}

#[test]
fn decode_fire_packet() {
    let value = stdout_json(cmd().args(["decode", "7", "0x802a"]));
    assert_eq!(value["block_id"], 7);
    assert_eq!(value["device_id"], 42);
    assert_eq!(value["mode_name"], "laser_tag_fire");
    assert_eq!(value["color_name"], "Red");
    assert_eq!(value["color_rgb"]["r"], 255);
}

#[test]
fn decode_unnamed_mode() {
    let value = stdout_json(cmd().args(["decode", "200", "21504"]));
    assert_eq!(value["mode"], 20);
    assert_eq!(value["mode_name"], "unknown");
    assert!(value.get("color_name").is_none());
}

#[test]
fn decode_fire_rejects_other_modes() {
    cmd()
        .args(["decode", "12", "259", "--fire"])
        .assert()
        .failure()
        .stderr(contains("not a laser tag fire packet").and(contains("hint:")));
}

#[test]
fn modes_lists_named_modes() {
    let value = stdout_json(cmd().arg("modes"));
    let entries = value.as_array().expect("array");
    assert_eq!(entries.len(), 12);
    assert_eq!(entries[11]["name"], "general_interact");
}

#[test]
fn colors_pretty_output() {
    let assert = cmd().args(["colors", "--pretty"]).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    assert!(stdout.contains('\n'));
    let value: Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(value.as_array().expect("array").len(), 8);
    assert_eq!(value[6]["rgb"]["g"], 165);
}

#[test]
fn negative_mode_is_an_invalid_number() {
    cmd()
        .args(["encode", "--block", "0", "--device", "0", "--mode", "-1"])
        .assert()
        .code(2)
        .stderr(
            contains("error: invalid mode '-1'")
                .and(contains("hint: expected a number"))
                .and(contains("unknown mode name").not()),
        );
}

#[test]
fn negative_color_is_an_invalid_number() {
    cmd()
        .args(["fire", "--block", "0", "--device", "0", "--color=-3"])
        .assert()
        .code(2)
        .stderr(contains("invalid color '-3'").and(contains("unknown color name").not()));
}
