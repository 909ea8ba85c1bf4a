use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use serde_json::{Value, json};

fn stockkeep(dir: &Path, args: &[&str]) -> Output {
    // Run the real binary from inside `dir` so the default file name lands there.
    Command::new(env!("CARGO_BIN_EXE_stockkeep"))
        .args(args)
        .current_dir(dir)
        .env_remove("STOCKKEEP_FILE")
        .env_remove("STOCKKEEP_LOW_THRESHOLD")
        .env("RUST_LOG", "warn")
        .output()
        .expect("failed to run stockkeep")
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn demo_creates_default_inventory_file() {
    let dir = tempfile::tempdir().unwrap();

    let output = stockkeep(dir.path(), &[]);
    assert!(output.status.success());
    assert_eq!(read_json(&dir.path().join("inventory.json")), json!({"apple": 7, "banana": 2}));

    // Second run builds on the saved state.
    let output = stockkeep(dir.path(), &["demo"]);
    assert!(output.status.success());
    assert_eq!(read_json(&dir.path().join("inventory.json")), json!({"apple": 14, "banana": 4}));
}

#[test]
fn commands_share_one_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("stock.json");
    let file = file.to_str().unwrap();

    assert!(stockkeep(dir.path(), &["--file", file, "add", "apple", "10"]).status.success());
    assert!(stockkeep(dir.path(), &["--file", file, "add", "banana", "2"]).status.success());
    assert!(stockkeep(dir.path(), &["--file", file, "remove", "apple", "3"]).status.success());

    let qty = stockkeep(dir.path(), &["--file", file, "qty", "apple"]);
    assert!(qty.status.success());
    assert_eq!(String::from_utf8_lossy(&qty.stdout), "7\n");

    let low = stockkeep(dir.path(), &["low", "--file", file]);
    assert_eq!(String::from_utf8_lossy(&low.stdout), "banana\n");

    let text = fs::read_to_string(dir.path().join("stock.json")).unwrap();
    assert_eq!(text, "{\n  \"apple\": 7,\n  \"banana\": 2\n}\n");
}

#[test]
fn failures_exit_non_zero() {
    let dir = tempfile::tempdir().unwrap();

    assert!(!stockkeep(dir.path(), &["remove", "nonexistent", "1"]).status.success());
    assert!(!stockkeep(dir.path(), &["add", "x", "-1"]).status.success());
    assert!(!dir.path().join("inventory.json").exists());

    fs::write(dir.path().join("inventory.json"), "[1, 2]").unwrap();
    assert!(!stockkeep(dir.path(), &["qty", "apple"]).status.success());
    // A demo that cannot load must not overwrite the file.
    assert!(!stockkeep(dir.path(), &["demo"]).status.success());
    assert_eq!(fs::read_to_string(dir.path().join("inventory.json")).unwrap(), "[1, 2]");
}
