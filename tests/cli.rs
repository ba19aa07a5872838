//! CLI exit status tests.
//!
//! Runs the built binary against the fixture data directory.

mod common;

use std::path::Path;
use std::process::{Command, Output};

fn almanac(data_dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_almanac"))
        .arg("--data-dir")
        .arg(data_dir)
        .args(args)
        .current_dir(data_dir)
        .env("RUST_LOG", "off")
        .output()
        .unwrap()
}

#[test]
fn test_found_day_exits_zero() {
    let temp = common::data_dir();
    let output = almanac(temp.path(), &["day", "5", "3", "--json"]);

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["date"], "03-05-1568");
}

#[test]
fn test_missing_day_exits_non_zero() {
    let temp = common::data_dir();
    let output = almanac(temp.path(), &["day", "12", "24"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("brak danych"));
}

#[test]
fn test_impossible_day_json_exits_non_zero() {
    let temp = common::data_dir();
    let output = almanac(temp.path(), &["day", "4", "31", "--json"]);

    assert_eq!(output.status.code(), Some(2));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["message"], "Błędne zapytanie lub brak danych");
}

#[test]
fn test_unknown_person_exits_non_zero() {
    let temp = common::data_dir();

    assert_eq!(almanac(temp.path(), &["person", "Nikt"]).status.code(), Some(2));
    assert!(almanac(temp.path(), &["person", "Jan Kochanowski"]).status.success());
}

#[test]
fn test_load_failure_exits_with_error() {
    let temp = common::data_dir();
    std::fs::remove_file(temp.path().join("quotes.yaml")).unwrap();

    let output = almanac(temp.path(), &["stats"]);
    assert_eq!(output.status.code(), Some(1));
}
