// tests/integration/end_to_end.rs
use predicates::prelude::*;
use serde_json::{Value, json};

use crate::common::Fixture;

fn stdout_json(output: &[u8]) -> Value {
    serde_json::from_slice(output).expect("stdout is JSON")
}

#[test]
fn head_reports_count_and_size() {
    let fx = Fixture::new();
    let output = fx.command().args(["head", &fx.data_str(), "--rescan", "5s"]).output().unwrap();

    assert!(output.status.success());
    assert_eq!(stdout_json(&output.stdout), json!({"absPath": fx.data_str(), "count": 3, "diskSize": 4096}));
}

#[test]
fn head_expands_home_shorthand() {
    let fx = Fixture::new();
    let raw = format!("~{}data", std::path::MAIN_SEPARATOR);
    let output = fx.command().args(["head", raw.as_str()]).output().unwrap();

    assert!(output.status.success());
    assert_eq!(stdout_json(&output.stdout)["absPath"], fx.data_str());
}

#[test]
fn get_lists_every_file() {
    let fx = Fixture::new();
    let output = fx.command().args(["get", &fx.data_str()]).output().unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output.stdout);
    assert_eq!(json["index"]["root"], fx.data_str());
    let entries = json["index"]["entries"].as_array().unwrap();
    let sizes: Vec<u64> = entries.iter().map(|e| e["size"].as_u64().unwrap()).collect();
    assert_eq!(sizes, [1024, 1024, 2048]);
    assert!(entries.iter().all(|e| e.get("mtime").is_some()));
}

#[test]
fn get_table_format_summarises() {
    let fx = Fixture::new();
    fx.command()
        .args(["get", &fx.data_str(), "--format", "table"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a.txt").and(predicate::str::contains("3 files, 4.0 KiB")));
}

#[test]
fn missing_path_fails_with_not_found() {
    let fx = Fixture::new();
    let missing = fx.home.path().join("missing");
    for op in ["head", "get"] {
        fx.command()
            .args([op, missing.to_str().unwrap()])
            .assert()
            .failure()
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains(missing.to_str().unwrap()).and(predicate::str::contains("does not exist")));
    }
}

#[test]
fn file_path_is_not_a_directory() {
    let fx = Fixture::new();
    let file = fx.home.path().join("plain.txt");
    fx.command()
        .args(["head", file.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a directory"));
}

#[test]
fn relative_path_is_malformed() {
    let fx = Fixture::new();
    fx.command()
        .current_dir(fx.home.path())
        .args(["head", "data"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("remote path format is invalid: data"));
}
