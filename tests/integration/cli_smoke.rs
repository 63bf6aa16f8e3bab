// tests/integration/cli_smoke.rs
use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_remote_index"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("head").and(predicate::str::contains("serve")));
}

#[test]
fn rejects_bad_rescan_value() {
    Command::new(env!("CARGO_BIN_EXE_remote_index"))
        .args(["head", "/tmp", "--rescan", "soon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid duration number"));
}

#[test]
fn rejects_relative_home_override() {
    Command::new(env!("CARGO_BIN_EXE_remote_index"))
        .args(["--home", "relative/home", "head", "/tmp"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid home directory"));
}
