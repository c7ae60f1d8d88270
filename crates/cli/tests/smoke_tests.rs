use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_scan_tree"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("scan_tree"));
}

#[test]
fn shows_version() {
    Command::new(env!("CARGO_BIN_EXE_scan_tree"))
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(scan_tree_cli::VERSION));
}

#[test]
fn rejects_unknown_flag() {
    Command::new(env!("CARGO_BIN_EXE_scan_tree"))
        .arg("--definitely-not-a-flag")
        .assert()
        .failure();
}
