//! Integration tests for the sql-query-loader binary.

use std::io::Write;

use assert_cmd::{Command, cargo::cargo_bin_cmd};
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn cmd() -> Command {
    cargo_bin_cmd!("sql-query-loader")
}

fn queries_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        "--/selectUser\nSELECT * FROM users WHERE id = ?;\n--/\n--/listUser\nSELECT * FROM users;\n--/\n"
    )
    .unwrap();
    file
}

#[test]
fn test_get_prints_query_body() {
    let file = queries_file();

    cmd()
        .args([
            "get",
            "selectUser",
            "-q",
            file.path().to_str().unwrap(),
            "--no-color"
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("SELECT * FROM users WHERE id = ?;"));
}

#[test]
fn test_get_missing_name_exits_nonzero() {
    let file = queries_file();

    cmd()
        .args([
            "get",
            "nonExistentQuery",
            "-q",
            file.path().to_str().unwrap()
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No query named"));
}

#[test]
fn test_get_json_format() {
    let file = queries_file();

    cmd()
        .args([
            "get",
            "listUser",
            "-q",
            file.path().to_str().unwrap(),
            "-f",
            "json"
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\""));
}

#[test]
fn test_get_reads_stdin() {
    cmd()
        .args(["get", "q", "-q", "-", "--no-color"])
        .write_stdin("--/q\nSELECT 1;\n--/\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("SELECT 1;"));
}

#[test]
fn test_list_shows_block_names() {
    let file = queries_file();

    cmd()
        .args(["list", "-q", file.path().to_str().unwrap(), "--no-color"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("selectUser").and(predicate::str::contains("listUser"))
        );
}

#[test]
fn test_list_verbose_shows_bodies() {
    let file = queries_file();

    cmd()
        .args([
            "list",
            "-q",
            file.path().to_str().unwrap(),
            "--verbose",
            "--no-color"
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("SELECT * FROM users;"));
}

#[test]
fn test_list_yaml_format() {
    let file = queries_file();

    cmd()
        .args([
            "list",
            "-q",
            file.path().to_str().unwrap(),
            "-f",
            "yaml",
            "--no-color"
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("selectUser"));
}

#[test]
fn test_check_well_formed_file() {
    let file = queries_file();

    cmd()
        .args(["check", "-q", file.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("OK: 2 named queries"));
}

#[test]
fn test_check_malformed_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "--/openOnly\nSELECT 1;\n").unwrap();

    cmd()
        .args(["check", "-q", file.path().to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Malformed query file"));
}

#[test]
fn test_check_undoubled_dash() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "SELECT 1-").unwrap();

    cmd()
        .args(["check", "-q", file.path().to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Malformed query file"));
}

#[test]
fn test_file_not_found() {
    cmd()
        .args(["get", "q", "-q", "/nonexistent/queries.sql"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_missing_queries_argument() {
    cmd()
        .env_remove("SQLOADER_FILE")
        .env_remove("HOME")
        .args(["list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No queries file given"));
}

#[test]
fn test_help() {
    cmd().arg("--help").assert().success();
}

#[test]
fn test_version() {
    cmd().arg("--version").assert().success();
}
