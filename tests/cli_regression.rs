// Regression tests for the `wkt` binary.
// Requires: assert_cmd, predicates crates in [dev-dependencies]

use std::fs;

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

fn wkt() -> Command {
    Command::cargo_bin("wkt").unwrap()
}

#[test]
fn cli_parses_arguments() {
    wkt()
        .args(["parse", "POINT (1 2)", "envelope (-1, 1, 2, -2)"])
        .assert()
        .success()
        .stdout(contains("POINT (1 2)").and(contains("ENVELOPE (-1, 1, 2, -2)")));
}

#[test]
fn cli_reports_miette_diagnostics_on_error() {
    wkt()
        .args(["parse", "POINT (1 2) extra"])
        .assert()
        .code(1)
        .stderr(contains("wkt::end_of_shape_expected").and(contains("end of shape expected")));
}

#[test]
fn cli_lenient_reports_unsupported() {
    wkt()
        .args(["parse", "--lenient", "CIRCLE (1 2 3)"])
        .assert()
        .success()
        .stdout(contains("unsupported"));
}

#[test]
fn cli_json_output() {
    wkt()
        .args(["--format", "json", "parse", "POINT (1.5 2)"])
        .assert()
        .success()
        .stdout(contains(r#""shape":{"type":"point","x":1.5,"y":2.0}"#));
}

#[test]
fn cli_check_reads_stdin() {
    wkt()
        .args(["check"])
        .write_stdin("POINT (1 2)\n\nENVELOPE (1,2,3)\nPOINT (3 4)\n")
        .assert()
        .code(1)
        .stdout(contains("2 valid, 1 invalid"))
        .stderr(contains("expected ','"));
}

#[test]
fn cli_check_reads_file() {
    let dir = std::env::temp_dir().join(format!("wkt-cli-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let file = dir.join("shapes.wkt");
    fs::write(&file, "POINT (1 2)\nENVELOPE (0, 1, 1, 0)\n").unwrap();

    wkt()
        .args(["check", "--file"])
        .arg(&file)
        .assert()
        .success()
        .stdout(contains("2 valid, 0 invalid"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn cli_lists_keywords() {
    wkt()
        .arg("keywords")
        .assert()
        .success()
        .stdout(contains("ENVELOPE\nPOINT\n"));
}
