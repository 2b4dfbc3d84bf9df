//! Integration tests for the `htoprc` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the parse, format,
//! score and check subcommands through the actual binary, including
//! stdin/stdout piping, file I/O and error handling.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn htoprc() -> Command {
    Command::cargo_bin("htoprc").unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// parse
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn parse_stdin_to_json() {
    let output = htoprc()
        .arg("parse")
        .write_stdin("color_scheme=5\nfoo=bar\n")
        .output()
        .expect("parse should run");
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(json["config"]["colorScheme"], 5);
    assert_eq!(json["config"]["unknownOptions"]["foo"], "bar");
    assert_eq!(json["warnings"][0]["kind"], "unknown_option");
    assert_eq!(json["version"], "unknown");
    assert_eq!(json["score"], 10);
}

#[test]
fn parse_file_reports_meters_and_screens() {
    let output = htoprc()
        .args(["parse", "--compact", "-i", &fixture("custom.htoprc")])
        .output()
        .expect("parse should run");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["version"], "v3");
    assert_eq!(json["config"]["headerLayout"], "four_25_25_25_25");
    assert_eq!(json["config"]["leftMeters"][0]["type"], "AllCPUs2");
    assert_eq!(json["config"]["rightMeters"][1]["mode"], "graph");
    assert_eq!(json["config"]["screens"][0]["sortKey"], "PERCENT_CPU");
    assert_eq!(json["config"]["screens"][0]["treeView"], true);
    assert!(json["config"]["screens"][0].get("sortDirection").is_none());
}

#[test]
fn parse_file_to_file() {
    let output_path = std::env::temp_dir().join("htoprc-cli-test-parse.json");
    let _ = std::fs::remove_file(&output_path);

    htoprc()
        .args(["parse", "-i", &fixture("stock.htoprc"), "-o"])
        .arg(&output_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = std::fs::read_to_string(&output_path).expect("output file must exist");
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["config"]["htopVersion"], "3.2.1");

    let _ = std::fs::remove_file(&output_path);
}

#[test]
fn parse_missing_file_fails() {
    htoprc()
        .args(["parse", "-i", "/nonexistent/htoprc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

// ─────────────────────────────────────────────────────────────────────────────
// format
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn format_only_non_defaults() {
    htoprc()
        .args(["format", "--only-non-defaults"])
        .write_stdin("delay=15\ncolor_scheme=6\n# comment\nfoo=bar\n")
        .assert()
        .success()
        .stdout("color_scheme=6\nfoo=bar\n");
}

#[test]
fn format_drops_unknown_and_version() {
    htoprc()
        .args([
            "format",
            "--only-non-defaults",
            "--no-unknown",
            "--no-version",
            "-i",
            &fixture("custom.htoprc"),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("show_cached_memory").not())
        .stdout(predicate::str::contains("htop_version").not())
        .stdout(predicate::str::contains("column_meters_3=Clock Uptime\n"))
        .stdout(predicate::str::contains("screen:Main=PID USER PERCENT_CPU PERCENT_MEM Command\n.sort_key=PERCENT_CPU\n.tree_view=1\n"));
}

#[test]
fn format_keeps_legacy_meters_verbatim() {
    htoprc()
        .args(["format", "--only-non-defaults", "-i", &fixture("legacy.htoprc")])
        .assert()
        .success()
        .stdout(predicate::str::contains("left_meters=AllCPUs Memory Swap\n"))
        .stdout(predicate::str::contains("right_meter_modes=2 2 2\n"))
        .stdout(predicate::str::contains("column_meters_0").not());
}

#[test]
fn format_output_reparses_identically() {
    let first = htoprc()
        .args(["format", "-i", &fixture("custom.htoprc")])
        .output()
        .expect("format should run");
    assert!(first.status.success());

    let second = htoprc()
        .arg("format")
        .write_stdin(first.stdout.clone())
        .output()
        .expect("format should run");
    assert!(second.status.success());
    assert_eq!(first.stdout, second.stdout);
}

// ─────────────────────────────────────────────────────────────────────────────
// score
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn score_prints_number() {
    htoprc()
        .args(["score", "-i", &fixture("custom.htoprc")])
        .assert()
        .success()
        .stdout("31\n");
}

#[test]
fn score_explain_lists_rules() {
    htoprc()
        .args(["score", "--explain"])
        .write_stdin("tree_view=1\nheader_layout=one_100\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("8\n"))
        .stdout(predicate::str::contains("tree view enabled"))
        .stdout(predicate::str::contains("non-default header layout"))
        .stdout(predicate::str::contains("color scheme").not());
}

#[test]
fn score_of_empty_input_is_zero() {
    htoprc()
        .arg("score")
        .write_stdin("")
        .assert()
        .success()
        .stdout("0\n");
}

// ─────────────────────────────────────────────────────────────────────────────
// check
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn check_clean_file() {
    htoprc()
        .args(["check", "-i", &fixture("stock.htoprc")])
        .assert()
        .success()
        .stdout("No warnings (v3 format)\n");
}

#[test]
fn check_lists_unknown_option_with_line() {
    htoprc()
        .args(["check", "-i", &fixture("custom.htoprc")])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "line 15: [unknown option] Unknown option: show_cached_memory",
        ));
}

#[test]
fn check_accepts_legacy_meters_silently() {
    htoprc()
        .args(["check", "-i", &fixture("legacy.htoprc")])
        .assert()
        .success()
        .stdout("No warnings (v2 format)\n");
}

#[test]
fn legacy_meters_do_not_raise_score() {
    htoprc()
        .args(["score", "-i", &fixture("legacy.htoprc")])
        .assert()
        .success()
        .stdout("0\n");
}

// ─────────────────────────────────────────────────────────────────────────────
// misc
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn missing_subcommand_fails() {
    htoprc().assert().failure();
}

#[test]
fn debug_logging_goes_to_stderr() {
    htoprc()
        .arg("score")
        .env("LOG_LEVEL", "debug")
        .write_stdin("mystery=1\n")
        .assert()
        .success()
        .stdout("0\n")
        .stderr(predicate::str::contains("unknown htoprc option"));
}
