//! End-to-end exit-code and output contract for the checkdigit binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn checkdigit() -> Command {
    Command::cargo_bin("checkdigit").unwrap()
}

#[test]
fn validate_accepts_checksummed_aadhaar() {
    checkdigit()
        .args(["validate", "123456789010"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Valid"));
}

#[test]
fn validate_rejects_bad_checksum_with_exit_1() {
    checkdigit()
        .args(["validate", "123456789012"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("checksum mismatch"));
}

#[test]
fn validate_rejects_wrong_length_with_exit_1() {
    checkdigit()
        .args(["validate", "12345"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("12 decimal digits"));
}

#[test]
fn verhoeff_scheme_is_length_agnostic() {
    checkdigit()
        .args(["validate", "2363", "--scheme", "verhoeff"])
        .assert()
        .success();

    checkdigit()
        .args(["validate", "2364", "--scheme", "verhoeff"])
        .assert()
        .code(1);
}

#[test]
fn validate_json_reports_shape() {
    let assert = checkdigit()
        .args(["validate", "123456789010", "--format", "json"])
        .assert()
        .success();
    let v: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(v["valid"], serde_json::Value::Bool(true));
    assert_eq!(v["scheme"], "aadhaar");
    assert_eq!(v["input"], "123456789010");
    // No reason key on success.
    assert!(v.get("reason").is_none());
}

#[test]
fn invalid_json_report_carries_reason() {
    let assert = checkdigit()
        .args(["validate", "123456789012", "--format", "json"])
        .assert()
        .code(1);
    let v: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(v["valid"], serde_json::Value::Bool(false));
    assert!(v["reason"].is_string());
}

#[test]
fn generate_then_validate_round_trips() {
    let assert = checkdigit()
        .args(["generate", "12345678901"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let full = stdout.trim().to_string();
    assert_eq!(full, "123456789010");

    checkdigit().args(["validate", &full]).assert().success();
}

#[test]
fn generate_json_reports_check_digit() {
    let assert = checkdigit()
        .args(["generate", "236", "--format", "json"])
        .assert()
        .success();
    let v: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(v["check_digit"], 3);
    assert_eq!(v["full"], "2363");
}

#[test]
fn generate_rejects_non_digits_with_exit_2() {
    checkdigit()
        .args(["generate", "12x45"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("fatal"));
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    checkdigit().assert().code(2);
}
