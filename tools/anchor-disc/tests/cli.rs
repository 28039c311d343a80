//! End-to-end tests against the built `anchor-disc` binary.

use std::process::{Command, Output};

const INITIALIZE_LITERAL: &str = "[0xaf, 0xaf, 0x6d, 0x1f, 0x0d, 0x98, 0x9b, 0xed]";

fn anchor_disc(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_anchor-disc"))
        .args(args)
        .env_remove("ANCHOR_DISC_JSON")
        .env_remove("ANCHOR_DISC_LOG_LEVEL")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run anchor-disc")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn prints_four_lines_with_default_namespace() {
    let output = anchor_disc(&["initialize"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        format!(
            "Namespace: global\n\
             Name:      initialize\n\
             Discriminator (raw bytes): [175, 175, 109, 31, 13, 152, 155, 237]\n\
             Rust literal: {}\n",
            INITIALIZE_LITERAL
        )
    );
}

#[test]
fn namespace_option_changes_result() {
    let output = anchor_disc(&["Bank", "--ns", "account"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.starts_with("Namespace: account\nName:      Bank\n"));
    assert!(text.ends_with("Rust literal: [0x8e, 0x31, 0xa6, 0xf2, 0x32, 0x42, 0x61, 0xbc]\n"));
}

#[test]
fn missing_name_fails_with_usage() {
    let output = anchor_disc(&[]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "stderr: {}", stderr);
}

#[test]
fn repeated_runs_are_identical() {
    let first = anchor_disc(&["deposit", "--ns", "global"]);
    let second = anchor_disc(&["deposit"]);
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn json_output() {
    let output = anchor_disc(&["initialize", "--json"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["namespace"], "global");
    assert_eq!(value["name"], "initialize");
    assert_eq!(
        value["discriminator"],
        serde_json::json!([175, 175, 109, 31, 13, 152, 155, 237])
    );
    assert_eq!(value["literal"], INITIALIZE_LITERAL);
}

#[test]
fn json_env_var_does_not_change_report() {
    let output = Command::new(env!("CARGO_BIN_EXE_anchor-disc"))
        .arg("initialize")
        .env("ANCHOR_DISC_JSON", "1")
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert!(output.status.success());

    let text = stdout(&output);
    assert_eq!(text.lines().count(), 4);
    assert!(text.starts_with("Namespace: global\n"));
}

#[test]
fn bad_log_level_falls_back_and_still_reports() {
    let output = Command::new(env!("CARGO_BIN_EXE_anchor-disc"))
        .arg("initialize")
        .env("ANCHOR_DISC_LOG_LEVEL", "anchor_disc=loud")
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));

    let text = stdout(&output);
    assert_eq!(text.lines().count(), 4);
    assert!(text.ends_with(&format!("Rust literal: {}\n", INITIALIZE_LITERAL)));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("invalid log level").count(), 1, "stderr: {}", stderr);
    assert!(!stderr.contains("Error:"), "stderr: {}", stderr);
}

#[test]
fn expect_matching_literal_succeeds() {
    let output = anchor_disc(&["initialize", "--expect", INITIALIZE_LITERAL]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn expect_wrong_literal_exits_one() {
    let output = anchor_disc(&[
        "initialize",
        "--expect",
        "[0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]",
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output).lines().count(), 4);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Discriminator mismatch"), "stderr: {}", stderr);
}

#[test]
fn expect_malformed_literal_is_usage_error() {
    let output = anchor_disc(&["initialize", "--expect", "0xaf"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}
