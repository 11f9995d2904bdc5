use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CARD: &str = r#"{
  "version": "1.0",
  "type": "AdaptiveCard",
  "body": [
    {"wrap": true, "type": "TextBlock", "text": "Hello"},
    {"type": "Rating", "fallback": {"type": "TextBlock", "text": "3 stars"}}
  ]
}"#;

fn greentic_card() -> Command {
    let mut cmd = Command::cargo_bin("greentic-card").expect("binary built");
    cmd.env_remove("GREENTIC_CARD_SCHEMA_VERSION")
        .env_remove("GREENTIC_CARD_MAX_FALLBACK_DEPTH")
        .env("RUST_LOG", "off");
    cmd
}

fn write_card(dir: &TempDir, name: &str, contents: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write card");
    path.to_string_lossy().into_owned()
}

#[test]
fn fmt_prints_canonical_json() {
    let dir = TempDir::new().expect("tempdir");
    let card = write_card(&dir, "card.json", CARD);
    greentic_card()
        .args(["fmt", "--card", &card])
        .assert()
        .success()
        .stdout(
            "{\"body\":[{\"text\":\"Hello\",\"type\":\"TextBlock\",\"wrap\":true},\
             {\"text\":\"3 stars\",\"type\":\"TextBlock\"}],\"type\":\"AdaptiveCard\",\"version\":\"1.0\"}\n",
        )
        .stderr(predicate::str::contains("warning: /body/1: unknown element type `Rating`"));
}

#[test]
fn fmt_reads_stdin() {
    greentic_card()
        .args(["fmt", "--card", "-"])
        .write_stdin(r#"{"type":"AdaptiveCard","version":"1.2","body":[]}"#)
        .assert()
        .success()
        .stdout("{\"body\":[],\"type\":\"AdaptiveCard\",\"version\":\"1.2\"}\n");
}

#[test]
fn schema_version_flag_overrides_environment() {
    let dir = TempDir::new().expect("tempdir");
    let card = write_card(
        &dir,
        "card.json",
        r#"{"type":"AdaptiveCard","version":"1.0","body":[{"type":"TextBlock","text":"t","fontType":"Monospace"}]}"#,
    );
    greentic_card()
        .env("GREENTIC_CARD_SCHEMA_VERSION", "1.0")
        .args(["fmt", "--card", &card])
        .assert()
        .success()
        .stdout(predicate::str::contains("fontType").not());
    greentic_card()
        .env("GREENTIC_CARD_SCHEMA_VERSION", "1.0")
        .args(["fmt", "--card", &card, "--schema-version", "1.2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"fontType\":\"Monospace\""));
}

#[test]
fn check_reports_warnings_as_json() {
    let dir = TempDir::new().expect("tempdir");
    let card = write_card(&dir, "card.json", CARD);
    greentic_card()
        .args(["check", "--card", &card])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"code\": \"unknown_element_type\""))
        .stdout(predicate::str::contains("\"code\": \"fallback_applied\""));
}

#[test]
fn check_fails_on_errors() {
    let dir = TempDir::new().expect("tempdir");
    let card = write_card(
        &dir,
        "card.json",
        r#"{"type":"AdaptiveCard","version":"1.0","body":[{"type":"Image"}]}"#,
    );
    greentic_card()
        .args(["check", "--card", &card])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("missing_required_field"))
        .stderr(predicate::str::contains("validation failed: 1 error(s)"));
}

#[test]
fn missing_file_exits_1() {
    greentic_card()
        .args(["fmt", "--card", "/definitely/not/here.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("card file failed"));
}

#[test]
fn malformed_card_exits_3() {
    let dir = TempDir::new().expect("tempdir");
    let not_json = write_card(&dir, "broken.json", "{\"type\":");
    greentic_card()
        .args(["fmt", "--card", &not_json])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid card JSON"));

    let wrong_root = write_card(&dir, "container.json", r#"{"type":"Container"}"#);
    greentic_card()
        .args(["check", "--card", &wrong_root])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("expected card type `AdaptiveCard`"));
}
