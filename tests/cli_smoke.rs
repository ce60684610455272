#![allow(clippy::unwrap_used)]
//! CLI smoke tests to verify basic command functionality.
//!
//! Every invocation gets an empty config directory and no API key from the
//! environment, so results do not depend on the machine running the tests.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[allow(deprecated)]
fn polytl(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("polytl").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("OPENAI_API_KEY")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_help_displays_usage() {
    let home = TempDir::new().unwrap();
    polytl(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Translate sentences"))
        .stdout(predicate::str::contains("--from"))
        .stdout(predicate::str::contains("--to"))
        .stdout(predicate::str::contains("--output"));
}

#[test]
fn test_version_displays_version() {
    let home = TempDir::new().unwrap();
    polytl(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_languages_list() {
    let home = TempDir::new().unwrap();
    polytl(&home)
        .arg("languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("fr  French"))
        .stdout(predicate::str::contains("es  Spanish"))
        .stdout(predicate::str::contains("Castilian").not());
}

#[test]
fn test_models_list_marks_default() {
    let home = TempDir::new().unwrap();
    polytl(&home)
        .arg("models")
        .assert()
        .success()
        .stdout(predicate::str::contains("gpt-4o"))
        .stdout(predicate::str::contains("(default)"));
}

#[test]
fn test_configure_show_without_config() {
    let home = TempDir::new().unwrap();
    polytl(&home)
        .args(["configure", "--show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(not set)"))
        .stdout(predicate::str::contains("OPENAI_API_KEY"));
}

#[test]
fn test_missing_source_language() {
    let home = TempDir::new().unwrap();
    polytl(&home)
        .args(["--to", "en"])
        .write_stdin("Bonjour")
        .assert()
        .failure()
        .stderr(predicate::str::contains("'from'"));
}

#[test]
fn test_missing_api_key_is_a_config_error() {
    let home = TempDir::new().unwrap();
    polytl(&home)
        .args(["--from", "fr", "--to", "en", "--endpoint", "http://127.0.0.1:9"])
        .write_stdin("Bonjour")
        .assert()
        .code(exitcode::CONFIG)
        .stderr(predicate::str::contains("no API key configured"));
}

#[test]
fn test_invalid_source_locale_is_a_usage_error() {
    let home = TempDir::new().unwrap();
    polytl(&home)
        .env("OPENAI_API_KEY", "test-key")
        .args(["--from", "french", "--to", "en", "--endpoint", "http://127.0.0.1:9"])
        .write_stdin("Bonjour")
        .assert()
        .code(exitcode::USAGE)
        .stderr(predicate::str::contains("not a 2-letter ISO 639-1 code"));
}

#[test]
fn test_empty_input() {
    let home = TempDir::new().unwrap();
    polytl(&home)
        .env("OPENAI_API_KEY", "test-key")
        .args(["--from", "fr", "--to", "en"])
        .write_stdin("\n\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input is empty"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_translate_prints_filtered_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{
                "index": 0,
                "message": {
                    "role": "assistant",
                    "content": r#"{"datas":[{"en":"Hello","xx":"ZZ"},{"en":"Thanks"}]}"#
                },
                "finish_reason": "stop"
            }],
            "usage": { "prompt_tokens": 100, "completion_tokens": 20 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let endpoint = server.uri();
    let home = TempDir::new().unwrap();
    let output = tokio::task::spawn_blocking(move || {
        polytl(&home)
            .env("OPENAI_API_KEY", "test-key")
            .args(["--from", "fr", "--to", "en", "--quiet"])
            .args(["--endpoint", endpoint.as_str()])
            .write_stdin("Bonjour\nMerci\n")
            .assert()
            .success()
            .get_output()
            .clone()
    })
    .await
    .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let payload: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(payload, json!([{ "en": "Hello" }, { "en": "Thanks" }]));
}
