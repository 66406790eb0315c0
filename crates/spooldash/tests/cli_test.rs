//! Integration tests for the `spooldash` CLI binary.
//!
//! Validates argument parsing, help output, shell completions, config
//! error handling, and one end-to-end run against a mock API server.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `spooldash` binary with env isolation.
///
/// Clears all `SIMPLYPRINT_*` env vars and points the config file at a
/// nonexistent path so tests never touch the user's real configuration.
fn spooldash_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("spooldash");
    cmd.env("HOME", "/tmp/spooldash-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/spooldash-test-nonexistent")
        .env(
            "SPOOLDASH_CONFIG",
            "/tmp/spooldash-test-nonexistent/config.toml",
        )
        .env_remove("SIMPLYPRINT_API_BASE_URL")
        .env_remove("SIMPLYPRINT_API_TOKEN")
        .env_remove("SIMPLYPRINT_API_COMPANY_ID")
        .env_remove("SIMPLYPRINT_REFRESH_SECONDS")
        .env_remove("SIMPLYPRINT_TIMEOUT_SECS")
        .env_remove("REFRESH_SECONDS")
        .env_remove("SPOOLDASH_OUTPUT")
        .env_remove("NO_COLOR");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = spooldash_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(
        text.contains("Usage"),
        "Expected 'Usage' in output:\n{text}"
    );
}

#[test]
fn test_help_flag() {
    spooldash_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("filament")
            .and(predicate::str::contains("spools"))
            .and(predicate::str::contains("materials"))
            .and(predicate::str::contains("status")),
    );
}

#[test]
fn test_version_flag() {
    spooldash_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("spooldash"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    spooldash_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    spooldash_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_invalid_subcommand() {
    let output = spooldash_cmd().arg("foobar").output().unwrap();
    assert!(
        !output.status.success(),
        "Expected failure for invalid subcommand"
    );
}

#[test]
fn test_spools_list_without_credentials() {
    let output = spooldash_cmd().args(["spools", "list"]).output().unwrap();
    // Configuration failures exit with the config code (3).
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("SIMPLYPRINT_API_TOKEN"),
        "Expected the missing env var to be named:\n{stderr}"
    );
}

#[test]
fn test_non_http_base_url_is_a_config_error() {
    let output = spooldash_cmd()
        .env("SIMPLYPRINT_API_TOKEN", "tok")
        .env("SIMPLYPRINT_API_COMPANY_ID", "123")
        .args(["--base-url", "data:text/plain,x", "status"])
        .output()
        .unwrap();
    // A bad scheme is a validation failure, never a crash.
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("http"), "stderr:\n{stderr}");
}

#[test]
fn test_status_without_credentials() {
    spooldash_cmd().arg("status").assert().failure();
}

#[test]
fn test_invalid_output_format() {
    let output = spooldash_cmd()
        .args(["--output", "invalid", "spools", "list"])
        .output()
        .unwrap();
    assert!(
        !output.status.success(),
        "Expected failure for invalid output format"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("invalid")
            || text.contains("possible values")
            || text.contains("valid value"),
        "Expected error about valid output formats:\n{text}"
    );
}

// ── Config commands ─────────────────────────────────────────────────

#[test]
fn test_config_show_without_config_file() {
    // Renders defaults when no file or env vars exist.
    spooldash_cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("api.simplyprint.io")
                .and(predicate::str::contains("<unset>")),
        );
}

#[test]
fn test_config_show_redacts_token() {
    spooldash_cmd()
        .args(["config", "show"])
        .env("SIMPLYPRINT_API_TOKEN", "super-secret-token")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("<redacted>")
                .and(predicate::str::contains("super-secret-token").not()),
        );
}

#[test]
fn test_config_show_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_file = dir.path().join("config.toml");
    std::fs::write(&config_file, "api_company_id = \"987\"\n").unwrap();

    spooldash_cmd()
        .args(["config", "show"])
        .env("SPOOLDASH_CONFIG", &config_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("987"));
}

#[test]
fn test_config_path() {
    spooldash_cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

// ── Subcommand help discovery ───────────────────────────────────────

#[test]
fn test_spools_subcommands_exist() {
    spooldash_cmd()
        .args(["spools", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("list").and(predicate::str::contains("get")));
}

#[test]
fn test_spool_list_filter_flags_exist() {
    spooldash_cmd()
        .args(["spools", "list", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--brand")
                .and(predicate::str::contains("--material-type"))
                .and(predicate::str::contains("--filament-type")),
        );
}

// ── End-to-end against a mock server ────────────────────────────────

async fn mock_api() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/123/filament/GetFilament"))
        .and(header("X-API-KEY", "tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "filament": {
                "7": {
                    "id": 7,
                    "uid": "a1b2c3",
                    "brand": "Prusament",
                    "type": { "id": 3 },
                    "colorName": "Galaxy Black",
                    "colorHex": "#1a1a2e",
                    "total": 330_000,
                    "left": 204_600,
                    "dia": 1.75
                }
            }
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/123/filament/type/Get"))
        .and(header("X-API-KEY", "tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {
                    "id": 3,
                    "brand": { "name": "Prusament" },
                    "material_type_name": "PLA",
                    "filament_type_name": "PLA Matte",
                    "density": 1.24
                }
            ]
        })))
        .mount(&server)
        .await;

    server
}

#[tokio::test(flavor = "multi_thread")]
async fn test_spools_list_end_to_end() {
    let server = mock_api().await;

    let output = spooldash_cmd()
        .env("SIMPLYPRINT_API_BASE_URL", server.uri())
        .env("SIMPLYPRINT_API_TOKEN", "tok")
        .env("SIMPLYPRINT_API_COMPANY_ID", "123")
        .args(["spools", "list", "--output", "json"])
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", combined_output(&output));
    let spools: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(spools[0]["id"], 7);
    assert_eq!(spools[0]["color_name"], "Galaxy Black");
    assert_eq!(spools[0]["material"]["material_type"], "PLA");
    assert!(spools[0]["remaining_grams"].is_f64());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_vendor_error_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "status": false, "message": "token expired" })),
        )
        .mount(&server)
        .await;

    let output = spooldash_cmd()
        .env("SIMPLYPRINT_API_BASE_URL", server.uri())
        .env("SIMPLYPRINT_API_TOKEN", "tok")
        .env("SIMPLYPRINT_API_COMPANY_ID", "123")
        .arg("status")
        .output()
        .unwrap();

    // Vendor-API failures exit with the API code (5).
    assert_eq!(output.status.code(), Some(5));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("token expired"), "stderr:\n{stderr}");
}
