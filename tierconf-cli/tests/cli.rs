//! Integration tests for the tierconf CLI.
//!
//! These tests verify that the CLI binary behaves correctly, including
//! argument parsing, layering of sources, validation reporting and exit
//! codes.

mod common;

use assert_cmd::Command;
use common::TestEnv;
use predicates::prelude::*;

/// Test that the binary runs without arguments and displays help/error.
#[test]
fn test_cli_no_arguments() {
    let mut cmd = Command::cargo_bin("tierconf").expect("Failed to find tierconf binary");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

/// Test that the --version flag displays version information.
#[test]
fn test_cli_version_flag() {
    let mut cmd = Command::cargo_bin("tierconf").expect("Failed to find tierconf binary");

    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("tierconf"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

/// Test that the --help flag displays help text.
#[test]
fn test_cli_help_flag() {
    let mut cmd = Command::cargo_bin("tierconf").expect("Failed to find tierconf binary");

    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains(
            "Resolve and validate layered configuration",
        ));
}

#[test]
fn test_resolve_defaults_only() {
    let env = TestEnv::new();
    let manifest = env.server_manifest();

    env.command()
        .args(["resolve", "--format", "env", "--items"])
        .arg(&manifest)
        .assert()
        .success()
        .stdout("DEBUG=false\nHOST=127.0.0.1\nPORT=8080\n");
}

#[test]
fn test_resolve_missing_config_file_is_fine() {
    let env = TestEnv::new();
    let manifest = env.server_manifest();

    env.command()
        .args(["resolve", "--format", "env", "--items"])
        .arg(&manifest)
        .arg("--config")
        .arg(env.path().join("absent.yaml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("PORT=8080"));
}

#[test]
fn test_resolve_layers_file_then_environment() {
    let env = TestEnv::new();
    let manifest = env.server_manifest();
    let config = env.write_file("config.yaml", "port: 9000\nhost: example.org\n");

    env.command()
        .env("TIERCONF_CLI_TEST_PORT", "7000")
        .args(["resolve", "--format", "env", "--items"])
        .arg(&manifest)
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("PORT=7000"))
        .stdout(predicate::str::contains("HOST=example.org"));
}

#[test]
fn test_resolve_no_env_ignores_environment() {
    let env = TestEnv::new();
    let manifest = env.server_manifest();

    env.command()
        .env("TIERCONF_CLI_TEST_PORT", "7000")
        .args(["resolve", "--no-env", "--format", "env", "--items"])
        .arg(&manifest)
        .assert()
        .success()
        .stdout(predicate::str::contains("PORT=8080"));
}

#[test]
fn test_resolve_json_output() {
    let env = TestEnv::new();
    let manifest = env.server_manifest();

    let output = env
        .command()
        .args(["resolve", "--format", "json", "--items"])
        .arg(&manifest)
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["PORT"], "8080");
    assert_eq!(parsed["HOST"], "127.0.0.1");
}

#[test]
fn test_validation_failures_all_reported() {
    let env = TestEnv::new();
    let manifest = env.server_manifest();

    env.command()
        .env("TIERCONF_CLI_TEST_PORT", "70000")
        .env("TIERCONF_CLI_TEST_DEBUG", "maybe")
        .args(["check", "--items"])
        .arg(&manifest)
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "failed to validate configuration value of PORT: value 70000 is out of range [1,...,65535]",
        ))
        .stderr(predicate::str::contains(
            "failed to validate configuration value of DEBUG: value maybe is not a valid boolean",
        ))
        .stderr(predicate::str::contains(
            "2 configuration key(s) failed validation",
        ));
}

#[test]
fn test_check_success_message() {
    let env = TestEnv::new();
    let manifest = env.server_manifest();

    env.command()
        .args(["check", "--items"])
        .arg(&manifest)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn test_check_quiet_prints_nothing() {
    let env = TestEnv::new();
    let manifest = env.server_manifest();

    env.command()
        .args(["--quiet", "check", "--items"])
        .arg(&manifest)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_resolve_skip_validation_prints_invalid_values() {
    let env = TestEnv::new();
    let manifest = env.server_manifest();

    env.command()
        .env("TIERCONF_CLI_TEST_DEBUG", "maybe")
        .args(["resolve", "--skip-validation", "--format", "env", "--items"])
        .arg(&manifest)
        .assert()
        .success()
        .stdout(predicate::str::contains("DEBUG=maybe"));
}

#[test]
fn test_strict_mode_rejects_unknown_file_key() {
    let env = TestEnv::new();
    let manifest = env.server_manifest();
    let config = env.write_file("config.yaml", "prot: 9000\n");

    env.command()
        .args(["check", "--items"])
        .arg(&manifest)
        .arg("--config")
        .arg(&config)
        .assert()
        .code(6)
        .stderr(predicate::str::contains("unknown key(s): prot"));
}

#[test]
fn test_lenient_mode_accepts_unknown_file_key() {
    let env = TestEnv::new();
    let manifest = env.server_manifest();
    let config = env.write_file("config.yaml", "prot: 9000\n");

    env.command()
        .args(["check", "--lenient", "--items"])
        .arg(&manifest)
        .arg("--config")
        .arg(&config)
        .assert()
        .success();
}

#[test]
fn test_malformed_config_file() {
    let env = TestEnv::new();
    let manifest = env.server_manifest();
    let config = env.write_file("config.yaml", "invalid: yaml: syntax:");

    env.command()
        .args(["resolve", "--items"])
        .arg(&manifest)
        .arg("--config")
        .arg(&config)
        .assert()
        .code(6)
        .stderr(predicate::str::contains("failed to parse configuration file"));
}

#[test]
fn test_missing_manifest_is_invalid_arguments() {
    let env = TestEnv::new();

    env.command()
        .args(["check", "--items"])
        .arg(env.path().join("nope.yaml"))
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Manifest not found"));
}

#[test]
fn test_invalid_manifest_rule() {
    let env = TestEnv::new();
    let manifest = env.write_file("items.yaml", "items:\n  - key: A\n    rule: sometimes\n");

    env.command()
        .args(["check", "--items"])
        .arg(&manifest)
        .assert()
        .code(7)
        .stderr(predicate::str::contains("unknown rule 'sometimes'"));
}

#[test]
fn test_items_lists_declarations() {
    let env = TestEnv::new();
    let manifest = env.server_manifest();

    env.command()
        .args(["items", "--items"])
        .arg(&manifest)
        .assert()
        .success()
        .stdout(predicate::str::contains("KEY\tDEFAULT"))
        .stdout(predicate::str::contains(
            "PORT\t8080\tport\tTIERCONF_CLI_TEST_PORT\tuint-range:1..65535\tTCP port to listen on",
        ))
        .stdout(predicate::str::contains("DEBUG\tfalse\t-\tTIERCONF_CLI_TEST_DEBUG\tbool\t"));
}
