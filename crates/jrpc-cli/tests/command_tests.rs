// Rust guideline compliant 2026-10-19

//! Integration tests for CLI commands.

use jrpc_cli::commands::{classify, inspect, read_input};
use jrpc_cli::output::PlainFormatter;
use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Runs the `jrpc` binary in `dir` with `stdin` piped in.
fn run_jrpc(dir: &TempDir, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_jrpc"))
        .current_dir(dir.path())
        .env_remove("JRPC_OUTPUT_FORMAT")
        .env_remove("JRPC_LOG_LEVEL")
        .env_remove("JRPC_PRETTY_JSON")
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("run jrpc");
    // The child may exit before reading stdin, so a broken pipe is fine here.
    let _ = child
        .stdin
        .take()
        .expect("stdin")
        .write_all(stdin.as_bytes());
    child.wait_with_output().expect("wait for jrpc")
}

#[test]
fn test_inspect_render_plain() {
    let output = inspect::render(r#"{"id":1,"result":{"x":1}}"#, &PlainFormatter).unwrap();
    assert_eq!(output, "200\n1\n{\"x\":1}\nnull");
}

#[test]
fn test_inspect_render_rejects_malformed() {
    let err = inspect::render("{not json", &PlainFormatter).unwrap_err();
    let msg = format!("{:#}", err);
    assert!(msg.contains("Failed to parse response"), "got: {}", msg);
    assert!(msg.contains("Malformed payload"), "got: {}", msg);
}

#[test]
fn test_classify_render_plain() {
    let output = classify::render(
        "  {\"category\":401,\"message\":\"token expired\"}\n",
        &PlainFormatter,
    )
    .unwrap();
    assert_eq!(output, "401 Unauthorized false\ntoken expired");
}

#[test]
fn test_classify_render_rejects_unknown_schema() {
    let err = classify::render(r#"{"code":-32601}"#, &PlainFormatter).unwrap_err();
    assert!(err.to_string().starts_with("Unrecognized error:"));
}

#[test]
fn test_read_input_from_file() {
    let temp_dir = TempDir::new().expect("temp dir");
    let path = temp_dir.path().join("response.json");
    fs::write(&path, "{\"id\":1}").expect("write input");

    let content = read_input(Some(path.to_str().unwrap())).unwrap();
    assert_eq!(content, "{\"id\":1}");
}

#[test]
fn test_read_input_missing_file() {
    let temp_dir = TempDir::new().expect("temp dir");
    let path = temp_dir.path().join("absent.json");
    let err = read_input(Some(path.to_str().unwrap())).unwrap_err();
    assert!(err.to_string().starts_with("Failed to read"));
}

#[test]
fn test_binary_inspect_stdin_json() {
    let temp_dir = TempDir::new().expect("temp dir");
    let output = run_jrpc(
        &temp_dir,
        &["inspect", "--json"],
        r#"{"id":"a","error":"bad request"}"#,
    );

    assert!(
        output.status.success(),
        "expected success, got status: {:?}\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value = serde_json::from_str(stdout.trim()).expect("JSON output");
    assert_eq!(parsed["status_code"], 500);
    assert_eq!(parsed["response"]["result"], serde_json::Value::Null);
}

#[test]
fn test_binary_inspect_file_plain() {
    let temp_dir = TempDir::new().expect("temp dir");
    fs::write(
        temp_dir.path().join("response.json"),
        r#"{"id":3,"error":{"category":404,"message":"gone"}}"#,
    )
    .expect("write input");

    let output = run_jrpc(&temp_dir, &["inspect", "response.json", "--format", "plain"], "");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("404\n"), "got:\n{}", stdout);
}

#[test]
fn test_binary_inspect_malformed_fails() {
    let temp_dir = TempDir::new().expect("temp dir");
    let output = run_jrpc(&temp_dir, &["inspect", "--format", "plain"], "{not json");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Failed to parse response"), "got:\n{}", stderr);
}

#[test]
fn test_binary_classify_unrecognized_fails() {
    let temp_dir = TempDir::new().expect("temp dir");
    let output = run_jrpc(&temp_dir, &["classify", "--json"], r#"{"message":"x"}"#);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("\"error\""), "got:\n{}", stderr);
}

#[test]
fn test_binary_uses_config_file() {
    let temp_dir = TempDir::new().expect("temp dir");
    fs::write(
        temp_dir.path().join("jrpc.toml"),
        "output_format = \"plain\"\n",
    )
    .expect("write config");

    let output = run_jrpc(&temp_dir, &["inspect"], r#"{"id":1}"#);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "200\n1\nnull\nnull\n");
}

#[test]
fn test_binary_rejects_invalid_config() {
    let temp_dir = TempDir::new().expect("temp dir");
    fs::write(temp_dir.path().join("jrpc.toml"), "log_level = \"loud\"\n")
        .expect("write config");

    let output = run_jrpc(&temp_dir, &["inspect"], r#"{"id":1}"#);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to load config"));
}

#[test]
fn test_binary_init_writes_default_config() {
    let temp_dir = TempDir::new().expect("temp dir");
    let output = run_jrpc(&temp_dir, &["init"], "");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let path = temp_dir.path().join("jrpc.toml");
    let loaded = jrpc_core::Config::load(&path).expect("load written config");
    assert_eq!(loaded, jrpc_core::Config::default());
}

#[test]
fn test_binary_init_refuses_to_overwrite() {
    let temp_dir = TempDir::new().expect("temp dir");
    let path = temp_dir.path().join("jrpc.toml");
    fs::write(&path, "output_format = \"plain\"\n").expect("write config");

    let output = run_jrpc(&temp_dir, &["init"], "");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("already exists"));
    assert_eq!(
        fs::read_to_string(&path).expect("read config"),
        "output_format = \"plain\"\n"
    );
}

#[test]
fn test_binary_init_force_replaces_broken_config() {
    let temp_dir = TempDir::new().expect("temp dir");
    let path = temp_dir.path().join("jrpc.toml");
    fs::write(&path, "log_level = \"loud\"\n").expect("write config");

    let output = run_jrpc(&temp_dir, &["init", "--force"], "");
    assert!(output.status.success());

    let inspect = run_jrpc(&temp_dir, &["inspect", "--format", "plain"], r#"{"id":1}"#);
    assert!(inspect.status.success());
}

#[test]
fn test_binary_init_honors_config_flag() {
    let temp_dir = TempDir::new().expect("temp dir");
    let output = run_jrpc(&temp_dir, &["init", "--config", "custom.toml"], "");
    assert!(output.status.success());
    assert!(temp_dir.path().join("custom.toml").exists());
    assert!(!temp_dir.path().join("jrpc.toml").exists());
}
