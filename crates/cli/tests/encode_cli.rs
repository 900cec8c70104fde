use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

#[allow(deprecated)]
fn soundex() -> Command {
    let mut cmd = Command::cargo_bin("soundex").expect("binary");
    cmd.env_remove("SOUNDEX_CONFIG");
    cmd
}

fn run_json(args: &[&str]) -> (bool, Value) {
    let output = soundex().args(args).output().expect("command run");
    let body: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    (output.status.success(), body)
}

#[test]
fn encode_prints_bare_code() {
    soundex()
        .args(["encode", "Ashcraft"])
        .assert()
        .success()
        .stdout("A226\n");
}

#[test]
fn encode_keeps_apostrophes_out_of_the_code() {
    soundex()
        .args(["encode", "O'Hara"])
        .assert()
        .success()
        .stdout("O600\n");
}

#[test]
fn encode_accepts_leading_hyphen() {
    soundex()
        .args(["encode", "-bb"])
        .assert()
        .success()
        .stdout("-100\n");
}

#[test]
fn encode_json_returns_envelope() {
    let (ok, body) = run_json(&["encode", "washington", "--json"]);
    assert!(ok);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["data"]["word"], "washington");
    assert_eq!(body["data"]["code"], "W252");
    assert_eq!(body["meta"]["action"], "encode");
}

#[test]
fn empty_word_fails_in_text_mode() {
    soundex()
        .args(["encode", ""])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("non-empty"));
}

#[test]
fn empty_word_fails_with_json_error() {
    let (ok, body) = run_json(&["encode", "", "--json"]);
    assert!(!ok, "expected non-zero exit for empty word");
    assert_eq!(body["status"], "error");
    assert_eq!(body["error"]["code"], "invalid_argument");
    assert!(body["data"].is_null());
}

#[test]
fn compare_reports_match() {
    soundex()
        .args(["compare", "Robert", "Rupert"])
        .assert()
        .success()
        .stdout("R163 R163 match\n");
}

#[test]
fn compare_reports_difference() {
    let (ok, body) = run_json(&["compare", "Burroughs", "Burrows", "--pretty"]);
    assert!(ok);
    assert_eq!(body["data"]["matches"], false);
    assert_eq!(body["data"]["left"]["code"], "B622");
    assert_eq!(body["data"]["right"]["code"], "B620");
}

#[test]
fn command_api_executes_inline_request() {
    let (ok, body) = run_json(&[
        "command",
        "--json",
        r#"{"action":"encode","payload":{"word":"Tymczak"}}"#,
    ]);
    assert!(ok);
    assert_eq!(body["data"]["code"], "T522");
}

#[test]
fn command_api_reads_request_file() {
    let temp = tempdir().unwrap();
    let request = temp.path().join("request.json");
    fs::write(
        &request,
        r#"{"action":"compare","payload":{"left":"Soundex","right":"Sownteks"}}"#,
    )
    .unwrap();

    let (ok, body) = run_json(&["command", "--file", request.to_str().unwrap()]);
    assert!(ok);
    assert_eq!(body["data"]["matches"], true);
}

#[test]
fn command_api_reads_stdin() {
    let output = soundex()
        .arg("command")
        .write_stdin(r#"{"action":"encode","payload":{"word":"Lee"}}"#)
        .output()
        .expect("command run");
    assert!(output.status.success());
    let body: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(body["data"]["code"], "L000");
}

#[test]
fn command_api_reports_bad_payload() {
    let (ok, body) = run_json(&["command", "--json", r#"{"action":"compare","payload":{}}"#]);
    assert!(!ok);
    assert_eq!(body["error"]["code"], "invalid_request");
}

#[test]
fn command_api_reports_malformed_json() {
    let (ok, body) = run_json(&["command", "--json", "not json"]);
    assert!(!ok, "expected non-zero exit for malformed request");
    assert_eq!(body["status"], "error");
    assert_eq!(body["error"]["code"], "invalid_request");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("Invalid JSON passed to --json/--file"));
}

#[test]
fn command_api_reports_unreadable_file() {
    let temp = tempdir().unwrap();
    let request = temp.path().join("missing.json");

    let (ok, body) = run_json(&["command", "--file", request.to_str().unwrap()]);
    assert!(!ok);
    assert_eq!(body["status"], "error");
    assert_eq!(body["error"]["code"], "invalid_request");
    assert!(body["message"].as_str().unwrap().contains("missing.json"));
}

#[test]
fn command_api_rejects_empty_stdin() {
    let output = soundex()
        .arg("command")
        .write_stdin("  \n")
        .output()
        .expect("command run");
    assert!(!output.status.success());
    let body: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(body["error"]["code"], "invalid_request");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("Command request is empty"));
}

#[test]
fn config_file_switches_to_json() {
    let temp = tempdir().unwrap();
    let config = temp.path().join("soundex.toml");
    fs::write(&config, "format = \"json\"\n").unwrap();

    let (ok, body) = run_json(&["--config", config.to_str().unwrap(), "encode", "Knuth"]);
    assert!(ok);
    assert_eq!(body["data"]["code"], "K530");
}

#[test]
fn config_env_var_is_honoured() {
    let temp = tempdir().unwrap();
    let config = temp.path().join("soundex.toml");
    fs::write(&config, "format = \"json\"\npretty = true\n").unwrap();

    let output = soundex()
        .env("SOUNDEX_CONFIG", &config)
        .args(["encode", "Gauss"])
        .output()
        .expect("command run");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains('\n') && stdout.lines().count() > 1, "{stdout}");
    let body: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(body["data"]["code"], "G200");
}

#[test]
fn invalid_config_fails_with_path() {
    let temp = tempdir().unwrap();
    let config = temp.path().join("bad.toml");
    fs::write(&config, "colour = true\n").unwrap();

    soundex()
        .args(["--config", config.to_str().unwrap(), "encode", "Lee"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config"));

    let (ok, body) = run_json(&["--config", config.to_str().unwrap(), "encode", "Lee", "--json"]);
    assert!(!ok);
    assert_eq!(body["status"], "error");
    assert_eq!(body["error"]["code"], "config_error");
    assert!(body["message"].as_str().unwrap().contains("bad.toml"));
}

#[test]
fn missing_config_reports_config_error() {
    let temp = tempdir().unwrap();
    let config = temp.path().join("absent.toml");

    let (ok, body) = run_json(&["--config", config.to_str().unwrap(), "encode", "Lee", "--json"]);
    assert!(!ok);
    assert_eq!(body["error"]["code"], "config_error");
}

#[test]
fn text_flag_overrides_json_config() {
    let temp = tempdir().unwrap();
    let config = temp.path().join("soundex.toml");
    fs::write(&config, "format = \"json\"\npretty = true\n").unwrap();

    soundex()
        .args(["--config", config.to_str().unwrap(), "encode", "Euler", "--text"])
        .assert()
        .success()
        .stdout("E460\n");
}

#[test]
fn verbose_logs_to_stderr_only() {
    soundex()
        .env_remove("RUST_LOG")
        .args(["--verbose", "encode", "Hilbert"])
        .assert()
        .success()
        .stdout("H416\n")
        .stderr(predicate::str::contains("encoded"));
}
