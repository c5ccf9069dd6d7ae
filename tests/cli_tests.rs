use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};
use tempfile::tempdir;

fn sample(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("samples").join(name)
}

fn run_loghunter(logs: &Path, rules: &Path, out: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_loghunter"))
        .arg("--logs")
        .arg(logs)
        .arg("--rules")
        .arg(rules)
        .arg("--out")
        .arg(out)
        .env_remove("LOGHUNTER_TIMESTAMP_POLICY")
        .env_remove("LOGHUNTER_LOG_FORMAT")
        .output()
        .expect("failed to launch loghunter")
}

/// The document written to --out is exactly what goes to stdout
#[test]
fn test_stdout_matches_written_document() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("alerts.json");

    let output = run_loghunter(&sample("linux_auth.log"), &sample("rules.yaml"), &out);
    assert!(
        output.status.success(),
        "expected success, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8(output.stdout).unwrap();
    let written = fs::read_to_string(&out).unwrap();
    assert_eq!(stdout, written);
    assert!(written.ends_with("]\n"), "{written:?}");

    let alerts: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(alerts.as_array().map(Vec::len), Some(1));
    assert_eq!(alerts[0]["address"], "203.0.113.7");
}

#[test]
fn test_invalid_rules_exit_non_zero_with_empty_stdout() {
    let dir = tempdir().unwrap();
    let rules = dir.path().join("rules.yaml");
    let out = dir.path().join("alerts.json");
    fs::write(&rules, "threshold: 0\n").unwrap();

    let output = run_loghunter(&sample("linux_auth.log"), &rules, &out);
    assert!(!output.status.success());
    assert_ne!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty(), "{:?}", String::from_utf8_lossy(&output.stdout));
    assert!(!out.exists());
    assert!(String::from_utf8_lossy(&output.stderr).contains("threshold"));
}

#[test]
fn test_missing_arguments_exit_non_zero() {
    let output = Command::new(env!("CARGO_BIN_EXE_loghunter"))
        .arg("--logs")
        .arg(sample("linux_auth.log"))
        .output()
        .expect("failed to launch loghunter");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
