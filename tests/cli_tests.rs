// Non-interactive runs of the sortty binary

use std::process::Command;

use sortty::config::Config;

fn sortty() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_sortty"));
    command.env_remove("RUST_LOG");
    command
}

#[test]
fn test_save_config_writes_merged_settings() {
    let dir = tempfile::tempdir().expect("tempdir failed");
    let path = dir.path().join("saved.toml");

    let output = sortty()
        .args(["--algorithm", "quick", "--array", "-3, 1, 2", "--speed", "700"])
        .arg("--save-config")
        .arg(&path)
        .output()
        .expect("Failed to run sortty");
    assert!(output.status.success(), "sortty failed: {:?}", output);

    let saved = Config::load(&path).expect("Saved config unreadable");
    assert_eq!(
        saved,
        Config {
            algorithm: "quick".to_string(),
            array: vec![-3, 1, 2],
            speed: 700,
        }
    );
}

#[test]
fn test_save_config_rejects_invalid_settings() {
    let dir = tempfile::tempdir().expect("tempdir failed");
    let path = dir.path().join("saved.toml");

    let output = sortty()
        .args(["--algorithm", "bogo", "--save-config"])
        .arg(&path)
        .output()
        .expect("Failed to run sortty");
    assert!(!output.status.success());
    assert!(!path.exists());
}

#[test]
fn test_dump_prints_only_json_on_stdout() {
    let output = sortty()
        .args(["--algorithm", "merge", "--array", "5, 3, 8, 1", "--dump"])
        .output()
        .expect("Failed to run sortty");
    assert!(output.status.success(), "sortty failed: {:?}", output);

    let trace: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is not JSON");
    let steps = trace.as_array().expect("Trace is not a JSON array");
    assert_eq!(steps.last().expect("Trace is empty")["array"], serde_json::json!([1, 3, 5, 8]));
}

#[test]
fn test_log_file_receives_records_instead_of_terminal() {
    let dir = tempfile::tempdir().expect("tempdir failed");
    let log_path = dir.path().join("sortty.log");

    let output = sortty()
        .env("RUST_LOG", "info")
        .args(["--array", "2, 1", "--dump", "--log-file"])
        .arg(&log_path)
        .output()
        .expect("Failed to run sortty");
    assert!(output.status.success(), "sortty failed: {:?}", output);
    assert!(output.stderr.is_empty(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let log = std::fs::read_to_string(&log_path).expect("Log file missing");
    assert!(log.contains("starting with Bubble Sort"), "{}", log);
}
