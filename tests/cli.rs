use std::io::Write;
use std::process::{Command, Stdio};

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "racingcar-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

#[test]
fn cli_plays_preset_race() {
    let exe = env!("CARGO_BIN_EXE_racingcar");
    let output = Command::new(exe)
        .args(["--names", "pobi,crong", "--rounds", "3", "--seed", "7"])
        .stdin(Stdio::null())
        .output()
        .expect("run cli");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Race results"));
    assert_eq!(stdout.matches("pobi : ").count(), 3);
    assert!(stdout.contains("Final winners: "));
}

#[test]
fn cli_same_seed_same_race() {
    let exe = env!("CARGO_BIN_EXE_racingcar");
    let run = || {
        Command::new(exe)
            .args(["--names", "pobi,crong,jun", "--rounds", "5", "--seed", "1337"])
            .stdin(Stdio::null())
            .output()
            .expect("run cli")
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn cli_reprompts_after_invalid_preset() {
    let exe = env!("CARGO_BIN_EXE_racingcar");
    let mut child = Command::new(exe)
        .args(["--names", "pobi", "--rounds", "2"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn cli");

    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"pobi,crong\n2\n")
        .expect("write answers");

    let output = child.wait_with_output().expect("wait cli");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[ERROR] at least 2 cars are required (got 1)"));
    assert!(stdout.contains("Final winners: "));
}

#[test]
fn cli_fails_when_input_closes() {
    let exe = env!("CARGO_BIN_EXE_racingcar");
    let output = Command::new(exe)
        .stdin(Stdio::null())
        .output()
        .expect("run cli");
    assert!(!output.status.success());
}

#[test]
fn cli_exports_race_log() {
    let exe = env!("CARGO_BIN_EXE_racingcar");
    let log_dir = temp_path("logs");
    let status = Command::new(exe)
        .args(["--names", "pobi,crong", "--rounds", "2", "--seed", "3", "--log-dir"])
        .arg(&log_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .status()
        .expect("run cli");
    assert!(status.success());

    let entry = std::fs::read_dir(&log_dir)
        .expect("log dir")
        .next()
        .expect("one log file")
        .expect("dir entry");
    let content = std::fs::read_to_string(entry.path()).expect("read log");
    let log: racingcar::RaceLog = serde_json::from_str(&content).expect("parse log");
    assert_eq!(log.rounds.len(), 2);
    assert!(!log.winners.is_empty());
    let _ = std::fs::remove_dir_all(log_dir);
}
