use std::fs;
use std::process::Command;

use tempfile::tempdir;

#[test]
fn stdout_carries_only_the_result_line() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("t187ap04_L.json");
    fs::write(&input, r#"[{"code":"1101"},{"code":"1102"}]"#).unwrap();
    let output = tmp.path().join("data").join("t187ap04_L.csv");

    let out = Command::new(env!("CARGO_BIN_EXE_twse-opendata"))
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .output()
        .unwrap();

    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("Wrote 2 records from "));

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("records loaded"));
    assert!(output.is_file());
}

#[test]
fn missing_input_exits_non_zero() {
    let tmp = tempdir().unwrap();
    let output = tmp.path().join("out.csv");

    let out = Command::new(env!("CARGO_BIN_EXE_twse-opendata"))
        .arg("--input")
        .arg(tmp.path().join("nope.json"))
        .arg("--output")
        .arg(&output)
        .output()
        .unwrap();

    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(!output.exists());
}
