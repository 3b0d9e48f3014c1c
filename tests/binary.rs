use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;

fn run_in(dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_elf_cals"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("binary runs")
}

#[test]
fn test_prints_top_three_then_max() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("elfCals.txt"),
        "1000\n2000\n3000\n\n4000\n\n5000\n6000\n\n7000\n8000\n9000\n\n10000\n",
    )
    .unwrap();

    let output = run_in(dir.path());

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "45000\n24000\n");
    assert!(output.stderr.is_empty());

    // Same file, same answer.
    assert_eq!(run_in(dir.path()).stdout, output.stdout);
}

#[test]
fn test_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_in(dir.path());

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("elfCals.txt"));
}

#[test]
fn test_too_few_blocks_fails() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("elfCals.txt"), "1\n2\n3").unwrap();

    let output = run_in(dir.path());

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("InsufficientData { blocks: 1 }"));
}
