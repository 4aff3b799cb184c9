use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

fn confuser() -> Command {
    Command::cargo_bin("confuser").unwrap()
}

fn write_csv(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn file_count(dir: &Path) -> usize {
    std::fs::read_dir(dir).unwrap().count()
}

#[test]
fn display_prints_latex_table() {
    let dir = tempdir().unwrap();
    let csv = write_csv(&dir, "m.csv", ",A,B\nA,5,1\nB,2,7\n");

    confuser()
        .arg("display")
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("\\begin{table}[H]%\n"))
        .stdout(predicate::str::contains("    &  & A & B\\\\\n"))
        .stdout(predicate::str::contains(
            "\\multicolumn{1}{|c|}{A} & 5 & 1\\\\\n",
        ))
        .stdout(predicate::str::ends_with("\\end{table}\n"));
}

#[test]
fn display_uses_selected_range() {
    let dir = tempdir().unwrap();
    let csv = write_csv(
        &dir,
        "m.csv",
        "title,,,\n,,P,Q\n,P,3,0\n,Q,1,4\n",
    );

    confuser()
        .args(["display", "--range", "B2:D4"])
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("    &  & P & Q\\\\\n"))
        .stdout(predicate::str::contains("{|c|}{Q} & 1 & 4\\\\"));
}

#[test]
fn display_with_too_little_data_warns() {
    let dir = tempdir().unwrap();
    let csv = write_csv(&dir, "m.csv", ",A\nA,5\n");

    confuser()
        .arg("display")
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Not enough data"));
}

#[test]
fn display_rejects_bad_range() {
    let dir = tempdir().unwrap();
    let csv = write_csv(&dir, "m.csv", ",A,B\nA,5,1\nB,2,7\n");

    confuser()
        .args(["display", "--range", "nope"])
        .arg(&csv)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid cell notation"));
}

#[test]
fn display_reports_missing_file() {
    confuser()
        .args(["display", "/nonexistent/m.csv"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn display_reports_missing_sheet() {
    let dir = tempdir().unwrap();
    let csv = write_csv(&dir, "m.csv", ",A,B\nA,5,1\nB,2,7\n");

    confuser()
        .args(["display", "--sheet", "Other"])
        .arg(&csv)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Sheet not found: Other"));
}

#[test]
fn display_with_custom_delimiter() {
    let dir = tempdir().unwrap();
    let txt = write_csv(&dir, "m.txt", ";A;B\nA;5;1\nB;2;7\n");

    confuser()
        .args(["display", "--delimiter", ";"])
        .arg(&txt)
        .assert()
        .success()
        .stdout(predicate::str::contains("{|c|}{B} & 2 & 7\\\\"));
}

#[test]
fn export_appends_extension() {
    let dir = tempdir().unwrap();
    let csv = write_csv(&dir, "m.csv", ",A,B\nA,5,1\nB,2,7\n");
    let out = dir.path().join("results");

    confuser()
        .arg("export")
        .arg(&csv)
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("results.tex"));

    let written = std::fs::read_to_string(dir.path().join("results.tex")).unwrap();
    assert!(written.starts_with("\\begin{table}[H]%\n"));
    assert!(written.ends_with("\\end{table}"));
    assert_eq!(written.lines().count(), 16);
}

#[test]
fn export_keeps_existing_extension() {
    let dir = tempdir().unwrap();
    let csv = write_csv(&dir, "m.csv", ",A,B\nA,5,1\nB,2,7\n");
    let out = dir.path().join("results.tex");

    confuser()
        .arg("export")
        .arg(&csv)
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    assert!(out.exists());
    assert!(!dir.path().join("results.tex.tex").exists());
}

#[test]
fn export_rejects_empty_name() {
    let dir = tempdir().unwrap();
    let csv = write_csv(&dir, "m.csv", ",A,B\nA,5,1\nB,2,7\n");
    let before = file_count(dir.path());

    confuser()
        .args(["export", "-o", ""])
        .arg(&csv)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Please enter a file name"));

    assert_eq!(file_count(dir.path()), before);
}

#[test]
fn export_with_too_little_data_writes_nothing() {
    let dir = tempdir().unwrap();
    let csv = write_csv(&dir, "m.csv", "A,1\n");
    let before = file_count(dir.path());

    confuser()
        .arg("export")
        .arg(&csv)
        .arg("-o")
        .arg(dir.path().join("cm"))
        .assert()
        .success()
        .stderr(predicate::str::contains("Not enough data"));

    assert_eq!(file_count(dir.path()), before);
}
