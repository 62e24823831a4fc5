use std::fs;

use clap::Parser;
use tempfile::TempDir;

use super::*;
use crate::cli::Commands;

fn run(args: &[&str]) -> Result<i32> {
    let mut argv = vec!["sloc-delta", "--no-config", "--quiet", "--color", "never"];
    argv.extend_from_slice(args);
    let cli = Cli::parse_from(argv);
    match &cli.command {
        Commands::Diff(diff) => run_diff_impl(diff, &cli),
        _ => panic!("Expected Diff command"),
    }
}

#[test]
fn diff_writes_annotated_text() {
    let dir = TempDir::new().unwrap();
    let old = dir.path().join("old.py");
    let new = dir.path().join("new.py");
    let out = dir.path().join("diff.txt");
    fs::write(&old, "a = 1\nprint(a)\n").unwrap();
    fs::write(&new, "a = 1\nprint(a, sep='')\nextra = 2\n").unwrap();

    let code = run(&[
        "diff",
        old.to_str().unwrap(),
        new.to_str().unwrap(),
        "--output",
        out.to_str().unwrap(),
    ])
    .unwrap();

    assert_eq!(code, EXIT_SUCCESS);
    let text = fs::read_to_string(&out).unwrap();
    assert!(text.contains("print(a, sep='')  # major change"));
    assert!(text.contains("extra = 2  # major change"));
}

#[test]
fn diff_high_threshold_makes_change_minor() {
    let dir = TempDir::new().unwrap();
    let old = dir.path().join("old.py");
    let new = dir.path().join("new.py");
    let out = dir.path().join("diff.json");
    fs::write(&old, "print(a)\n").unwrap();
    fs::write(&new, "print(a, sep='')\n").unwrap();

    run(&[
        "diff",
        old.to_str().unwrap(),
        new.to_str().unwrap(),
        "--threshold",
        "1.0",
        "--format",
        "json",
        "--output",
        out.to_str().unwrap(),
    ])
    .unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json["summary"]["minor"], 1);
    assert_eq!(json["summary"]["major"], 0);
}

#[test]
fn diff_missing_file_is_error() {
    let dir = TempDir::new().unwrap();
    let present = dir.path().join("here.py");
    fs::write(&present, "x = 1\n").unwrap();

    let result = run(&[
        "diff",
        present.to_str().unwrap(),
        dir.path().join("gone.py").to_str().unwrap(),
    ]);
    assert!(matches!(result, Err(SlocDeltaError::PathNotFound(_))));
}
