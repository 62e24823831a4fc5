use std::fs;

use clap::Parser;
use tempfile::TempDir;

use super::*;
use crate::cli::Commands;
use crate::error::SlocDeltaError;

fn run(args: &[&str]) -> Result<i32> {
    let mut argv = vec!["sloc-delta", "--no-config", "--quiet"];
    argv.extend_from_slice(args);
    let cli = Cli::parse_from(argv);
    match &cli.command {
        Commands::Wrap(wrap) => run_wrap_impl(wrap, &cli),
        _ => panic!("Expected Wrap command"),
    }
}

#[test]
fn wrap_rewrites_file_in_place() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("long.py");
    fs::write(&path, "value = first + second + third\n").unwrap();

    let code = run(&["wrap", path.to_str().unwrap(), "--width", "16"]).unwrap();

    assert_eq!(code, EXIT_SUCCESS);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "value = first +\\\nsecond + third\n"
    );
}

#[test]
fn dry_run_leaves_file_untouched() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("long.py");
    let original = "value = first + second + third\n";
    fs::write(&path, original).unwrap();

    run(&["wrap", path.to_str().unwrap(), "--width", "16", "--dry-run"]).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn invalid_width_is_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("a.py");
    fs::write(&path, "x = 1\n").unwrap();

    let result = run(&["wrap", path.to_str().unwrap(), "--width", "1"]);
    assert!(matches!(result, Err(SlocDeltaError::Config(_))));
}

#[test]
fn missing_file_is_error() {
    let dir = TempDir::new().unwrap();
    let result = run(&["wrap", dir.path().join("nope.py").to_str().unwrap()]);
    assert!(matches!(result, Err(SlocDeltaError::PathNotFound(_))));
}

#[test]
fn undecodable_file_is_error_and_kept() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("latin1.py");
    let bytes = b"# caf\xe9\n".to_vec();
    fs::write(&path, &bytes).unwrap();

    let result = run(&["wrap", path.to_str().unwrap(), "--width", "4"]);

    assert!(matches!(result, Err(SlocDeltaError::FileRead { .. })));
    assert_eq!(fs::read(&path).unwrap(), bytes);
}
