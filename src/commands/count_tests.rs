use std::fs;

use clap::Parser;
use tempfile::TempDir;

use super::*;
use crate::cli::Commands;

fn run(args: &[&str]) -> (i32, Cli) {
    let mut argv = vec!["sloc-delta", "--no-config", "--quiet"];
    argv.extend_from_slice(args);
    let cli = Cli::parse_from(argv);
    let code = match &cli.command {
        Commands::Count(count) => run_count(count, &cli),
        _ => panic!("Expected Count command"),
    };
    (code, cli)
}

#[test]
fn count_directory_to_json() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("calc.py"),
        "class Calc:\n    def add(self, a, b):\n        if a:\n            return a + b\n",
    )
    .unwrap();
    let out = dir.path().join("counts.json");

    let (code, _) = run(&[
        "count",
        dir.path().to_str().unwrap(),
        "--format",
        "json",
        "--output",
        out.to_str().unwrap(),
    ]);

    assert_eq!(code, EXIT_SUCCESS);
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["class_name"], "Calc");
    assert_eq!(json[0]["physical_lines"], 4);
    assert_eq!(json[0]["logical_lines"], 3);
    assert_eq!(json[0]["methods"], 1);
}

#[test]
fn count_missing_path_is_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing");

    let (code, _) = run(&["count", missing.to_str().unwrap()]);
    assert_eq!(code, EXIT_CONFIG_ERROR);
}

#[test]
fn count_strict_with_non_compliant_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("wide.py"), format!("{}\n", "z".repeat(120))).unwrap();

    let (code, _) = run(&["count", dir.path().to_str().unwrap(), "--strict"]);
    assert_eq!(code, EXIT_NONCOMPLIANT);

    let (code, _) = run(&["count", dir.path().to_str().unwrap()]);
    assert_eq!(code, EXIT_SUCCESS);
}
