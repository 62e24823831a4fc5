use std::fs;
use std::path::Path;

use clap::Parser;
use tempfile::TempDir;

use super::*;

fn cli(args: &[&str]) -> Cli {
    let mut argv = vec!["sloc-delta", "--no-config", "--quiet", "--color", "never"];
    argv.extend_from_slice(args);
    Cli::parse_from(argv)
}

fn compare_args(cli: &Cli) -> &CompareArgs {
    match &cli.command {
        crate::cli::Commands::Compare(args) => args,
        _ => panic!("Expected Compare command"),
    }
}

fn setup(dir: &Path) {
    fs::create_dir_all(dir.join("old")).unwrap();
    fs::create_dir_all(dir.join("new")).unwrap();
    fs::write(dir.join("old/keep.py"), "a = 1\nb = 2\n").unwrap();
    fs::write(dir.join("new/keep.py"), "a = 1\nb = 3\n").unwrap();
    fs::write(dir.join("old/gone.py"), "x = 1\n").unwrap();
}

#[test]
fn compare_writes_json_report() {
    let dir = TempDir::new().unwrap();
    setup(dir.path());
    let out = dir.path().join("report.json");
    let root = dir.path().to_string_lossy().to_string();

    let cli = cli(&[
        "compare",
        &format!("{root}/old"),
        &format!("{root}/new"),
        "--format",
        "json",
        "--output",
        out.to_str().unwrap(),
    ]);
    let code = run_compare_impl(compare_args(&cli), &cli).unwrap();

    assert_eq!(code, EXIT_SUCCESS);
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json["keep.py"]["added_lines"], 1);
    assert_eq!(json["keep.py"]["removed_lines"], 1);
    assert_eq!(json["gone.py"]["status"], "deleted");
    assert_eq!(json["Total"]["files"], 1);
}

#[test]
fn strict_mode_flags_non_compliant_files() {
    let dir = TempDir::new().unwrap();
    setup(dir.path());
    fs::write(dir.path().join("new/keep.py"), "y = 123456789\n").unwrap();
    let root = dir.path().to_string_lossy().to_string();

    let cli = cli(&[
        "compare",
        &format!("{root}/old"),
        &format!("{root}/new"),
        "--max-line-length",
        "10",
        "--strict",
    ]);
    let code = run_compare_impl(compare_args(&cli), &cli).unwrap();

    assert_eq!(code, EXIT_NONCOMPLIANT);
}

#[test]
fn invalid_threshold_is_config_error() {
    let dir = TempDir::new().unwrap();
    setup(dir.path());
    let root = dir.path().to_string_lossy().to_string();

    let cli = cli(&[
        "compare",
        &format!("{root}/old"),
        &format!("{root}/new"),
        "--threshold",
        "2.0",
    ]);

    assert_eq!(run_compare(compare_args(&cli), &cli), EXIT_CONFIG_ERROR);
}

#[test]
fn overrides_apply_to_config() {
    let cli = cli(&[
        "compare",
        "a",
        "b",
        "--threshold",
        "0.3",
        "--max-line-length",
        "99",
        "--unordered",
    ]);
    let mut config = Config::default();
    apply_cli_overrides(&mut config, compare_args(&cli));

    assert!((config.analysis.severity_threshold - 0.3).abs() < f64::EPSILON);
    assert_eq!(config.analysis.max_line_length, 99);
    assert_eq!(config.analysis.diff_mode, DiffMode::Unordered);
}
