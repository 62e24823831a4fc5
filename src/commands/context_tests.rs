use std::collections::HashMap;

use tempfile::TempDir;

use super::*;
use crate::config::CustomLanguageConfig;

#[test]
fn color_choice_maps_to_mode() {
    assert_eq!(color_choice_to_mode(ColorChoice::Auto), ColorMode::Auto);
    assert_eq!(color_choice_to_mode(ColorChoice::Always), ColorMode::Always);
    assert_eq!(color_choice_to_mode(ColorChoice::Never), ColorMode::Never);
}

#[test]
fn log_level_follows_flags() {
    assert_eq!(log_level(0, false), LevelFilter::Warn);
    assert_eq!(log_level(1, false), LevelFilter::Info);
    assert_eq!(log_level(2, false), LevelFilter::Debug);
    assert_eq!(log_level(5, false), LevelFilter::Trace);
    assert_eq!(log_level(3, true), LevelFilter::Error);
}

#[test]
fn load_config_skipped_with_no_config() {
    let config = load_config(Some(Path::new("/definitely/missing.toml")), true).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn load_config_from_explicit_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(&path, "[analysis]\nmax_line_length = 120\n").unwrap();

    let config = load_config(Some(&path), false).unwrap();
    assert_eq!(config.analysis.max_line_length, 120);
}

#[test]
fn scan_extensions_prefers_override() {
    let config = Config::default();
    let exts = scan_extensions(&config, Some(&["pyi".to_string()]));
    assert_eq!(exts, vec!["pyi".to_string()]);
}

#[test]
fn scan_extensions_include_custom_languages() {
    let mut languages = HashMap::new();
    languages.insert(
        "cython".to_string(),
        CustomLanguageConfig {
            extensions: vec!["pyx".to_string(), "py".to_string()],
            ..Default::default()
        },
    );
    let config = Config {
        languages,
        ..Default::default()
    };

    assert_eq!(
        scan_extensions(&config, None),
        vec!["py".to_string(), "pyx".to_string()]
    );
}

#[test]
fn write_output_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("reports/nested/out.txt");

    write_output(Some(&path), "hello", false).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
}

#[test]
fn build_analyzer_uses_configured_limit() {
    let mut config = Config::default();
    config.analysis.max_line_length = 5;
    let analyzer = build_analyzer(&config);

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("a.py");
    fs::write(&path, "abcdefgh\n").unwrap();

    assert!(!analyzer.analyze(&path).is_compliant());
}
