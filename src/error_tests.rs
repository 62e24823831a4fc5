use std::path::PathBuf;

use super::*;

#[test]
fn error_display_config() {
    let err = SlocDeltaError::Config("invalid threshold".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid threshold");
}

#[test]
fn error_display_file_read() {
    let err = SlocDeltaError::FileRead {
        path: PathBuf::from("module.py"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
    };
    assert!(err.to_string().contains("module.py"));
}

#[test]
fn error_display_file_write() {
    let err = SlocDeltaError::FileWrite {
        path: PathBuf::from("out.json"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    assert_eq!(err.to_string(), "Failed to write file: out.json");
}

#[test]
fn error_display_path_not_found() {
    let err = SlocDeltaError::PathNotFound(PathBuf::from("old/src"));
    assert_eq!(err.to_string(), "Path does not exist: old/src");
}

#[test]
fn error_invalid_pattern_keeps_source() {
    let source = globset::Glob::new("[invalid").unwrap_err();
    let err = SlocDeltaError::InvalidPattern {
        pattern: "[invalid".to_string(),
        source,
    };
    assert!(err.to_string().contains("[invalid"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn error_from_io() {
    let io_err = std::io::Error::other("disk on fire");
    let err: SlocDeltaError = io_err.into();
    assert!(matches!(err, SlocDeltaError::Io(_)));
}

#[test]
fn error_from_toml() {
    let toml_err = toml::from_str::<toml::Value>("= broken").unwrap_err();
    let err: SlocDeltaError = toml_err.into();
    assert!(err.to_string().starts_with("TOML parse error"));
}

#[test]
fn error_type_returns_category() {
    assert_eq!(SlocDeltaError::Config("x".to_string()).error_type(), "Config");
    assert_eq!(
        SlocDeltaError::Io(std::io::Error::other("x")).error_type(),
        "IO"
    );
    assert_eq!(
        SlocDeltaError::PathNotFound(PathBuf::from("x")).error_type(),
        "Path"
    );
}

#[test]
fn error_display_mismatched_roots() {
    let err = SlocDeltaError::MismatchedRoots {
        old: PathBuf::from("v1"),
        new: PathBuf::from("v2.py"),
    };
    assert!(err.to_string().starts_with("Cannot compare v1 with v2.py"));
    assert_eq!(err.error_type(), "Path");
}
