use super::*;

#[test]
fn exit_codes_are_distinct() {
    assert_ne!(EXIT_SUCCESS, EXIT_NONCOMPLIANT);
    assert_ne!(EXIT_SUCCESS, EXIT_CONFIG_ERROR);
    assert_ne!(EXIT_NONCOMPLIANT, EXIT_CONFIG_ERROR);
}

#[test]
fn end_to_end_comparison_through_public_api() {
    use std::fs;

    use tempfile::TempDir;

    use crate::analyzer::FileAnalyzer;
    use crate::diff::DiffEngine;
    use crate::reconcile::ProjectReconciler;
    use crate::scanner::{DirectoryScanner, GlobFilter};

    let dir = TempDir::new().unwrap();
    let old = dir.path().join("old");
    let new = dir.path().join("new");
    fs::create_dir_all(&old).unwrap();
    fs::create_dir_all(&new).unwrap();
    fs::write(old.join("m.py"), "def f():\n    return 1\n").unwrap();
    fs::write(new.join("m.py"), "def f():\n    return 2\n").unwrap();

    let reconciler = ProjectReconciler::new(
        FileAnalyzer::default(),
        DirectoryScanner::new(GlobFilter::new(vec!["py".to_string()], &[]).unwrap()),
        DiffEngine::default(),
    );
    let result = reconciler.reconcile(&old, &new).unwrap();

    assert_eq!(result.totals().added_lines, 1);
    assert_eq!(result.totals().removed_lines, 1);
}
