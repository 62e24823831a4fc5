use super::*;

#[test]
fn compare_identical_is_zero() {
    let engine = DiffEngine::default();
    let lines = ["import os", "print(os.name)", "print(os.name)"];
    assert_eq!(engine.compare(&lines, &lines), LineDelta::new(0, 0));
    assert_eq!(engine.compare_unordered(&lines, &lines), LineDelta::new(0, 0));
}

#[test]
fn compare_single_replacement() {
    let engine = DiffEngine::default();
    let old = ["a\n", "b\n", "c\n"];
    let new = ["a\n", "x\n", "c\n"];
    assert_eq!(engine.compare(&old, &new), LineDelta::new(1, 1));
}

#[test]
fn compare_against_empty() {
    let engine = DiffEngine::default();
    let empty: [&str; 0] = [];
    let lines = ["a", "b", "c"];
    assert_eq!(engine.compare(&empty, &lines), LineDelta::new(3, 0));
    assert_eq!(engine.compare(&lines, &empty), LineDelta::new(0, 3));
}

#[test]
fn unordered_ignores_moves() {
    let engine = DiffEngine::default();
    let old = ["a", "b", "c"];
    let new = ["c", "a", "b"];
    assert_eq!(engine.compare_unordered(&old, &new), LineDelta::new(0, 0));
    assert_ne!(engine.compare(&old, &new), LineDelta::new(0, 0));
}

#[test]
fn unordered_misses_duplicate_line_changes() {
    let engine = DiffEngine::default();
    let old = ["pass"];
    let new = ["pass", "pass", "pass"];
    assert_eq!(engine.compare(&old, &new), LineDelta::new(2, 0));
    assert_eq!(engine.compare_unordered(&old, &new), LineDelta::new(0, 0));
}

#[test]
fn delta_dispatches_on_mode() {
    let engine = DiffEngine::default();
    let old = ["x", "y"];
    let new = ["y", "x"];
    assert_eq!(
        engine.delta(DiffMode::Unordered, &old, &new),
        LineDelta::new(0, 0)
    );
    assert_eq!(
        engine.delta(DiffMode::Aligned, &old, &new),
        engine.compare(&old, &new)
    );
}

#[test]
fn annotate_uses_configured_threshold() {
    let strict = DiffEngine::new(SeverityClassifier::new(0.01).unwrap());
    let old = ["value = compute(1, 2, 3)"];
    let new = ["value = compute(1, 2, 3, 4)"];

    let annotation = strict.annotate(&old, &new);
    assert_eq!(annotation.new[0].tag, LineTag::Changed(Severity::Major));

    let lenient = DiffEngine::new(SeverityClassifier::new(1.0).unwrap());
    let annotation = lenient.annotate(&old, &new);
    assert_eq!(annotation.new[0].tag, LineTag::Changed(Severity::Minor));
}

#[test]
fn diff_mode_deserializes_lowercase() {
    let mode: DiffMode = serde_json::from_str("\"unordered\"").unwrap();
    assert_eq!(mode, DiffMode::Unordered);
}
