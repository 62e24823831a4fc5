use super::*;

#[test]
fn threshold_must_be_in_unit_interval() {
    assert!(SeverityClassifier::new(0.0).is_err());
    assert!(SeverityClassifier::new(-0.1).is_err());
    assert!(SeverityClassifier::new(1.5).is_err());
    assert!(SeverityClassifier::new(f64::NAN).is_err());
    assert!(SeverityClassifier::new(1.0).is_ok());
    assert!(SeverityClassifier::new(0.01).is_ok());
}

#[test]
fn default_threshold() {
    assert!((SeverityClassifier::default().threshold() - DEFAULT_SEVERITY_THRESHOLD).abs() < f64::EPSILON);
}

#[test]
fn blank_old_line_is_always_major() {
    let classifier = SeverityClassifier::new(1.0).unwrap();
    assert_eq!(classifier.classify("", "x = 1"), Severity::Major);
    assert_eq!(classifier.classify("    ", "    x = 1"), Severity::Major);
}

#[test]
fn small_edit_to_long_line_is_minor() {
    let classifier = SeverityClassifier::default();
    let old = "result = compute_total(items, discount=0.1, tax_rate=0.21, rounding=2)";
    let new = "result = compute_total(items, discount=0.2, tax_rate=0.21, rounding=2)";
    assert_eq!(classifier.classify(old, new), Severity::Minor);
}

#[test]
fn one_character_change_to_one_character_line_is_major() {
    let classifier = SeverityClassifier::default();
    assert_eq!(classifier.classify("a", "ab"), Severity::Major);
}

#[test]
fn ratio_uses_mean_length() {
    let ratio = SeverityClassifier::length_ratio("abcd", "abcdefgh");
    assert!((ratio - 4.0 / 6.0).abs() < 1e-9);
}

#[test]
fn ratio_at_threshold_is_major() {
    let classifier = SeverityClassifier::new(0.5).unwrap();
    // |6 - 10| / 8 == 0.5
    assert_eq!(classifier.classify("abcdefghij", "abcdef"), Severity::Major);
}

#[test]
fn severity_display_labels() {
    assert_eq!(Severity::Major.to_string(), "major change");
    assert_eq!(Severity::Minor.to_string(), "minor change");
}
