use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SlocDeltaError};

/// Default relative length delta at which a changed line becomes a major change.
pub const DEFAULT_SEVERITY_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Major,
    Minor,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Major => f.write_str("major change"),
            Self::Minor => f.write_str("minor change"),
        }
    }
}

/// Proportional length-delta policy for changed line pairs.
///
/// A one-character edit to a one-character line is major; the same edit to
/// an 80-character line is minor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeverityClassifier {
    threshold: f64,
}

impl SeverityClassifier {
    /// # Errors
    /// Returns a configuration error unless `0 < threshold <= 1`.
    pub fn new(threshold: f64) -> Result<Self> {
        if threshold > 0.0 && threshold <= 1.0 {
            Ok(Self { threshold })
        } else {
            Err(SlocDeltaError::Config(format!(
                "severity threshold must be in (0, 1], got {threshold}"
            )))
        }
    }

    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// `|len(new) - len(old)|` divided by the mean of both lengths.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn length_ratio(old: &str, new: &str) -> f64 {
        let old_len = old.chars().count() as f64;
        let new_len = new.chars().count() as f64;
        let mean = (old_len + new_len) / 2.0;
        if mean == 0.0 {
            return 0.0;
        }
        (new_len - old_len).abs() / mean
    }

    #[must_use]
    pub fn classify(&self, old: &str, new: &str) -> Severity {
        if old.trim().is_empty() {
            return Severity::Major;
        }
        if Self::length_ratio(old, new) >= self.threshold {
            Severity::Major
        } else {
            Severity::Minor
        }
    }
}

impl Default for SeverityClassifier {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SEVERITY_THRESHOLD,
        }
    }
}

#[cfg(test)]
#[path = "severity_tests.rs"]
mod tests;
