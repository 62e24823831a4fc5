use serde::Serialize;

use super::StandardValidator;

/// PEP 8 maximum line length.
pub const PEP8_MAX_LINE_LENGTH: usize = 79;

/// A line that exceeds the configured maximum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineLengthViolation {
    /// 1-indexed line number
    pub line: usize,
    pub length: usize,
}

/// Rejects files containing any line longer than `max_length` characters.
///
/// Lengths are measured in characters with the line terminator excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineLengthValidator {
    max_length: usize,
}

impl LineLengthValidator {
    #[must_use]
    pub const fn new(max_length: usize) -> Self {
        Self { max_length }
    }

    #[must_use]
    pub const fn max_length(&self) -> usize {
        self.max_length
    }

    /// Every offending line, in file order.
    #[must_use]
    pub fn violations(&self, lines: &[String]) -> Vec<LineLengthViolation> {
        lines
            .iter()
            .enumerate()
            .filter_map(|(i, line)| {
                let length = line.chars().count();
                (length > self.max_length).then_some(LineLengthViolation {
                    line: i + 1,
                    length,
                })
            })
            .collect()
    }
}

impl Default for LineLengthValidator {
    fn default() -> Self {
        Self::new(PEP8_MAX_LINE_LENGTH)
    }
}

impl StandardValidator for LineLengthValidator {
    fn validate(&self, lines: &[String]) -> bool {
        lines
            .iter()
            .all(|line| line.chars().count() <= self.max_length)
    }

    fn name(&self) -> &'static str {
        "line-length"
    }
}

#[cfg(test)]
#[path = "line_length_tests.rs"]
mod tests;
