//! Coding-standard checks that gate whether a file is analyzed at all.

mod line_length;

pub use line_length::{LineLengthValidator, LineLengthViolation, PEP8_MAX_LINE_LENGTH};

/// A language coding standard a file must satisfy before it is analyzed.
pub trait StandardValidator {
    /// Returns `true` when every line complies. Empty input complies.
    fn validate(&self, lines: &[String]) -> bool;

    /// Short human-readable name of the standard.
    fn name(&self) -> &'static str;
}
