mod json;
mod progress;
mod text;

pub use json::JsonFormatter;
pub use progress::ScanProgress;
pub use text::{ColorMode, TextFormatter};

use std::path::PathBuf;

use crate::analyzer::FileCount;
use crate::diff::Annotation;
use crate::error::Result;
use crate::reconcile::ProjectComparison;

/// Trait for rendering results into various output formats.
pub trait OutputFormatter {
    /// Render a project comparison, totals included.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_comparison(&self, comparison: &ProjectComparison) -> Result<String>;

    /// Render single-version counts.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_counts(&self, counts: &[(PathBuf, FileCount)]) -> Result<String>;

    /// Render an annotated line diff; tags are appended after `comment_prefix`.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_annotation(&self, annotation: &Annotation, comment_prefix: &str) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    #[must_use]
    pub fn formatter(self, color: ColorMode) -> Box<dyn OutputFormatter> {
        match self {
            Self::Text => Box::new(TextFormatter::new(color)),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Forward-slash form of a path for stable output across platforms.
#[must_use]
pub fn display_path(path: &std::path::Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
