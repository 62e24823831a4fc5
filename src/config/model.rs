use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::diff::{DEFAULT_SEVERITY_THRESHOLD, DiffMode};
use crate::error::{Result, SlocDeltaError};
use crate::standard::PEP8_MAX_LINE_LENGTH;

/// Top-level `.sloc-delta.toml` contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scanner: ScannerConfig,

    #[serde(default)]
    pub analysis: AnalysisConfig,

    #[serde(default)]
    pub wrap: WrapConfig,

    /// Extra languages keyed by display name, `[languages.<name>]`.
    #[serde(default)]
    pub languages: HashMap<String, CustomLanguageConfig>,
}

/// Directory traversal settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScannerConfig {
    /// Respect .gitignore rules while walking.
    #[serde(default)]
    pub gitignore: bool,

    /// Glob patterns for files to skip entirely.
    #[serde(default)]
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AnalysisConfig {
    /// File extensions that take part in the comparison.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    #[serde(default = "default_max_line_length")]
    pub max_line_length: usize,

    /// Length-change ratio at or above which a changed line is major.
    #[serde(default = "default_severity_threshold")]
    pub severity_threshold: f64,

    #[serde(default)]
    pub diff_mode: DiffMode,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            max_line_length: default_max_line_length(),
            severity_threshold: default_severity_threshold(),
            diff_mode: DiffMode::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct WrapConfig {
    #[serde(default = "default_max_line_length")]
    pub max_width: usize,
}

impl Default for WrapConfig {
    fn default() -> Self {
        Self {
            max_width: default_max_line_length(),
        }
    }
}

/// A language declared in config. Unset fields inherit the Python defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CustomLanguageConfig {
    pub extensions: Vec<String>,
    pub comment_prefixes: Option<Vec<String>>,
    pub docstring_delimiters: Option<Vec<String>>,
    pub class_keyword: Option<String>,
    pub method_keyword: Option<String>,
    pub else_if_keyword: Option<String>,
    pub control_keywords: Option<Vec<String>>,
    pub line_continuation: Option<String>,
}

fn default_extensions() -> Vec<String> {
    vec!["py".to_string()]
}

const fn default_max_line_length() -> usize {
    PEP8_MAX_LINE_LENGTH
}

const fn default_severity_threshold() -> f64 {
    DEFAULT_SEVERITY_THRESHOLD
}

impl Config {
    /// Check value ranges that serde cannot express.
    ///
    /// # Errors
    /// Returns `SlocDeltaError::Config` describing the first invalid value.
    pub fn validate(&self) -> Result<()> {
        let threshold = self.analysis.severity_threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(SlocDeltaError::Config(format!(
                "analysis.severity_threshold must be in (0, 1], got {threshold}"
            )));
        }
        if self.analysis.max_line_length == 0 {
            return Err(SlocDeltaError::Config(
                "analysis.max_line_length must be greater than 0".to_string(),
            ));
        }
        if self.wrap.max_width < 2 {
            return Err(SlocDeltaError::Config(format!(
                "wrap.max_width must be at least 2, got {}",
                self.wrap.max_width
            )));
        }
        for (name, language) in &self.languages {
            if language.extensions.is_empty() {
                return Err(SlocDeltaError::Config(format!(
                    "languages.{name}.extensions must not be empty"
                )));
            }
            if language
                .docstring_delimiters
                .as_ref()
                .is_some_and(|d| d.iter().any(String::is_empty))
            {
                return Err(SlocDeltaError::Config(format!(
                    "languages.{name}.docstring_delimiters must not contain empty strings"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
