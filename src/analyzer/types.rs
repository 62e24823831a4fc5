use serde::Serialize;

use crate::counter::StructuralMetrics;
use crate::standard::LineLengthViolation;

/// Outcome of reading and gating one version of one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileAnalysis {
    /// Extension is not handled by any registered language.
    NotSourceFile,
    /// At least one line breaks the coding standard; nothing was measured.
    NonCompliant {
        lines: Vec<String>,
        violations: Vec<LineLengthViolation>,
    },
    Analyzed {
        lines: Vec<String>,
        metrics: StructuralMetrics,
    },
}

impl FileAnalysis {
    #[must_use]
    pub const fn metrics(&self) -> Option<&StructuralMetrics> {
        match self {
            Self::Analyzed { metrics, .. } => Some(metrics),
            Self::NotSourceFile | Self::NonCompliant { .. } => None,
        }
    }

    /// Lines that were read, empty for files that were never opened.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        match self {
            Self::Analyzed { lines, .. } | Self::NonCompliant { lines, .. } => lines,
            Self::NotSourceFile => &[],
        }
    }

    #[must_use]
    pub const fn is_compliant(&self) -> bool {
        !matches!(self, Self::NonCompliant { .. })
    }
}

/// Single-version counting result for one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileCount {
    Counted(StructuralMetrics),
    NonCompliant,
    NotSourceFile,
}

impl FileCount {
    /// Text shown in place of counts for files that were not measured.
    #[must_use]
    pub const fn error_label(&self) -> Option<&'static str> {
        match self {
            Self::Counted(_) => None,
            Self::NonCompliant => Some("Doesn't comply with Standard"),
            Self::NotSourceFile => Some("Not a source file"),
        }
    }
}
