use std::path::PathBuf;

use serde::Serialize;

use crate::analyzer::FileCount;
use crate::diff::{AnnotatedLine, Annotation, ChangeSummary};
use crate::error::Result;
use crate::reconcile::ProjectComparison;

use super::{OutputFormatter, display_path};

pub struct JsonFormatter;

#[derive(Serialize)]
struct CountEntry<'a> {
    path: String,
    #[serde(flatten)]
    count: &'a FileCount,
}

#[derive(Serialize)]
struct AnnotationOutput<'a> {
    summary: ChangeSummary,
    old: &'a [AnnotatedLine],
    new: &'a [AnnotatedLine],
}

impl OutputFormatter for JsonFormatter {
    fn format_comparison(&self, comparison: &ProjectComparison) -> Result<String> {
        Ok(serde_json::to_string_pretty(comparison)?)
    }

    fn format_counts(&self, counts: &[(PathBuf, FileCount)]) -> Result<String> {
        let entries: Vec<CountEntry<'_>> = counts
            .iter()
            .map(|(path, count)| CountEntry {
                path: display_path(path),
                count,
            })
            .collect();
        Ok(serde_json::to_string_pretty(&entries)?)
    }

    fn format_annotation(&self, annotation: &Annotation, _comment_prefix: &str) -> Result<String> {
        let output = AnnotationOutput {
            summary: annotation.summary(),
            old: &annotation.old,
            new: &annotation.new,
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
