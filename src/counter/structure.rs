use serde::Serialize;

use crate::language::SourceSyntax;

use super::classify::{code_lines, tally};
use super::logical::KeywordScanner;

/// Label shown when a file declares no class.
pub const NO_CLASS: &str = "No class";

/// Structural facts about one version of one file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StructuralMetrics {
    pub class_name: Option<String>,
    pub physical_lines: usize,
    pub logical_lines: usize,
    pub methods: usize,
}

impl StructuralMetrics {
    #[must_use]
    pub fn class_label(&self) -> &str {
        self.class_name.as_deref().unwrap_or(NO_CLASS)
    }
}

/// Line-oriented extractor for class name, method count and line counts.
///
/// Only lines the classifier counts as code are inspected, so headers quoted
/// inside docstrings or comments are ignored.
pub struct StructuralExtractor<'a> {
    syntax: &'a SourceSyntax,
    class_prefix: String,
    method_prefix: String,
    else_if_prefix: Option<String>,
    keywords: KeywordScanner,
}

impl<'a> StructuralExtractor<'a> {
    #[must_use]
    pub fn new(syntax: &'a SourceSyntax) -> Self {
        Self {
            syntax,
            class_prefix: syntax.class_prefix(),
            method_prefix: syntax.method_prefix(),
            else_if_prefix: syntax.else_if_keyword.as_ref().map(|k| format!("{k} ")),
            keywords: KeywordScanner::new(syntax),
        }
    }

    /// Name of the first class declared in the file.
    ///
    /// The keyword prefix and the trailing `:` are removed, so
    /// `class Foo(Base):` yields `Foo(Base)`. Later classes are not reported.
    #[must_use]
    pub fn extract_class_name<S: AsRef<str>>(&self, lines: &[S]) -> Option<String> {
        code_lines(self.syntax, lines)
            .map(str::trim)
            .find_map(|line| line.strip_prefix(self.class_prefix.as_str()))
            .map(|rest| rest.trim_end().trim_end_matches(':').trim().to_string())
    }

    /// Method headers at any nesting depth.
    #[must_use]
    pub fn count_methods<S: AsRef<str>>(&self, lines: &[S]) -> usize {
        code_lines(self.syntax, lines)
            .filter(|line| self.is_method_header(line.trim()))
            .count()
    }

    #[must_use]
    pub fn physical_lines<S: AsRef<str>>(&self, lines: &[S]) -> usize {
        tally(self.syntax, lines).physical()
    }

    /// Class and method headers count once each; `elif` lines are skipped;
    /// every control keyword on any other line counts.
    #[must_use]
    pub fn logical_lines<S: AsRef<str>>(&self, lines: &[S]) -> usize {
        code_lines(self.syntax, lines)
            .map(str::trim)
            .map(|line| {
                if self.is_class_header(line) || self.is_method_header(line) {
                    1
                } else if self.is_else_if(line) {
                    0
                } else {
                    self.keywords.count(line)
                }
            })
            .sum()
    }

    /// `(class_name, physical_lines, methods)` for the comparison pipeline.
    #[must_use]
    pub fn get_all_data<S: AsRef<str>>(&self, lines: &[S]) -> (Option<String>, usize, usize) {
        (
            self.extract_class_name(lines),
            self.physical_lines(lines),
            self.count_methods(lines),
        )
    }

    #[must_use]
    pub fn metrics<S: AsRef<str>>(&self, lines: &[S]) -> StructuralMetrics {
        let (class_name, physical_lines, methods) = self.get_all_data(lines);
        StructuralMetrics {
            class_name,
            physical_lines,
            logical_lines: self.logical_lines(lines),
            methods,
        }
    }

    fn is_class_header(&self, trimmed: &str) -> bool {
        trimmed.starts_with(self.class_prefix.as_str())
    }

    fn is_method_header(&self, trimmed: &str) -> bool {
        trimmed.starts_with(self.method_prefix.as_str())
    }

    fn is_else_if(&self, trimmed: &str) -> bool {
        self.else_if_prefix
            .as_deref()
            .is_some_and(|prefix| trimmed.starts_with(prefix))
    }
}

#[cfg(test)]
#[path = "structure_tests.rs"]
mod tests;
