use std::fmt::Write;
use std::path::PathBuf;

use crate::analyzer::FileCount;
use crate::diff::{Annotation, LineTag, Severity};
use crate::error::Result;
use crate::reconcile::{FileComparison, FileStatus, ProjectComparison, TOTAL_KEY};

use super::{OutputFormatter, display_path};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    Always,
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

const PATH_WIDTH: usize = 40;
const NAME_WIDTH: usize = 30;

pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var_os("NO_COLOR").is_some() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn paint(&self, text: &str, color: Option<&str>) -> String {
        match color {
            Some(color) if self.use_colors => format!("{color}{text}{}", ansi::RESET),
            _ => text.to_string(),
        }
    }

    const fn status_color(status: FileStatus) -> Option<&'static str> {
        match status {
            FileStatus::Modified => None,
            FileStatus::New => Some(ansi::GREEN),
            FileStatus::Deleted => Some(ansi::RED),
            FileStatus::NonCompliant => Some(ansi::YELLOW),
            FileStatus::NotSourceFile => Some(ansi::CYAN),
        }
    }

    const fn tag_color(tag: LineTag) -> Option<&'static str> {
        match tag {
            LineTag::Unchanged => None,
            LineTag::Added => Some(ansi::GREEN),
            LineTag::Deleted | LineTag::Changed(Severity::Major) => Some(ansi::RED),
            LineTag::Changed(Severity::Minor) => Some(ansi::YELLOW),
        }
    }

    fn comparison_row(&self, output: &mut String, path: &str, comparison: &FileComparison) {
        let (name, physical, methods, added, removed) = comparison.legacy_row();
        let name = format!("{name:<NAME_WIDTH$}");
        writeln!(
            output,
            "{path:<PATH_WIDTH$} {} {physical:>8} {methods:>7} {added:>6} {removed:>7}",
            self.paint(&name, Self::status_color(comparison.status)),
        )
        .ok();
    }
}

impl OutputFormatter for TextFormatter {
    fn format_comparison(&self, comparison: &ProjectComparison) -> Result<String> {
        let mut output = String::new();
        let header = format!(
            "{:<PATH_WIDTH$} {:<NAME_WIDTH$} {:>8} {:>7} {:>6} {:>7}",
            "File", "Class", "Physical", "Methods", "Added", "Removed"
        );
        writeln!(output, "{}", self.paint(&header, Some(ansi::BOLD))).ok();

        for (path, file) in comparison.iter() {
            self.comparison_row(&mut output, &display_path(path), file);
        }

        let totals = comparison.totals();
        let files = format!("{} file(s)", totals.files);
        writeln!(
            output,
            "{TOTAL_KEY:<PATH_WIDTH$} {files:<NAME_WIDTH$} {:>8} {:>7} {:>6} {:>7}",
            totals.physical_lines, "", totals.added_lines, totals.removed_lines
        )
        .ok();

        Ok(output)
    }

    fn format_counts(&self, counts: &[(PathBuf, FileCount)]) -> Result<String> {
        let mut output = String::new();
        let header = format!(
            "{:<PATH_WIDTH$} {:>7} {:>8} {:<NAME_WIDTH$} {:>7}",
            "File", "Logical", "Physical", "Class", "Methods"
        );
        writeln!(output, "{}", self.paint(&header, Some(ansi::BOLD))).ok();

        for (path, count) in counts {
            let path = display_path(path);
            match count {
                FileCount::Counted(metrics) => {
                    writeln!(
                        output,
                        "{path:<PATH_WIDTH$} {:>7} {:>8} {:<NAME_WIDTH$} {:>7}",
                        metrics.logical_lines,
                        metrics.physical_lines,
                        metrics.class_label(),
                        metrics.methods
                    )
                    .ok();
                }
                FileCount::NonCompliant | FileCount::NotSourceFile => {
                    let label = count.error_label().unwrap_or_default();
                    writeln!(
                        output,
                        "{path:<PATH_WIDTH$} {}",
                        self.paint(&format!("error: {label}"), Some(ansi::YELLOW))
                    )
                    .ok();
                }
            }
        }

        Ok(output)
    }

    fn format_annotation(&self, annotation: &Annotation, comment_prefix: &str) -> Result<String> {
        let mut output = String::new();
        for (title, lines) in [("old", &annotation.old), ("new", &annotation.new)] {
            writeln!(output, "{}", self.paint(&format!("=== {title} ==="), Some(ansi::BOLD))).ok();
            for line in lines {
                writeln!(
                    output,
                    "{}",
                    self.paint(&line.render(comment_prefix), Self::tag_color(line.tag))
                )
                .ok();
            }
        }

        let summary = annotation.summary();
        writeln!(
            output,
            "{} major, {} minor, {} added, {} deleted",
            summary.major, summary.minor, summary.added, summary.deleted
        )
        .ok();

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
