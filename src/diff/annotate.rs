use std::fmt;

use serde::Serialize;

use super::opcode::{OpTag, opcodes};
use super::severity::{Severity, SeverityClassifier};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineTag {
    Unchanged,
    Added,
    Deleted,
    Changed(Severity),
}

impl fmt::Display for LineTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unchanged => Ok(()),
            Self::Added => f.write_str("added"),
            Self::Deleted => f.write_str("deleted"),
            Self::Changed(severity) => severity.fmt(f),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedLine {
    pub text: String,
    pub tag: LineTag,
}

impl AnnotatedLine {
    fn new(text: &str, tag: LineTag) -> Self {
        Self {
            text: text.to_string(),
            tag,
        }
    }

    /// The line with its tag appended as a trailing comment.
    #[must_use]
    pub fn render(&self, comment_prefix: &str) -> String {
        match self.tag {
            LineTag::Unchanged => self.text.clone(),
            tag => format!("{}  {comment_prefix} {tag}", self.text),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChangeSummary {
    pub major: usize,
    pub minor: usize,
    pub added: usize,
    pub deleted: usize,
}

/// Old and new streams of a file pair, each line tagged with its change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Annotation {
    pub old: Vec<AnnotatedLine>,
    pub new: Vec<AnnotatedLine>,
}

impl Annotation {
    /// Counts tags on the new stream, plus deletions from the old stream.
    #[must_use]
    pub fn summary(&self) -> ChangeSummary {
        let mut summary = ChangeSummary::default();
        for line in &self.new {
            match line.tag {
                LineTag::Changed(Severity::Major) => summary.major += 1,
                LineTag::Changed(Severity::Minor) => summary.minor += 1,
                LineTag::Added => summary.added += 1,
                LineTag::Unchanged | LineTag::Deleted => {}
            }
        }
        summary.deleted = self
            .old
            .iter()
            .filter(|line| line.tag == LineTag::Deleted)
            .count();
        summary
    }
}

pub(super) fn annotate<S: AsRef<str>>(
    old: &[S],
    new: &[S],
    severity: &SeverityClassifier,
) -> Annotation {
    let old: Vec<&str> = old.iter().map(AsRef::as_ref).collect();
    let new: Vec<&str> = new.iter().map(AsRef::as_ref).collect();
    let mut out = Annotation::default();

    for code in opcodes(&old, &new) {
        let old_span = &old[code.old];
        let new_span = &new[code.new];
        match code.tag {
            OpTag::Equal => {
                out.old
                    .extend(old_span.iter().map(|l| AnnotatedLine::new(l, LineTag::Unchanged)));
                out.new
                    .extend(new_span.iter().map(|l| AnnotatedLine::new(l, LineTag::Unchanged)));
            }
            OpTag::Delete => {
                out.old
                    .extend(old_span.iter().map(|l| AnnotatedLine::new(l, LineTag::Deleted)));
            }
            OpTag::Insert => {
                out.new
                    .extend(new_span.iter().map(|l| AnnotatedLine::new(l, LineTag::Added)));
            }
            OpTag::Replace => annotate_replace(old_span, new_span, severity, &mut out),
        }
    }

    out
}

/// Pairs lines positionally; the unmatched tail of the longer span is major.
fn annotate_replace(
    old_span: &[&str],
    new_span: &[&str],
    severity: &SeverityClassifier,
    out: &mut Annotation,
) {
    for (old_line, new_line) in old_span.iter().zip(new_span) {
        let tag = LineTag::Changed(severity.classify(old_line, new_line));
        out.old.push(AnnotatedLine::new(old_line, tag));
        out.new.push(AnnotatedLine::new(new_line, tag));
    }

    let paired = old_span.len().min(new_span.len());
    let major = LineTag::Changed(Severity::Major);
    out.old
        .extend(old_span[paired..].iter().map(|l| AnnotatedLine::new(l, major)));
    out.new
        .extend(new_span[paired..].iter().map(|l| AnnotatedLine::new(l, major)));
}

#[cfg(test)]
#[path = "annotate_tests.rs"]
mod tests;
