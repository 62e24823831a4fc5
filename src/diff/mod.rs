//! Line-level differences between two versions of a file.

mod annotate;
mod opcode;
mod severity;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

pub use annotate::{AnnotatedLine, Annotation, ChangeSummary, LineTag};
pub use opcode::{OpTag, Opcode, opcodes};
pub use severity::{DEFAULT_SEVERITY_THRESHOLD, Severity, SeverityClassifier};

/// Lines present only in the new version and only in the old version.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LineDelta {
    pub added: usize,
    pub removed: usize,
}

impl LineDelta {
    #[must_use]
    pub const fn new(added: usize, removed: usize) -> Self {
        Self { added, removed }
    }
}

/// How the reconciler counts added/removed lines for a common file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffMode {
    /// Ordered alignment; duplicate lines are counted correctly.
    #[default]
    Aligned,
    /// Set difference; cheaper, ignores order and duplicates.
    Unordered,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DiffEngine {
    severity: SeverityClassifier,
}

impl DiffEngine {
    #[must_use]
    pub const fn new(severity: SeverityClassifier) -> Self {
        Self { severity }
    }

    #[must_use]
    pub const fn severity(&self) -> &SeverityClassifier {
        &self.severity
    }

    #[must_use]
    pub fn opcodes<S: AsRef<str>>(&self, old: &[S], new: &[S]) -> Vec<Opcode> {
        let old: Vec<&str> = old.iter().map(AsRef::as_ref).collect();
        let new: Vec<&str> = new.iter().map(AsRef::as_ref).collect();
        opcodes(&old, &new)
    }

    /// Added and removed line counts from the ordered alignment.
    #[must_use]
    pub fn compare<S: AsRef<str>>(&self, old: &[S], new: &[S]) -> LineDelta {
        self.opcodes(old, new)
            .iter()
            .fold(LineDelta::default(), |delta, code| match code.tag {
                OpTag::Equal => delta,
                OpTag::Insert | OpTag::Delete | OpTag::Replace => LineDelta {
                    added: delta.added + code.new.len(),
                    removed: delta.removed + code.old.len(),
                },
            })
    }

    /// Added and removed counts treating each side as a set of distinct lines.
    #[must_use]
    pub fn compare_unordered<S: AsRef<str>>(&self, old: &[S], new: &[S]) -> LineDelta {
        let old: HashSet<&str> = old.iter().map(AsRef::as_ref).collect();
        let new: HashSet<&str> = new.iter().map(AsRef::as_ref).collect();
        LineDelta {
            added: new.difference(&old).count(),
            removed: old.difference(&new).count(),
        }
    }

    #[must_use]
    pub fn delta<S: AsRef<str>>(&self, mode: DiffMode, old: &[S], new: &[S]) -> LineDelta {
        match mode {
            DiffMode::Aligned => self.compare(old, new),
            DiffMode::Unordered => self.compare_unordered(old, new),
        }
    }

    /// Tag every line of both versions with its change kind and severity.
    #[must_use]
    pub fn annotate<S: AsRef<str>>(&self, old: &[S], new: &[S]) -> Annotation {
        annotate::annotate(old, new, &self.severity)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
