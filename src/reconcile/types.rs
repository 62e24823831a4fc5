use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::counter::{NO_CLASS, StructuralMetrics};
use crate::diff::LineDelta;

/// Key under which the totals row is rendered.
pub const TOTAL_KEY: &str = "Total";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    /// Present under both roots.
    Modified,
    New,
    Deleted,
    NonCompliant,
    NotSourceFile,
}

impl FileStatus {
    /// Label shown in place of the class name for one-sided or rejected files.
    #[must_use]
    pub const fn label(self) -> Option<&'static str> {
        match self {
            Self::Modified => None,
            Self::New => Some("New file"),
            Self::Deleted => Some("Deleted"),
            Self::NonCompliant => Some("Doesn't comply with Standard"),
            Self::NotSourceFile => Some("Not a source file"),
        }
    }

    /// Whether entries with this status are summed into the totals.
    #[must_use]
    pub const fn is_counted(self) -> bool {
        matches!(self, Self::Modified | Self::New)
    }
}

/// Row of the original tuple-shaped report: label, physical, methods, then
/// the two line counters.
pub type LegacyRow = (String, String, String, usize, usize);

/// Per-file result of reconciling two trees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileComparison {
    pub status: FileStatus,
    pub class_name: Option<String>,
    pub physical_lines: Option<usize>,
    pub methods: Option<usize>,
    pub added_lines: usize,
    pub removed_lines: usize,
}

impl FileComparison {
    /// A file present in both versions, measured on its new version.
    #[must_use]
    pub fn modified(metrics: StructuralMetrics, delta: LineDelta) -> Self {
        Self {
            status: FileStatus::Modified,
            class_name: metrics.class_name,
            physical_lines: Some(metrics.physical_lines),
            methods: Some(metrics.methods),
            added_lines: delta.added,
            removed_lines: delta.removed,
        }
    }

    /// A file only in the new version; every physical line counts as added.
    #[must_use]
    pub fn new_file(metrics: StructuralMetrics) -> Self {
        Self {
            status: FileStatus::New,
            class_name: metrics.class_name,
            physical_lines: Some(metrics.physical_lines),
            methods: Some(metrics.methods),
            added_lines: metrics.physical_lines,
            removed_lines: 0,
        }
    }

    /// A file only in the old version. Its historical size is not reported.
    #[must_use]
    pub const fn deleted() -> Self {
        Self {
            status: FileStatus::Deleted,
            class_name: None,
            physical_lines: Some(0),
            methods: Some(0),
            added_lines: 0,
            removed_lines: 0,
        }
    }

    #[must_use]
    pub const fn non_compliant() -> Self {
        Self::unmeasured(FileStatus::NonCompliant)
    }

    #[must_use]
    pub const fn not_source_file() -> Self {
        Self::unmeasured(FileStatus::NotSourceFile)
    }

    const fn unmeasured(status: FileStatus) -> Self {
        Self {
            status,
            class_name: None,
            physical_lines: None,
            methods: None,
            added_lines: 0,
            removed_lines: 0,
        }
    }

    /// Class name, status label, or `"No class"`.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.status
            .label()
            .or(self.class_name.as_deref())
            .unwrap_or(NO_CLASS)
    }

    /// The tuple shape the report historically used.
    ///
    /// New files keep their historical placement `(label, n, m, 0, n)`.
    #[must_use]
    pub fn legacy_row(&self) -> LegacyRow {
        let number = |n: Option<usize>| n.map_or_else(|| "None".to_string(), |n| n.to_string());
        let (fourth, fifth) = match self.status {
            FileStatus::New => (self.removed_lines, self.added_lines),
            _ => (self.added_lines, self.removed_lines),
        };
        (
            self.display_name().to_string(),
            number(self.physical_lines),
            number(self.methods),
            fourth,
            fifth,
        )
    }
}

/// Sums over every counted entry of a reconciliation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub files: usize,
    pub physical_lines: usize,
    pub added_lines: usize,
    pub removed_lines: usize,
}

impl Totals {
    pub fn add(&mut self, comparison: &FileComparison) {
        if !comparison.status.is_counted() {
            return;
        }
        self.files += 1;
        self.physical_lines += comparison.physical_lines.unwrap_or(0);
        self.added_lines += comparison.added_lines;
        self.removed_lines += comparison.removed_lines;
    }
}

/// Ordered per-file results plus their totals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectComparison {
    files: IndexMap<PathBuf, FileComparison>,
    totals: Totals,
}

impl ProjectComparison {
    #[must_use]
    pub fn files(&self) -> &IndexMap<PathBuf, FileComparison> {
        &self.files
    }

    #[must_use]
    pub const fn totals(&self) -> &Totals {
        &self.totals
    }

    #[must_use]
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&FileComparison> {
        self.files.get(path.as_ref())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    #[must_use]
    pub fn has_non_compliant(&self) -> bool {
        self.files
            .values()
            .any(|c| c.status == FileStatus::NonCompliant)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PathBuf, &FileComparison)> {
        self.files.iter()
    }
}

impl FromIterator<(PathBuf, FileComparison)> for ProjectComparison {
    fn from_iter<I: IntoIterator<Item = (PathBuf, FileComparison)>>(iter: I) -> Self {
        let mut totals = Totals::default();
        let files = iter
            .into_iter()
            .inspect(|(_, comparison)| totals.add(comparison))
            .collect();
        Self { files, totals }
    }
}

/// Serialized as one map: path keys followed by a `"Total"` entry.
impl Serialize for ProjectComparison {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.files.len() + 1))?;
        for (path, comparison) in &self.files {
            map.serialize_entry(&path.to_string_lossy().replace('\\', "/"), comparison)?;
        }
        map.serialize_entry(TOTAL_KEY, &self.totals)?;
        map.end()
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
