//! Match two versions of a project by relative path and compare each file.

mod types;

pub use types::{FileComparison, FileStatus, LegacyRow, ProjectComparison, TOTAL_KEY, Totals};

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::path::{Path, PathBuf};

use log::debug;

use crate::analyzer::{FileAnalysis, FileAnalyzer};
use crate::diff::{DiffEngine, DiffMode};
use crate::error::{Result, SlocDeltaError};
use crate::reader::{FsLineReader, LineReader};
use crate::scanner::{DirectoryScanner, FileFilter, FileScanner, GlobFilter};

/// Where a relative path exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Pair {
    old: Option<PathBuf>,
    new: Option<PathBuf>,
}

/// Compares an old and a new project tree file by file.
pub struct ProjectReconciler<R: LineReader = FsLineReader, F: FileFilter = GlobFilter> {
    analyzer: FileAnalyzer<R>,
    scanner: DirectoryScanner<F>,
    engine: DiffEngine,
    mode: DiffMode,
}

impl<R: LineReader, F: FileFilter> ProjectReconciler<R, F> {
    #[must_use]
    pub const fn new(
        analyzer: FileAnalyzer<R>,
        scanner: DirectoryScanner<F>,
        engine: DiffEngine,
    ) -> Self {
        Self {
            analyzer,
            scanner,
            engine,
            mode: DiffMode::Aligned,
        }
    }

    #[must_use]
    pub const fn with_mode(mut self, mode: DiffMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub const fn mode(&self) -> DiffMode {
        self.mode
    }

    /// Lazily compare the two roots. Files are read only as the iterator advances.
    ///
    /// # Errors
    /// Returns an error if a root is missing, or one root is a file and the
    /// other a directory.
    pub fn iter(&self, old_root: &Path, new_root: &Path) -> Result<Reconciliation<'_, R, F>> {
        let pairs = self.pair_paths(old_root, new_root)?;
        debug!(
            "reconciling {} against {}: {} path(s)",
            old_root.display(),
            new_root.display(),
            pairs.len()
        );
        Ok(Reconciliation {
            reconciler: self,
            pairs: pairs.into_iter(),
        })
    }

    /// Compare the two roots and total the results.
    ///
    /// # Errors
    /// Same conditions as [`ProjectReconciler::iter`].
    pub fn reconcile(&self, old_root: &Path, new_root: &Path) -> Result<ProjectComparison> {
        Ok(self.iter(old_root, new_root)?.collect())
    }

    fn pair_paths(&self, old_root: &Path, new_root: &Path) -> Result<BTreeMap<PathBuf, Pair>> {
        for root in [old_root, new_root] {
            if !root.exists() {
                return Err(SlocDeltaError::PathNotFound(root.to_path_buf()));
            }
        }

        let mut pairs: BTreeMap<PathBuf, Pair> = BTreeMap::new();
        match (old_root.is_file(), new_root.is_file()) {
            (true, true) => {
                let key = new_root
                    .file_name()
                    .map_or_else(|| new_root.to_path_buf(), PathBuf::from);
                pairs.insert(
                    key,
                    Pair {
                        old: Some(old_root.to_path_buf()),
                        new: Some(new_root.to_path_buf()),
                    },
                );
            }
            (false, false) => {
                for rel in self.scanner.scan_relative(old_root)? {
                    pairs.entry(rel.clone()).or_default().old = Some(old_root.join(&rel));
                }
                for rel in self.scanner.scan_relative(new_root)? {
                    pairs.entry(rel.clone()).or_default().new = Some(new_root.join(&rel));
                }
            }
            _ => {
                return Err(SlocDeltaError::MismatchedRoots {
                    old: old_root.to_path_buf(),
                    new: new_root.to_path_buf(),
                });
            }
        }
        Ok(pairs)
    }

    fn compare_pair(&self, pair: &Pair) -> FileComparison {
        match (&pair.old, &pair.new) {
            (Some(old), Some(new)) => self.compare_common(old, new),
            (None, Some(new)) => match self.analyzer.analyze(new) {
                FileAnalysis::Analyzed { metrics, .. } => FileComparison::new_file(metrics),
                FileAnalysis::NonCompliant { .. } => FileComparison::non_compliant(),
                FileAnalysis::NotSourceFile => FileComparison::not_source_file(),
            },
            (Some(_), None) | (None, None) => FileComparison::deleted(),
        }
    }

    fn compare_common(&self, old: &Path, new: &Path) -> FileComparison {
        match self.analyzer.analyze(new) {
            FileAnalysis::Analyzed { lines, metrics } => {
                let old_lines = self.analyzer.reader().read(old);
                let delta = self.engine.delta(self.mode, &old_lines, &lines);
                FileComparison::modified(metrics, delta)
            }
            FileAnalysis::NonCompliant { .. } => FileComparison::non_compliant(),
            FileAnalysis::NotSourceFile => FileComparison::not_source_file(),
        }
    }
}

/// Lazy per-file comparison in sorted relative-path order.
pub struct Reconciliation<'a, R: LineReader, F: FileFilter> {
    reconciler: &'a ProjectReconciler<R, F>,
    pairs: btree_map::IntoIter<PathBuf, Pair>,
}

impl<R: LineReader, F: FileFilter> Iterator for Reconciliation<'_, R, F> {
    type Item = (PathBuf, FileComparison);

    fn next(&mut self) -> Option<Self::Item> {
        let (path, pair) = self.pairs.next()?;
        let comparison = self.reconciler.compare_pair(&pair);
        debug!("{}: {:?}", path.display(), comparison.status);
        Some((path, comparison))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.pairs.size_hint()
    }
}

impl<R: LineReader, F: FileFilter> ExactSizeIterator for Reconciliation<'_, R, F> {}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
