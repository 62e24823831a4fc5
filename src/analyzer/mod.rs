//! Per-file reading, compliance gating and measurement.

mod types;

pub use types::{FileAnalysis, FileCount};

use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::counter::StructuralExtractor;
use crate::error::{Result, SlocDeltaError};
use crate::language::{Language, LanguageRegistry};
use crate::reader::{FsLineReader, LineReader};
use crate::scanner::FileScanner;
use crate::standard::{LineLengthValidator, StandardValidator};

/// Reads one file, checks it against the coding standard and measures it.
pub struct FileAnalyzer<R: LineReader = FsLineReader> {
    reader: R,
    registry: LanguageRegistry,
    validator: LineLengthValidator,
}

impl FileAnalyzer<FsLineReader> {
    #[must_use]
    pub const fn new(registry: LanguageRegistry, validator: LineLengthValidator) -> Self {
        Self::with_reader(FsLineReader, registry, validator)
    }
}

impl Default for FileAnalyzer<FsLineReader> {
    fn default() -> Self {
        Self::new(LanguageRegistry::default(), LineLengthValidator::default())
    }
}

impl<R: LineReader> FileAnalyzer<R> {
    #[must_use]
    pub const fn with_reader(
        reader: R,
        registry: LanguageRegistry,
        validator: LineLengthValidator,
    ) -> Self {
        Self {
            reader,
            registry,
            validator,
        }
    }

    #[must_use]
    pub const fn reader(&self) -> &R {
        &self.reader
    }

    #[must_use]
    pub const fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    #[must_use]
    pub fn language_for(&self, path: &Path) -> Option<&Language> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| self.registry.get_by_extension(ext))
    }

    #[must_use]
    pub fn analyze(&self, path: &Path) -> FileAnalysis {
        let Some(language) = self.language_for(path) else {
            debug!("{} is not a source file", path.display());
            return FileAnalysis::NotSourceFile;
        };

        let lines = self.reader.read(path);
        if !self.validator.validate(&lines) {
            let violations = self.validator.violations(&lines);
            warn!(
                "{} does not comply with {}: {} line(s) longer than {}",
                path.display(),
                self.validator.name(),
                violations.len(),
                self.validator.max_length()
            );
            return FileAnalysis::NonCompliant { lines, violations };
        }

        let metrics = StructuralExtractor::new(&language.syntax).metrics(&lines);
        debug!(
            "analyzed {}: {} physical, {} logical, {} methods",
            path.display(),
            metrics.physical_lines,
            metrics.logical_lines,
            metrics.methods
        );
        FileAnalysis::Analyzed { lines, metrics }
    }

    #[must_use]
    pub fn count(&self, path: &Path) -> FileCount {
        match self.analyze(path) {
            FileAnalysis::Analyzed { metrics, .. } => FileCount::Counted(metrics),
            FileAnalysis::NonCompliant { .. } => FileCount::NonCompliant,
            FileAnalysis::NotSourceFile => FileCount::NotSourceFile,
        }
    }

    /// Count a single file or every source file below a directory.
    ///
    /// A directory only yields files the scanner accepts; a single file is
    /// always reported, as `NotSourceFile` when its extension is unknown.
    ///
    /// # Errors
    /// Returns `PathNotFound` if `path` does not exist.
    pub fn count_path(
        &self,
        scanner: &impl FileScanner,
        path: &Path,
    ) -> Result<Vec<(PathBuf, FileCount)>> {
        if path.is_file() {
            return Ok(vec![(path.to_path_buf(), self.count(path))]);
        }
        if !path.is_dir() {
            return Err(SlocDeltaError::PathNotFound(path.to_path_buf()));
        }

        Ok(scanner
            .scan(path)?
            .into_iter()
            .map(|file| {
                let count = self.count(&file);
                (file, count)
            })
            .collect())
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
