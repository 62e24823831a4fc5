mod directory;
mod filter;

pub use directory::DirectoryScanner;
pub use filter::{FileFilter, GlobFilter};

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory depth-first and return matching file paths in sorted order.
    ///
    /// # Errors
    /// Returns an error if `root` does not exist.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;

    /// Like [`FileScanner::scan`], with each path made relative to `root`.
    ///
    /// # Errors
    /// Returns an error if `root` does not exist.
    fn scan_relative(&self, root: &Path) -> Result<Vec<PathBuf>> {
        Ok(self
            .scan(root)?
            .into_iter()
            .filter_map(|path| path.strip_prefix(root).ok().map(Path::to_path_buf))
            .collect())
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
