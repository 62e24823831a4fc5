//! Line-reading collaborator. Never fails: unreadable files read as empty.

use std::path::Path;

use log::{debug, error};

/// Yields the lines of a file, or nothing when it cannot be read.
///
/// A missing file and an empty file are indistinguishable to callers.
pub trait LineReader {
    fn read(&self, path: &Path) -> Vec<String>;
}

/// Reads UTF-8 files from disk, stripping `\n` and `\r\n` terminators.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsLineReader;

impl LineReader for FsLineReader {
    fn read(&self, path: &Path) -> Vec<String> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                debug!("read {} ({} bytes)", path.display(), content.len());
                split_lines(&content)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                error!("file {} does not exist", path.display());
                Vec::new()
            }
            Err(e) => {
                error!("failed to read file {}: {e}", path.display());
                Vec::new()
            }
        }
    }
}

/// Split text into lines without terminators.
#[must_use]
pub fn split_lines(content: &str) -> Vec<String> {
    content.lines().map(String::from).collect()
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
