//! Re-flow over-long lines with a continuation marker.

use std::path::Path;

use log::debug;

use crate::error::{Result, SlocDeltaError};
use crate::reader::split_lines;

/// Python explicit line continuation.
pub const DEFAULT_CONTINUATION: &str = "\\";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineWrapper {
    max_width: usize,
    marker: String,
}

impl LineWrapper {
    /// # Errors
    /// Returns a configuration error if `max_width` leaves no room for content
    /// next to the continuation marker.
    pub fn new(max_width: usize) -> Result<Self> {
        Self::with_marker(max_width, DEFAULT_CONTINUATION)
    }

    /// # Errors
    /// Returns a configuration error if `max_width` leaves no room for content
    /// next to `marker`.
    pub fn with_marker(max_width: usize, marker: &str) -> Result<Self> {
        let marker_width = marker.chars().count();
        if max_width <= marker_width {
            return Err(SlocDeltaError::Config(format!(
                "wrap width {max_width} must exceed continuation marker width {marker_width}"
            )));
        }
        Ok(Self {
            max_width,
            marker: marker.to_string(),
        })
    }

    #[must_use]
    pub const fn max_width(&self) -> usize {
        self.max_width
    }

    /// Wrap every line wider than the limit. Lines that fit are unchanged.
    #[must_use]
    pub fn wrap<S: AsRef<str>>(&self, lines: &[S]) -> Vec<String> {
        let mut out = Vec::with_capacity(lines.len());
        for line in lines {
            self.wrap_line(line.as_ref(), &mut out);
        }
        out
    }

    fn wrap_line(&self, line: &str, out: &mut Vec<String>) {
        if line.chars().count() <= self.max_width {
            out.push(line.to_string());
            return;
        }

        let content_width = self.max_width - self.marker.chars().count();
        let mut indent: String = line.chars().take_while(|c| *c == ' ').collect();
        // Indentation that leaves no room for content cannot be preserved.
        if indent.len() >= content_width {
            indent.clear();
        }

        let mut rest: Vec<char> = line.trim_end().chars().collect();
        while rest.len() > self.max_width {
            let lead = rest.iter().take_while(|c| **c == ' ').count();
            let split = rest[..=content_width]
                .iter()
                .rposition(|c| *c == ' ')
                .filter(|&pos| pos > lead && pos <= content_width);

            let (head, tail) = match split {
                Some(pos) => (&rest[..pos], trim_start(&rest[pos + 1..])),
                None => (&rest[..content_width], &rest[content_width..]),
            };

            let mut piece: String = head.iter().collect();
            piece.push_str(&self.marker);
            out.push(piece);

            let mut next: Vec<char> = indent.chars().collect();
            next.extend_from_slice(tail);
            rest = next;
        }
        out.push(rest.into_iter().collect());
    }
}

fn trim_start(chars: &[char]) -> &[char] {
    let skip = chars.iter().take_while(|c| c.is_whitespace()).count();
    &chars[skip..]
}

/// Wrap the file at `path` in place and return the new lines.
///
/// # Errors
/// Returns an error if the width is invalid, the file does not exist, is not
/// valid UTF-8, or cannot be written.
pub fn wrap_file(path: &Path, max_width: usize) -> Result<Vec<String>> {
    wrap_file_with(path, &LineWrapper::new(max_width)?)
}

/// [`wrap_file`] with a preconfigured wrapper, e.g. a language-specific marker.
///
/// The file keeps its line terminator (`\n` or `\r\n`) and its trailing
/// newline state. It is left untouched when it cannot be read or when no line
/// needs wrapping.
///
/// # Errors
/// Returns an error if the file does not exist, is not valid UTF-8, or cannot
/// be written.
pub fn wrap_file_with(path: &Path, wrapper: &LineWrapper) -> Result<Vec<String>> {
    let content = read_source(path)?;
    let wrapped = wrapper.wrap(&split_lines(&content));

    let ending = line_ending(&content);
    let mut rewritten = wrapped.join(ending);
    if content.ends_with('\n') && !wrapped.is_empty() {
        rewritten.push_str(ending);
    }
    if rewritten == content {
        debug!("{} needs no wrapping", path.display());
        return Ok(wrapped);
    }

    std::fs::write(path, rewritten).map_err(|source| SlocDeltaError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(wrapped)
}

/// Wrapped lines of the file at `path` without modifying it.
///
/// # Errors
/// Returns an error if the file does not exist or is not valid UTF-8.
pub fn preview_wrap(path: &Path, wrapper: &LineWrapper) -> Result<Vec<String>> {
    Ok(wrapper.wrap(&split_lines(&read_source(path)?)))
}

fn read_source(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(SlocDeltaError::PathNotFound(path.to_path_buf()));
    }
    std::fs::read_to_string(path).map_err(|source| SlocDeltaError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Terminator of the first line; `\n` when the text has none.
fn line_ending(content: &str) -> &'static str {
    match content.find('\n') {
        Some(pos) if content[..pos].ends_with('\r') => "\r\n",
        _ => "\n",
    }
}

#[cfg(test)]
#[path = "wrap_tests.rs"]
mod tests;
