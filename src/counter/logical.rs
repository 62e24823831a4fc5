use regex::Regex;

use crate::language::SourceSyntax;

/// Remove the contents of quoted string literals, quotes included.
///
/// Backslash escapes are honoured inside a literal. An unterminated literal
/// is stripped to the end of the line.
#[must_use]
pub fn strip_string_literals(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for c in line.chars() {
        match quote {
            Some(q) => {
                if escaped {
                    escaped = false;
                } else if c == '\\' {
                    escaped = true;
                } else if c == q {
                    quote = None;
                }
            }
            None if c == '"' || c == '\'' => quote = Some(c),
            None => out.push(c),
        }
    }

    out
}

/// Counts control keywords on identifier boundaries, ignoring string contents
/// and trailing comments.
pub struct KeywordScanner {
    pattern: Option<Regex>,
    comment_prefixes: Vec<String>,
}

impl KeywordScanner {
    #[must_use]
    pub fn new(syntax: &SourceSyntax) -> Self {
        let alternation = syntax
            .control_keywords
            .iter()
            .map(|k| regex::escape(k))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = (!alternation.is_empty()).then(|| {
            Regex::new(&format!(r"\b(?:{alternation})\b"))
                .expect("escaped keyword alternation is a valid regex")
        });

        Self {
            pattern,
            comment_prefixes: syntax.comment_prefixes.clone(),
        }
    }

    /// Number of keyword tokens on `line`. Every occurrence counts.
    #[must_use]
    pub fn count(&self, line: &str) -> usize {
        let Some(pattern) = &self.pattern else {
            return 0;
        };

        let stripped = strip_string_literals(line);
        let code = self
            .comment_prefixes
            .iter()
            .filter_map(|prefix| stripped.find(prefix.as_str()))
            .min()
            .map_or(stripped.as_str(), |pos| &stripped[..pos]);

        pattern.find_iter(code).count()
    }
}

#[cfg(test)]
#[path = "logical_tests.rs"]
mod tests;
