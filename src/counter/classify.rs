use crate::language::SourceSyntax;

/// Classification of a single physical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Comment,
    /// Docstring opened and closed on the same line.
    DocstringInline,
    DocstringOpen,
    DocstringBody,
    DocstringClose,
    Code,
}

impl LineKind {
    #[must_use]
    pub const fn is_code(self) -> bool {
        matches!(self, Self::Code)
    }

    #[must_use]
    pub const fn is_docstring(self) -> bool {
        matches!(
            self,
            Self::DocstringInline | Self::DocstringOpen | Self::DocstringBody | Self::DocstringClose
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineStats {
    pub total: usize,
    pub code: usize,
    pub comment: usize,
    pub docstring: usize,
    pub blank: usize,
}

impl LineStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total: 0,
            code: 0,
            comment: 0,
            docstring: 0,
            blank: 0,
        }
    }

    /// Physical line count: lines that are neither blank, comments nor docstrings.
    #[must_use]
    pub const fn physical(&self) -> usize {
        self.code
    }

    fn record(&mut self, kind: LineKind) {
        self.total += 1;
        match kind {
            LineKind::Blank => self.blank += 1,
            LineKind::Comment => self.comment += 1,
            LineKind::Code => self.code += 1,
            _ => self.docstring += 1,
        }
    }
}

/// Two-state line classifier: outside or inside a multi-line docstring.
///
/// Heuristic limits: a triple quote that opens a string in the middle of a code
/// line (`x = """`) is not tracked, so the string body is counted as code, and
/// escaped delimiters inside a docstring are not recognised.
pub struct LineClassifier<'a> {
    syntax: &'a SourceSyntax,
    open_delimiter: Option<&'a str>,
}

impl<'a> LineClassifier<'a> {
    #[must_use]
    pub const fn new(syntax: &'a SourceSyntax) -> Self {
        Self {
            syntax,
            open_delimiter: None,
        }
    }

    #[must_use]
    pub const fn in_docstring(&self) -> bool {
        self.open_delimiter.is_some()
    }

    /// Classify the next line of the stream, updating the docstring state.
    pub fn classify(&mut self, line: &str) -> LineKind {
        let trimmed = line.trim();

        if let Some(delimiter) = self.open_delimiter {
            if trimmed.contains(delimiter) {
                self.open_delimiter = None;
                return LineKind::DocstringClose;
            }
            return LineKind::DocstringBody;
        }

        if trimmed.is_empty() {
            return LineKind::Blank;
        }

        if self.is_comment(trimmed) {
            return LineKind::Comment;
        }

        if let Some(delimiter) = self.docstring_start(trimmed) {
            let rest = &trimmed[delimiter.len()..];
            if rest.contains(delimiter) {
                return LineKind::DocstringInline;
            }
            self.open_delimiter = Some(delimiter);
            return LineKind::DocstringOpen;
        }

        LineKind::Code
    }

    fn is_comment(&self, trimmed: &str) -> bool {
        self.syntax
            .comment_prefixes
            .iter()
            .any(|prefix| trimmed.starts_with(prefix.as_str()))
    }

    fn docstring_start(&self, trimmed: &str) -> Option<&'a str> {
        self.syntax
            .docstring_delimiters
            .iter()
            .find(|delimiter| trimmed.starts_with(delimiter.as_str()))
            .map(String::as_str)
    }
}

/// Tally every line of `lines` by kind.
#[must_use]
pub fn tally<S: AsRef<str>>(syntax: &SourceSyntax, lines: &[S]) -> LineStats {
    let mut classifier = LineClassifier::new(syntax);
    let mut stats = LineStats::new();
    for line in lines {
        stats.record(classifier.classify(line.as_ref()));
    }
    stats
}

/// Lines that count toward the physical line count, in order.
pub fn code_lines<'s, S: AsRef<str>>(
    syntax: &'s SourceSyntax,
    lines: &'s [S],
) -> impl Iterator<Item = &'s str> + 's {
    let mut classifier = LineClassifier::new(syntax);
    lines
        .iter()
        .map(AsRef::as_ref)
        .filter(move |line| classifier.classify(line).is_code())
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
