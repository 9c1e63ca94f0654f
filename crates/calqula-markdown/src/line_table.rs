//! Line bookkeeping for block-level scanning.
//!
//! Each source line is described by three byte offsets: where the
//! line begins, where its content begins after leading whitespace,
//! and where its content ends (newline excluded). Rules are offered
//! half-open line ranges `[start_line, end_line)` into this table.

/// Offsets describing a single source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpan {
    /// Byte offset of the line start.
    pub begin: usize,
    /// Byte offset of the first non-whitespace character.
    pub content_begin: usize,
    /// Byte offset one past the last content byte (line break excluded,
    /// trailing spaces included).
    pub end: usize,
}

/// Per-line offset table over a source document.
///
/// Built once per document and read-only afterwards.
#[derive(Debug)]
pub struct LineTable<'a> {
    src: &'a str,
    lines: Vec<LineSpan>,
}

impl<'a> LineTable<'a> {
    /// Build the table for a document.
    #[must_use]
    pub fn new(src: &'a str) -> Self {
        let mut lines = Vec::new();
        let mut begin = 0;

        for line in src.split_inclusive('\n') {
            let content = line.trim_end_matches(['\n', '\r']);
            let shift = content.len() - content.trim_start().len();
            lines.push(LineSpan {
                begin,
                content_begin: begin + shift,
                end: begin + content.len(),
            });
            begin += line.len();
        }

        Self { src, lines }
    }

    /// Number of lines in the document.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the document has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// A line's text between its start-of-content and content-end
    /// offsets: leading whitespace excluded, nothing else trimmed.
    #[must_use]
    pub fn content(&self, line: usize) -> &'a str {
        let span = self.lines[line];
        &self.src[span.content_begin..span.end]
    }

    /// A line's text from line start to content end, leading
    /// whitespace included.
    #[must_use]
    pub fn raw(&self, line: usize) -> &'a str {
        let span = self.lines[line];
        &self.src[span.begin..span.end]
    }

    /// Offsets for a line.
    #[must_use]
    pub fn span(&self, line: usize) -> LineSpan {
        self.lines[line]
    }
}
