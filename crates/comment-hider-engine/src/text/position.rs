use serde::{Deserialize, Serialize};

/// How columns are counted within a line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnUnit {
    /// UTF-16 code units, as used by most editor text APIs.
    #[default]
    Utf16,
    /// Unicode scalar values.
    Char,
    /// UTF-8 bytes.
    Byte,
}

impl ColumnUnit {
    /// Width of `s` in this unit.
    pub fn measure(self, s: &str) -> usize {
        match self {
            ColumnUnit::Utf16 => s.encode_utf16().count(),
            ColumnUnit::Char => s.chars().count(),
            ColumnUnit::Byte => s.len(),
        }
    }
}

/// A zero-indexed `(line, column)` location.
///
/// Ordering is by line, then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpanKind {
    /// `#` to end of line.
    LineComment,
    /// A triple-quoted literal standing on its own (docstring).
    BlockComment,
}

/// A classified region of source text, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: Position,
    pub end: Position,
    pub kind: SpanKind,
}

impl Span {
    pub fn line_comment(start: Position, end: Position) -> Self {
        Self {
            start,
            end,
            kind: SpanKind::LineComment,
        }
    }

    pub fn block_comment(start: Position, end: Position) -> Self {
        Self {
            start,
            end,
            kind: SpanKind::BlockComment,
        }
    }

    /// True if `line` lies within `[start.line, end.line]`.
    pub fn covers_line(&self, line: usize) -> bool {
        self.start.line <= line && line <= self.end.line
    }

    /// True if the two spans share any position.
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Newline table for one text snapshot.
///
/// Built once per detection run; translates byte offsets into
/// [`Position`]s and hands out line text by number.
#[derive(Debug)]
pub struct LineIndex<'a> {
    text: &'a str,
    line_starts: Vec<usize>,
    unit: ColumnUnit,
}

impl<'a> LineIndex<'a> {
    pub fn new(text: &'a str, unit: ColumnUnit) -> Self {
        let line_starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            text,
            line_starts,
            unit,
        }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Line number containing byte `offset` (clamped to the last line).
    pub fn line_of(&self, offset: usize) -> usize {
        self.line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1)
    }

    /// Byte offset at which `line` begins.
    pub fn line_start(&self, line: usize) -> usize {
        self.line_starts
            .get(line)
            .copied()
            .unwrap_or(self.text.len())
    }

    /// Text of `line` without its `\n` / `\r\n` terminator; `""` past the end.
    pub fn line_text(&self, line: usize) -> &'a str {
        let start = self.line_start(line);
        let end = self
            .line_starts
            .get(line + 1)
            .map_or(self.text.len(), |next| next - 1);
        let raw = self.text.get(start..end).unwrap_or("");
        raw.strip_suffix('\r').unwrap_or(raw)
    }

    /// Translates a byte offset into a [`Position`].
    pub fn position(&self, offset: usize) -> Position {
        let offset = offset.min(self.text.len());
        let line = self.line_of(offset);
        let start = self.line_start(line);
        let column = self
            .text
            .get(start..offset)
            .map_or(offset - start, |prefix| self.unit.measure(prefix));
        Position { line, column }
    }
}

/// One-shot offset translation. Prefer a shared [`LineIndex`] when
/// translating many offsets of the same text.
pub fn offset_to_position(text: &str, offset: usize, unit: ColumnUnit) -> Position {
    LineIndex::new(text, unit).position(offset)
}
