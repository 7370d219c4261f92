use super::range::TextRange;

/// A reference to a single line of the source with its byte range.
#[derive(Debug, Clone, Copy)]
pub struct LineRef<'a> {
    /// Byte range of this line in the source (includes the newline if present).
    pub span: TextRange,
    /// The raw line text, newline included.
    pub text: &'a str,
}

impl<'a> LineRef<'a> {
    /// The line text without its `\n` / `\r\n` terminator.
    pub fn content(&self) -> &'a str {
        let t = self.text.strip_suffix('\n').unwrap_or(self.text);
        t.strip_suffix('\r').unwrap_or(t)
    }
}

/// Returns an iterator over lines with their byte ranges.
///
/// Newline characters are kept in `text` so the ranges tile the source
/// exactly. An empty source yields no lines.
pub fn lines_with_spans(text: &str) -> impl Iterator<Item = LineRef<'_>> + '_ {
    let mut offset = 0usize;
    text.split_inclusive('\n').map(move |line| {
        let start = offset;
        offset += line.len();
        LineRef {
            span: TextRange::new(start, offset),
            text: line,
        }
    })
}
