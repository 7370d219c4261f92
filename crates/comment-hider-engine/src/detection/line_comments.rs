use crate::text::{LineIndex, Span, lines_with_spans};

/// Finds every line whose first non-whitespace character is `#`.
///
/// Each span runs from the start of the line (leading whitespace included)
/// to the end of the line, excluding the terminator. No string or
/// docstring context is consulted here.
pub fn scan_line_comments(index: &LineIndex<'_>) -> Vec<Span> {
    lines_with_spans(index.text())
        .filter(|line| line.content().trim_start().starts_with('#'))
        .map(|line| {
            let start = line.span.start;
            let end = start + line.content().len();
            Span::line_comment(index.position(start), index.position(end))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{ColumnUnit, Position};
    use pretty_assertions::assert_eq;

    fn scan(text: &str) -> Vec<Span> {
        scan_line_comments(&LineIndex::new(text, ColumnUnit::Utf16))
    }

    #[test]
    fn whole_line_comment() {
        assert_eq!(
            scan("# a comment\n"),
            vec![Span::line_comment(Position::new(0, 0), Position::new(0, 11))]
        );
    }

    #[test]
    fn indented_comment_includes_indentation() {
        assert_eq!(
            scan("def f():\n    # note\n    pass\n"),
            vec![Span::line_comment(Position::new(1, 0), Position::new(1, 10))]
        );
    }

    #[test]
    fn trailing_comment_after_code_is_ignored() {
        assert!(scan("x = 1  # not a line comment\n").is_empty());
    }

    #[test]
    fn crlf_terminator_is_excluded() {
        assert_eq!(
            scan("#!\r\nx\r\n"),
            vec![Span::line_comment(Position::new(0, 0), Position::new(0, 2))]
        );
    }

    #[test]
    fn last_line_without_newline() {
        assert_eq!(
            scan("x\n#end"),
            vec![Span::line_comment(Position::new(1, 0), Position::new(1, 4))]
        );
    }
}
