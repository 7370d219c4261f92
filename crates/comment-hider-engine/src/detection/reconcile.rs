use crate::text::Span;

/// Drops line comments on any line covered by an accepted block span.
pub fn suppress_nested_line_comments(line_spans: Vec<Span>, block_spans: &[Span]) -> Vec<Span> {
    line_spans
        .into_iter()
        .filter(|line| !block_spans.iter().any(|b| b.covers_line(line.start.line)))
        .collect()
}

/// Merges line and block spans into one list ordered by start position.
///
/// Line comments inside block spans are suppressed first; the result has no
/// overlapping spans. Adjacent spans are not merged.
pub fn reconcile(line_spans: Vec<Span>, block_spans: Vec<Span>) -> Vec<Span> {
    let mut spans = suppress_nested_line_comments(line_spans, &block_spans);
    spans.extend(block_spans);
    spans.sort_by_key(|s| s.start);
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::Position;
    use pretty_assertions::assert_eq;

    fn line(l: usize, len: usize) -> Span {
        Span::line_comment(Position::new(l, 0), Position::new(l, len))
    }

    fn block(from: (usize, usize), to: (usize, usize)) -> Span {
        Span::block_comment(Position::new(from.0, from.1), Position::new(to.0, to.1))
    }

    #[test]
    fn line_comments_inside_blocks_are_dropped() {
        let blocks = vec![block((1, 4), (3, 7))];
        let lines = vec![line(0, 5), line(1, 9), line(2, 9), line(3, 2), line(4, 6)];

        assert_eq!(
            reconcile(lines, blocks.clone()),
            vec![line(0, 5), blocks[0], line(4, 6)]
        );
    }

    #[test]
    fn output_is_sorted_by_start() {
        let blocks = vec![block((5, 0), (5, 9)), block((2, 4), (2, 12))];
        let lines = vec![line(7, 3), line(0, 3)];

        let starts: Vec<_> = reconcile(lines, blocks)
            .iter()
            .map(|s| (s.start.line, s.start.column))
            .collect();
        assert_eq!(starts, vec![(0, 0), (2, 4), (5, 0), (7, 0)]);
    }

    #[test]
    fn empty_inputs() {
        assert!(reconcile(vec![], vec![]).is_empty());
    }
}
