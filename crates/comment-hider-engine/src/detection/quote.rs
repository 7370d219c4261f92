//! Closing-quote search for a literal whose opening quote is known.

const ESCAPE: u8 = b'\\';

/// True if the three bytes at `offset` are `quote` repeated three times.
pub fn is_triple_at(text: &str, offset: usize, quote: u8) -> bool {
    text.as_bytes()
        .get(offset..offset + 3)
        .is_some_and(|b| b.iter().all(|&c| c == quote))
}

/// Finds the byte offset of the last character of the delimiter that closes
/// the literal opened at `open`.
///
/// Triple-quoted literals close at the next literal occurrence of the same
/// triple quote. Single-quoted literals close at the next `quote` not
/// directly preceded by a backslash, even on a later line.
/// Raw-string escaping is not modelled. Returns `None` for an unterminated
/// literal.
pub fn find_closing_quote(text: &str, open: usize, quote: u8) -> Option<usize> {
    if is_triple_at(text, open, quote) {
        let delim = [quote; 3];
        let delim = std::str::from_utf8(&delim).ok()?;
        let rest = text.get(open + 3..)?;
        return rest.find(delim).map(|i| open + 3 + i + 2);
    }

    let bytes = text.as_bytes();
    (open + 1..bytes.len()).find(|&i| bytes[i] == quote && bytes[i - 1] != ESCAPE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(r#""abc" tail"#, 0, b'"', Some(4))]
    #[case(r#"'it\'s' x"#, 0, b'\'', Some(6))]
    #[case(r#""""doc""" x"#, 0, b'"', Some(8))]
    #[case("'''a\nb''' x", 0, b'\'', Some(8))]
    #[case(r#""" rest"#, 0, b'"', Some(1))]
    #[case(r#""""never closes"#, 0, b'"', None)]
    #[case(r#""open"#, 0, b'"', None)]
    fn closing_quote(
        #[case] text: &str,
        #[case] open: usize,
        #[case] quote: u8,
        #[case] expected: Option<usize>,
    ) {
        assert_eq!(find_closing_quote(text, open, quote), expected);
    }

    #[test]
    fn single_quote_search_crosses_lines() {
        assert_eq!(find_closing_quote("'abc\ndef'", 0, b'\''), Some(8));
        assert_eq!(find_closing_quote("'abc\\\ndef'", 0, b'\''), Some(9));
    }

    #[test]
    fn triple_detection() {
        assert!(is_triple_at("x = '''", 4, b'\''));
        assert!(!is_triple_at("x = ''", 4, b'\''));
        assert!(!is_triple_at("\"\"\"", 1, b'"'));
    }
}
