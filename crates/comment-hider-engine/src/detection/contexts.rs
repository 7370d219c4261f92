//! Indexes string literals that are syntactically *values*, so that
//! triple-quoted text nested inside them is never taken for a docstring.

use std::sync::OnceLock;

use regex::Regex;

use super::quote::find_closing_quote;

/// A string literal known to be a value, as inclusive byte offsets of its
/// opening and closing quote characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringContext {
    /// Offset of the opening quote.
    pub open: usize,
    /// Offset of the last character of the closing delimiter.
    pub close: usize,
}

impl StringContext {
    /// True if the byte range `[start, end)` lies strictly inside this literal.
    pub fn encloses(&self, start: usize, end: usize) -> bool {
        start > self.open && end <= self.close
    }
}

/// `name = "…"` at the start of a line.
fn assignment_opener() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?m)^[ \t]*\w+[ \t]*=[ \t]*[fFrRtTbBuU]{0,2}(["'])"#)
            .expect("Invalid assignment opener regex")
    })
}

/// A quote in argument, element or keyword-value position.
fn value_opener() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"[=,\[(]\s*[fFrRtTbBuU]{0,2}(["'])"#).expect("Invalid value opener regex")
    })
}

/// Collects every value-position string literal in `text`.
///
/// Contexts may overlap and repeat; they are only used as an existence test.
/// Unterminated literals are dropped.
pub fn index_string_contexts(text: &str) -> Vec<StringContext> {
    let mut contexts = Vec::new();

    for re in [assignment_opener(), value_opener()] {
        for caps in re.captures_iter(text) {
            let Some(quote) = caps.get(1) else { continue };
            let open = quote.start();
            let quote_char = text.as_bytes()[open];
            match find_closing_quote(text, open, quote_char) {
                Some(close) => contexts.push(StringContext { open, close }),
                _ => log::trace!("dropping unterminated literal opened at byte {open}"),
            }
        }
    }

    contexts
}
