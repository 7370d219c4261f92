use std::sync::OnceLock;

use regex::Regex;

use crate::text::TextRange;

/// A raw triple-quoted literal, before any docstring classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockCandidate<'a> {
    /// Byte range from the first opening quote to past the last closing quote.
    pub range: TextRange,
    /// The matched source, delimiters included.
    pub text: &'a str,
}

fn triple_quoted() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?s)""".*?"""|'''.*?'''"#).expect("Invalid triple-quote regex")
    })
}

/// Finds every non-overlapping triple-quoted literal in `text`.
///
/// The first later occurrence of the same delimiter closes a literal, so a
/// stray triple quote inside a docstring ends it early. A literal with no
/// closing delimiter is not reported.
pub fn scan_block_candidates(text: &str) -> Vec<BlockCandidate<'_>> {
    triple_quoted()
        .find_iter(text)
        .map(|m| BlockCandidate {
            range: TextRange::new(m.start(), m.end()),
            text: m.as_str(),
        })
        .collect()
}
