//! Decides whether a triple-quoted literal is a comment (docstring or
//! standalone string) or a string value.
//!
//! The rules form an ordered decision table:
//!
//! 1. Nested in a value literal: reject.
//! 2. Formatted (`f`) or template (`t`) prefix: reject.
//! 3. Assignment context: reject, unless rule 4 applies.
//! 4. Docstring position: accept. Right after a `class`/`def` header this
//!    holds wherever the literal sits on its line; in the module header the
//!    literal (with an optional non-formatting prefix) must open its line.
//! 5. Otherwise accept.

use std::sync::OnceLock;

use regex::Regex;

use super::blocks::BlockCandidate;
use super::contexts::StringContext;
use crate::text::{LineIndex, Span};

/// Why a candidate was kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcceptRule {
    /// Within the first three lines, preceded only by blanks and comments.
    ModuleDocstring,
    /// First statement after a `class` or `def` header.
    DefinitionDocstring,
    /// A bare literal that no reject rule matched.
    StandaloneLiteral,
}

/// Why a candidate was discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectRule {
    /// Lies strictly inside a larger value literal.
    NestedInValue,
    /// Carries an `f` or `t` string prefix.
    FormattedPrefix,
    /// Is the right-hand side of an assignment or keyword argument.
    Assignment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accept(AcceptRule),
    Reject(RejectRule),
}

impl Decision {
    pub fn is_accept(self) -> bool {
        matches!(self, Decision::Accept(_))
    }
}

/// Highest line number a module docstring may start on.
const MODULE_DOCSTRING_MAX_LINE: usize = 2;

/// Letters allowed in a Python string prefix.
const PREFIX_LETTERS: &str = "fFrRtTbBuU";

/// `=` that is not part of a comparison, then an optional prefix and a quote.
fn assignment_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?:^|[^=!<>])=[ \t]*[fFrRtTbBuU]{0,2}["']"#)
            .expect("Invalid assignment line regex")
    })
}

fn definition_header() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*(?:async\s+)?(?:class|def)\s+\w+.*:\s*$")
            .expect("Invalid definition header regex")
    })
}

/// Classifies block candidates of one text snapshot.
pub struct DocstringClassifier<'a> {
    index: &'a LineIndex<'a>,
    contexts: &'a [StringContext],
}

impl<'a> DocstringClassifier<'a> {
    pub fn new(index: &'a LineIndex<'a>, contexts: &'a [StringContext]) -> Self {
        Self { index, contexts }
    }

    pub fn classify(&self, candidate: &BlockCandidate<'_>) -> Decision {
        let range = candidate.range;
        if self
            .contexts
            .iter()
            .any(|ctx| ctx.encloses(range.start, range.end))
        {
            return Decision::Reject(RejectRule::NestedInValue);
        }

        let line = self.index.line_of(range.start);
        let before = self
            .index
            .text()
            .get(self.index.line_start(line)..range.start)
            .unwrap_or("");

        if has_formatted_prefix(before) {
            return Decision::Reject(RejectRule::FormattedPrefix);
        }

        if opens_line(before) && self.is_module_docstring(line) {
            return Decision::Accept(AcceptRule::ModuleDocstring);
        }
        if self.follows_definition(line) {
            return Decision::Accept(AcceptRule::DefinitionDocstring);
        }

        if self.is_assignment(line) {
            Decision::Reject(RejectRule::Assignment)
        } else {
            Decision::Accept(AcceptRule::StandaloneLiteral)
        }
    }

    /// Translates a candidate's byte range into a block-comment span.
    pub fn span_of(&self, candidate: &BlockCandidate<'_>) -> Span {
        Span::block_comment(
            self.index.position(candidate.range.start),
            self.index.position(candidate.range.end),
        )
    }

    /// Classifies every candidate and returns the accepted ones as spans,
    /// in source order.
    pub fn accepted_spans(&self, candidates: &[BlockCandidate<'_>]) -> Vec<Span> {
        candidates
            .iter()
            .filter(|candidate| {
                let decision = self.classify(candidate);
                log::debug!(
                    "block literal at byte {}: {decision:?}",
                    candidate.range.start
                );
                decision.is_accept()
            })
            .map(|candidate| self.span_of(candidate))
            .collect()
    }

    fn is_assignment(&self, line: usize) -> bool {
        if assignment_line().is_match(self.index.line_text(line)) {
            return true;
        }
        line > 0 && self.index.line_text(line - 1).trim_end().ends_with('=')
    }

    fn is_module_docstring(&self, line: usize) -> bool {
        line <= MODULE_DOCSTRING_MAX_LINE
            && (0..line).all(|l| {
                let t = self.index.line_text(l).trim();
                t.is_empty() || t.starts_with('#')
            })
    }

    fn follows_definition(&self, line: usize) -> bool {
        (0..line)
            .rev()
            .map(|l| self.index.line_text(l))
            .find(|text| !text.trim().is_empty())
            .is_some_and(|prev| definition_header().is_match(prev))
    }
}

/// Splits `before` into the text ahead of the identifier-like run that
/// directly precedes the opening quotes, and that run.
fn split_word_run(before: &str) -> (&str, &str) {
    let word_start = before
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_alphanumeric() || *c == '_')
        .last()
        .map_or(before.len(), |(i, _)| i);
    before.split_at(word_start)
}

fn is_string_prefix(word: &str) -> bool {
    (1..=2).contains(&word.len()) && word.chars().all(|c| PREFIX_LETTERS.contains(c))
}

/// True if the run directly before the opening quotes is a string prefix
/// containing `f` or `t`.
fn has_formatted_prefix(before: &str) -> bool {
    let (_, word) = split_word_run(before);
    is_string_prefix(word) && word.chars().any(|c| matches!(c, 'f' | 'F' | 't' | 'T'))
}

/// True if only whitespace and an optional string prefix precede the
/// opening quotes on their line.
fn opens_line(before: &str) -> bool {
    let (head, word) = split_word_run(before);
    let head = if is_string_prefix(word) { head } else { before };
    head.trim().is_empty()
}
