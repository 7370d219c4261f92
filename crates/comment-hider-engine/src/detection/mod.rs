//! # Comment Detection
//!
//! Locates Python line comments and docstring-like triple-quoted literals
//! without a full parser.
//!
//! ## Pipeline
//!
//! ```text
//! text ─┬─ contexts::index_string_contexts ─┐
//!       ├─ blocks::scan_block_candidates ───┴─ docstring::DocstringClassifier ─┐
//!       └─ line_comments::scan_line_comments ─────────────────────────────────┴─ reconcile
//! ```
//!
//! ## Modules
//!
//! - **`quote`**: closing-quote search for single and triple quoted literals
//! - **`contexts`**: value-position string literals used to exclude nested matches
//! - **`line_comments`**: `#` line comments
//! - **`blocks`**: raw triple-quoted literal candidates
//! - **`docstring`**: ordered accept/reject rules for block candidates
//! - **`reconcile`**: suppression of nested line comments and final ordering
//!
//! Every run is a pure function of the input text; nothing is cached
//! between calls.

pub mod blocks;
pub mod contexts;
pub mod docstring;
pub mod line_comments;
pub mod quote;
pub mod reconcile;

pub use blocks::{BlockCandidate, scan_block_candidates};
pub use contexts::{StringContext, index_string_contexts};
pub use docstring::{AcceptRule, Decision, DocstringClassifier, RejectRule};
pub use line_comments::scan_line_comments;
pub use reconcile::reconcile;

use crate::text::{ColumnUnit, LineIndex, Span};

/// A block candidate together with the rule that decided it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateReport {
    pub span: Span,
    pub decision: Decision,
}

struct Analysis {
    line_spans: Vec<Span>,
    block_spans: Vec<Span>,
}

/// Runs the detection pipeline, reporting columns in a chosen unit.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommentDetector {
    unit: ColumnUnit,
}

impl CommentDetector {
    pub fn new(unit: ColumnUnit) -> Self {
        Self { unit }
    }

    /// All comment spans, ordered by start and non-overlapping.
    pub fn detect(&self, text: &str) -> Vec<Span> {
        let analysis = self.analyze(text);
        reconcile(analysis.line_spans, analysis.block_spans)
    }

    /// Line comments outside accepted block spans.
    pub fn detect_line_comments(&self, text: &str) -> Vec<Span> {
        let analysis = self.analyze(text);
        reconcile::suppress_nested_line_comments(analysis.line_spans, &analysis.block_spans)
    }

    /// Accepted block (docstring) spans.
    pub fn detect_block_comments(&self, text: &str) -> Vec<Span> {
        self.analyze(text).block_spans
    }

    /// Every triple-quoted candidate with its classifier decision.
    pub fn explain(&self, text: &str) -> Vec<CandidateReport> {
        let index = LineIndex::new(text, self.unit);
        let contexts = index_string_contexts(text);
        let classifier = DocstringClassifier::new(&index, &contexts);

        scan_block_candidates(text)
            .iter()
            .map(|candidate| CandidateReport {
                span: classifier.span_of(candidate),
                decision: classifier.classify(candidate),
            })
            .collect()
    }

    fn analyze(&self, text: &str) -> Analysis {
        let index = LineIndex::new(text, self.unit);
        let contexts = index_string_contexts(text);
        let candidates = scan_block_candidates(text);
        let block_spans = DocstringClassifier::new(&index, &contexts).accepted_spans(&candidates);
        let line_spans = scan_line_comments(&index);

        log::debug!(
            "detected {} line comments, {}/{} block literals accepted, {} value contexts",
            line_spans.len(),
            block_spans.len(),
            candidates.len(),
            contexts.len()
        );

        Analysis {
            line_spans,
            block_spans,
        }
    }
}

/// Detects comment spans with UTF-16 columns.
pub fn detect_comments(text: &str) -> Vec<Span> {
    CommentDetector::default().detect(text)
}
