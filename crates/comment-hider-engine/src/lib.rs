pub mod detection;
pub mod io;
pub mod presentation;
pub mod text;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use detection::{CandidateReport, CommentDetector, Decision, detect_comments};
pub use presentation::{CommentVisibility, HidePlan, ShowEffect};
pub use text::{ColumnUnit, Position, Span, SpanKind};
