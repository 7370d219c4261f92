//! # Text Utilities
//!
//! Offsets, lines and positions over an immutable `&str` snapshot.
//!
//! Scanners work on UTF-8 byte offsets (what `regex` reports). Spans handed
//! to front ends carry `(line, column)` positions in a [`ColumnUnit`] chosen
//! by the caller. Every offset-to-position translation goes through
//! [`LineIndex`] so all scanners agree on line and column numbering.

pub mod lines;
pub mod position;
pub mod range;

pub use lines::{LineRef, lines_with_spans};
pub use position::{ColumnUnit, LineIndex, Position, Span, SpanKind, offset_to_position};
pub use range::TextRange;
