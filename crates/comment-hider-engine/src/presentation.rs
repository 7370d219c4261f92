//! Hide/show plan for front ends.
//!
//! Decorations blank out every span. Block comments additionally fold their
//! lines, because decorations alone leave empty lines behind in most
//! renderers. Showing clears decorations and unfolds everything.

use std::collections::BTreeSet;

use crate::text::{Span, SpanKind};

/// What a front end applies to hide comments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HidePlan {
    /// Spans whose text is suppressed.
    pub decorations: Vec<Span>,
    /// Lines covered by block comments, sorted and unique.
    pub fold_lines: Vec<usize>,
}

impl HidePlan {
    pub fn from_spans(spans: &[Span]) -> Self {
        let fold_lines: BTreeSet<usize> = spans
            .iter()
            .filter(|s| s.kind == SpanKind::BlockComment)
            .flat_map(|s| s.start.line..=s.end.line)
            .collect();

        Self {
            decorations: spans.to_vec(),
            fold_lines: fold_lines.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.decorations.is_empty()
    }

    /// Fold lines other than the one holding the cursor.
    pub fn fold_lines_except(&self, current_line: usize) -> Vec<usize> {
        self.fold_lines
            .iter()
            .copied()
            .filter(|&l| l != current_line)
            .collect()
    }

    pub fn is_folded(&self, line: usize) -> bool {
        self.fold_lines.binary_search(&line).is_ok()
    }

    /// Decorations touching `line`.
    pub fn decorations_on(&self, line: usize) -> impl Iterator<Item = &Span> + '_ {
        self.decorations.iter().filter(move |s| s.covers_line(line))
    }
}

/// Side effect requested when comments are shown again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowEffect {
    /// Unfold every folded region, whatever produced it.
    pub unfold_all: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CommentVisibility {
    #[default]
    Shown,
    Hidden(HidePlan),
}

impl CommentVisibility {
    /// Replaces any previous plan.
    pub fn hide(&mut self, plan: HidePlan) {
        *self = CommentVisibility::Hidden(plan);
    }

    pub fn show(&mut self) -> ShowEffect {
        *self = CommentVisibility::Shown;
        ShowEffect { unfold_all: true }
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self, CommentVisibility::Hidden(_))
    }

    pub fn plan(&self) -> Option<&HidePlan> {
        match self {
            CommentVisibility::Hidden(plan) => Some(plan),
            CommentVisibility::Shown => None,
        }
    }
}
