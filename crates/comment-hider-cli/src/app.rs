use comment_hider_config::Config;
use comment_hider_engine::{
    ColumnUnit, CommentDetector, CommentVisibility, HidePlan, Span, SpanKind,
};
use std::path::PathBuf;

/// A line as it should be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Zero-based source line number.
    pub line: usize,
    pub text: String,
    pub is_cursor: bool,
}

pub struct App {
    pub path: PathBuf,
    lines: Vec<String>,
    /// Spans in character columns, filtered by the configured kinds.
    spans: Vec<Span>,
    visibility: CommentVisibility,
    cursor: usize,
    pub status: String,
}

impl App {
    pub fn new(path: PathBuf, source: &str, config: &Config) -> Self {
        let spans = configured_spans(source, ColumnUnit::Char, config);

        let mut lines: Vec<String> = source.lines().map(str::to_string).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }

        let mut app = Self {
            path,
            lines,
            spans,
            visibility: CommentVisibility::Shown,
            cursor: 0,
            status: String::new(),
        };
        if config.start_hidden {
            app.hide();
        }
        app
    }

    pub fn is_hidden(&self) -> bool {
        self.visibility.is_hidden()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn hide(&mut self) {
        let plan = HidePlan::from_spans(&self.spans);
        self.status = format!(
            "Hid {} comments ({} folded lines)",
            plan.decorations.len(),
            plan.fold_lines.len()
        );
        log::debug!("{}", self.status);
        self.visibility.hide(plan);
    }

    pub fn show(&mut self) {
        let unfolded = self.visibility.plan().map_or(0, |plan| plan.fold_lines.len());
        self.visibility.show();
        self.status = format!("Comments shown ({unfolded} lines unfolded)");
        log::debug!("{}", self.status);
    }

    pub fn toggle(&mut self) {
        if self.is_hidden() {
            self.show();
        } else {
            self.hide();
        }
    }

    pub fn next_line(&mut self) {
        if let Some(next) = (self.cursor + 1..self.lines.len()).find(|&l| !self.is_folded(l)) {
            self.cursor = next;
        }
    }

    pub fn previous_line(&mut self) {
        if let Some(prev) = (0..self.cursor).rev().find(|&l| !self.is_folded(l)) {
            self.cursor = prev;
        }
    }

    /// Visible rows: folded lines vanish except the cursor line, and
    /// decorated text is removed.
    pub fn rows(&self) -> Vec<Row> {
        self.lines
            .iter()
            .enumerate()
            .filter(|(line, _)| *line == self.cursor || !self.is_folded(*line))
            .map(|(line, text)| Row {
                line,
                text: self.render_line(line, text),
                is_cursor: line == self.cursor,
            })
            .collect()
    }

    fn is_folded(&self, line: usize) -> bool {
        self.visibility.plan().is_some_and(|p| p.is_folded(line))
    }

    fn render_line(&self, line: usize, text: &str) -> String {
        match self.visibility.plan() {
            Some(plan) => mask_line(text, line, plan.decorations_on(line)),
            None => text.to_string(),
        }
    }
}

/// Detected spans of the kinds `config` asks to hide.
pub fn configured_spans(source: &str, unit: ColumnUnit, config: &Config) -> Vec<Span> {
    CommentDetector::new(unit)
        .detect(source)
        .into_iter()
        .filter(|s| match s.kind {
            SpanKind::LineComment => config.hide_line_comments,
            SpanKind::BlockComment => config.hide_block_comments,
        })
        .collect()
}

/// Removes the parts of `text` covered by `spans` (character columns).
pub fn mask_line<'a>(text: &str, line: usize, spans: impl Iterator<Item = &'a Span>) -> String {
    let len = text.chars().count();
    let mut hidden = vec![false; len];
    for span in spans {
        let from = if span.start.line == line { span.start.column } else { 0 };
        let to = if span.end.line == line { span.end.column.min(len) } else { len };
        for flag in hidden.iter_mut().take(to).skip(from) {
            *flag = true;
        }
    }
    text.chars()
        .zip(hidden)
        .filter_map(|(c, h)| (!h).then_some(c))
        .collect()
}
