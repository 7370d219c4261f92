mod app;

use anyhow::Result;
use app::{App, configured_spans};
use comment_hider_config::{Config, ConfigError};
use comment_hider_engine::{SpanKind, io};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::{env, io::stdout, path::PathBuf, process};

#[derive(Debug, thiserror::Error)]
enum ViewerError {
    #[error("No Python file given and no default_file configured")]
    NoActiveTarget,
    #[error(transparent)]
    Io(#[from] io::IoError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

struct Args {
    list: bool,
    file: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> Option<Args> {
    let mut list = false;
    let mut file = None;
    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--list" | "-l" => list = true,
            other if other.starts_with('-') => return None,
            other if file.is_none() => file = Some(PathBuf::from(other)),
            _ => return None,
        }
    }
    Some(Args { list, file })
}

fn load_source(args: &Args, config: &Config) -> Result<(PathBuf, String), ViewerError> {
    let path = args
        .file
        .clone()
        .or_else(|| config.default_file.clone())
        .ok_or(ViewerError::NoActiveTarget)?;

    let matcher = config.python_matcher()?;
    let source = io::read_python_source(&path, |p| matcher.matches(p))?;
    Ok((path, source))
}

/// `--list` output, one `kind start.line:start.col-end.line:end.col` per span.
fn list_spans(source: &str, config: &Config) -> Vec<String> {
    configured_spans(source, config.column_unit, config)
        .iter()
        .map(|span| {
            let kind = match span.kind {
                SpanKind::LineComment => "line",
                SpanKind::BlockComment => "block",
            };
            format!(
                "{kind} {}:{}-{}:{}",
                span.start.line, span.start.column, span.end.line, span.end.column
            )
        })
        .collect()
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let args: Vec<String> = env::args().collect();
    let Some(parsed) = parse_args(&args) else {
        eprintln!("Usage: {} [--list] [python-file]", args[0]);
        process::exit(1);
    };

    let config = match Config::load() {
        Ok(Some(config)) => config,
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let (path, source) = match load_source(&parsed, &config) {
        Ok(loaded) => loaded,
        Err(ViewerError::NoActiveTarget) => {
            eprintln!("Warning: No file to inspect");
            eprintln!("Usage: {} [--list] [python-file]", args[0]);
            eprintln!(
                "Or set default_file in {}",
                Config::config_path().display()
            );
            process::exit(1);
        }
        Err(ViewerError::Io(io::IoError::UnsupportedContent(path))) => {
            eprintln!(
                "Warning: '{}' is not a Python file, comments were not hidden",
                path.display()
            );
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };
    log::info!("Opened {}", path.display());

    if parsed.list {
        for line in list_spans(&source, &config) {
            println!("{line}");
        }
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(path, &source, &config);

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_line(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_line(),
                KeyCode::Char('h') => app.hide(),
                KeyCode::Char('s') => app.show(),
                KeyCode::Char(' ') => app.toggle(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)].as_ref())
        .split(f.area());

    let rows = app.rows();
    let height = chunks[0].height.saturating_sub(2) as usize;
    let cursor_row = rows.iter().position(|r| r.is_cursor).unwrap_or(0);
    let scroll = cursor_row.saturating_sub(height.saturating_sub(1));

    let content: Vec<Line> = rows
        .iter()
        .skip(scroll)
        .take(height.max(1))
        .map(|row| {
            let style = if row.is_cursor {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(
                    format!("{:>5} ", row.line + 1),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(row.text.clone(), style),
            ])
        })
        .collect();

    let mode = if app.is_hidden() { "hidden" } else { "shown" };
    let title = format!("{} [{mode}] line {}", app.path.display(), app.cursor() + 1);
    let source = Paragraph::new(content).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(source, chunks[0]);

    let help = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k ↓/j: Move | "),
        Span::raw("h: Hide | s: Show | Space: Toggle   "),
        Span::styled(app.status.clone(), Style::default().fg(Color::Cyan)),
    ]);
    f.render_widget(Paragraph::new(vec![help]), chunks[1]);
}
