//! cvforge TUI
//!
//! Terminal editor for building a resume with a live, styled preview.
//!
//! ## Layout
//!
//! Three-pane layout:
//! - Left: Sections (profile, summary, experience, education, skills, ...)
//! - Middle: Editing form for the active section
//! - Right: Style controls (color theme, font, size, spacing)
//!
//! A zoomable preview overlay (`p`) renders the current document with the
//! current style; it recomputes from the latest snapshots on every frame.
//!
//! ## Navigation
//!
//! - Tab / Shift-Tab: cycle panes
//! - j/k or ↑/↓: move selection
//! - h/l: switch panes (adjust values in the style pane)
//! - Enter: open the form / edit the focused field
//! - a / d: add or remove an entry (experience, education)
//! - p: toggle preview, +/-: zoom
//! - q: quit

mod app;
mod forms;
mod ui;

use std::io::stdout;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use tracing_subscriber::EnvFilter;

use cvforge_core::Config;

use app::App;

#[derive(Parser)]
#[command(name = "cvforge")]
#[command(about = "cvforge - resume editor with live preview")]
#[command(version)]
struct Cli {
    /// Template to start from (modern, minimal, elegant, creative, corporate)
    #[arg(short, long)]
    template: Option<String>,

    /// Use a specific config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log to stderr; silent unless RUST_LOG is set.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    if cli.template.is_some() {
        config.template = cli.template.clone();
    }

    let mut app = App::new(config.seed_style());

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                app.status_message = None;

                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    app.should_quit = true;
                } else if app.preview.is_open() {
                    handle_preview_key(app, key.code);
                } else if app.is_editing() {
                    handle_edit_key(app, key.code);
                } else {
                    handle_normal_key(app, key.code);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Keys while the preview overlay is open
fn handle_preview_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc | KeyCode::Char('p') | KeyCode::Char('q') => app.preview.close(),
        KeyCode::Char('+') | KeyCode::Char('=') => app.preview.zoom_in(),
        KeyCode::Char('-') | KeyCode::Char('_') => app.preview.zoom_out(),
        _ => {}
    }
}

/// Keys while a form field is being edited
fn handle_edit_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc | KeyCode::Enter => app.stop_edit(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Left => app.cursor_left(),
        KeyCode::Right => app.cursor_right(),
        KeyCode::Char(c) => app.input_char(c),
        _ => {}
    }
}

/// Keys in normal navigation mode
fn handle_normal_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('q') => {
            app.should_quit = true;
        }

        KeyCode::Tab => app.next_pane(),
        KeyCode::BackTab => app.prev_pane(),

        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('h') | KeyCode::Left => app.left(),
        KeyCode::Char('l') | KeyCode::Right => app.right(),

        KeyCode::Enter => app.handle_enter(),

        KeyCode::Char('a') => app.add_entry_key(),
        KeyCode::Char('d') => app.delete_entry_key(),

        KeyCode::Char('p') => app.toggle_preview(),

        KeyCode::Char('?') => {
            app.status_message = Some(
                "Tab:panes  j/k:move  h/l:panes/adjust  Enter:edit  a:add  d:del  p:preview  q:quit"
                    .to_string(),
            );
        }

        _ => {}
    }
}
