//! quickstage - interactive staging of changed files in a git working tree.

use std::io::{self, Write};
use std::panic;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use quickstage::core::{load, GitCli, RepoError};
use quickstage::theme::Theme;
use quickstage::ui::{handle_input, render, App};

/// Stage and unstage changed files one keystroke at a time.
#[derive(Parser, Debug)]
#[command(name = "quickstage", version, about)]
struct Cli {
    /// Color theme (default, dracula, nord, gruvbox, solarized, or a user theme)
    #[arg(short = 't', long = "theme", value_name = "THEME")]
    theme: Option<String>,

    /// Print the available themes and exit
    #[arg(long = "list-themes")]
    list_themes: bool,
}

/// RAII guard for terminal state. Restores terminal on drop (including panic).
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

fn restore_terminal() {
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
    let _ = disable_raw_mode();
    let _ = io::stdout().flush();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    quickstage::logging::init();
    quickstage::metrics::init();

    if cli.list_themes {
        for name in Theme::list() {
            println!("{name}");
        }
        return ExitCode::SUCCESS;
    }

    let cwd = match std::env::current_dir() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: Failed to get current directory: {}", e);
            return ExitCode::from(1);
        }
    };

    let (repo, files) = match load(&cwd) {
        Ok(loaded) => loaded,
        Err(RepoError::NotARepo) => {
            eprintln!("Error: Not inside a git repository");
            return ExitCode::from(1);
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to list changed files");
            eprintln!("Error: {}", e);
            return ExitCode::from(1);
        }
    };

    if files.is_empty() {
        println!("No changes to stage or unstage.");
        return ExitCode::SUCCESS;
    }

    let theme = Theme::load(cli.theme.as_deref().unwrap_or("default"));
    let app = App::new(files, GitCli::new(repo));

    match run_tui(app, &theme) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "terminal session failed");
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

/// Run the TUI application.
fn run_tui(mut app: App, theme: &Theme) -> Result<()> {
    // Set panic hook to ensure terminal cleanup
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        restore_terminal();
        default_hook(info);
    }));

    let _guard = TerminalGuard::new().context("Failed to set up terminal")?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let size = terminal.size().context("Failed to read terminal size")?;
    app.resize(size.height);

    tracing::info!(files = app.files.len(), "session started");
    run_loop(&mut terminal, &mut app, theme)?;
    tracing::info!("session ended");
    Ok(())
}

fn run_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, theme: &Theme) -> Result<()> {
    loop {
        if app.ui.dirty {
            terminal
                .draw(|frame| render(frame, app, theme))
                .context("Failed to draw frame")?;
            app.clear_dirty();
        }

        // One event at a time, processed to completion.
        let event = event::read().context("Failed to read terminal event")?;
        handle_input(app, event);

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
