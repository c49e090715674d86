//! Fliplingo - flip-card vocabulary learning TUI
//!
//! Learn word pairs with flip cards and test yourself with a level-based
//! translation quiz. Progress is a small local key-value file.

mod config;
mod models;
mod quiz;
mod storage;
mod ui;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use storage::ProgressStore;
use ui::App;

// ══════════════════════════════════════════════════════════════════════════
// CLI Arguments
// ══════════════════════════════════════════════════════════════════════════

#[derive(Parser, Debug)]
#[command(name = "fliplingo")]
#[command(author, version, about = "Flip-card vocabulary learning TUI", long_about = None)]
struct Args {
    /// Directory containing the progress file
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Delete saved progress and exit
    #[arg(long)]
    reset: bool,

    /// Print the bundled word list and exit
    #[arg(long)]
    list_words: bool,
}

// ══════════════════════════════════════════════════════════════════════════
// Main Entry Point
// ══════════════════════════════════════════════════════════════════════════

fn main() -> Result<()> {
    let args = Args::parse();

    // Determine data directory
    let data_dir = args.data_dir.unwrap_or_else(ProgressStore::default_path);

    // Initialize storage
    let store = ProgressStore::new(data_dir)?;

    if args.reset {
        if store.reset()? {
            println!("✓ Saved progress deleted");
        } else {
            println!("No saved progress to delete");
        }
        return Ok(());
    }

    if args.list_words {
        for pair in models::VOCABULARY {
            println!("{} - {}", pair.front, pair.back);
        }
        return Ok(());
    }

    // Run TUI
    run_tui(store)
}

fn run_tui(store: ProgressStore) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Load config
    let config = config::Config::load().unwrap_or_default();

    // Create app
    let mut app = App::new(store, config);

    // Run main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {}", err);
        return Err(err);
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|frame| app.render(frame))?;
        app.handle_events()?;
    }
    Ok(())
}
