use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use connect_four::config::AppConfig;
use connect_four::ui::App;

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override board width (columns)
    #[arg(long)]
    width: Option<usize>,

    /// Override board height (rows)
    #[arg(long)]
    height: Option<usize>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(width) = cli.width {
        config.board.width = width;
    }
    if let Some(height) = cli.height {
        config.board.height = height;
    }
    config.validate().context("invalid board configuration")?;

    let mut app = App::new(&config).context("creating game")?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal, even when the app loop failed
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("running terminal UI")
}
