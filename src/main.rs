// fungetty: Time-Travel Befunge-93 Interpreter with Grid Visualization

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::subscriber::{DefaultGuard, NoSubscriber};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use fungetty::interpreter::config::InterpreterConfig;
use fungetty::interpreter::constants::{DEFAULT_SNAPSHOT_MEMORY_LIMIT, DEFAULT_STEP_LIMIT};
use fungetty::interpreter::engine::Interpreter;
use fungetty::ui::App;

/// Run a Befunge-93 program and step through its execution history
#[derive(Parser, Debug)]
#[command(name = "fungetty", version, about)]
struct Args {
    /// Befunge-93 source file
    file: PathBuf,

    /// Maximum number of cycles before execution is cut off
    #[arg(long, default_value_t = DEFAULT_STEP_LIMIT)]
    step_limit: u64,

    /// Memory budget for recorded snapshots, in MiB
    #[arg(long, default_value_t = DEFAULT_SNAPSHOT_MEMORY_LIMIT / (1024 * 1024))]
    snapshot_limit_mb: usize,

    /// Run without the TUI and print the program output to stdout
    #[arg(long)]
    headless: bool,
}

/// Silence logging on this thread until the guard drops, so stderr output
/// cannot draw over the alternate screen
fn quiet_logging() -> DefaultGuard {
    tracing::subscriber::set_default(NoSubscriber::default())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let source = match fs::read_to_string(&args.file) {
        Ok(source) => source,
        Err(e) => {
            error!("Cannot read '{}': {}", args.file.display(), e);
            std::process::exit(1);
        }
    };

    if args.headless {
        let config = InterpreterConfig::default().with_step_limit(args.step_limit);
        let mut interpreter = Interpreter::new(&source, config);
        let output = interpreter.run();
        if let Some(halt) = interpreter.halt() {
            info!(steps = interpreter.steps(), "Execution ended: {}", halt);
        }
        let mut stdout = io::stdout();
        stdout.write_all(output.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }

    let config = InterpreterConfig::default()
        .with_step_limit(args.step_limit)
        .with_history(true)
        .with_snapshot_memory_limit(args.snapshot_limit_mb.saturating_mul(1024 * 1024));
    let mut interpreter = Interpreter::new(&source, config);

    // Run execution to build history
    info!("Executing {}...", args.file.display());
    interpreter.run();
    info!(
        snapshots = interpreter.total_snapshots(),
        steps = interpreter.steps(),
        "Execution finished"
    );

    // Rewind to the beginning for TUI
    if let Err(e) = interpreter.rewind_to_start() {
        warn!("Failed to rewind to start: {}", e);
    }

    // Set up terminal
    let quiet = quiet_logging();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(interpreter);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    drop(quiet);

    if let Err(err) = res {
        error!("TUI error: {}", err);
    }

    Ok(())
}
