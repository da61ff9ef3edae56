//! task-cli - Interactive to-do list manager
//!
//! Loads the task collection from a JSON file, runs the command loop
//! until a confirmed exit, then writes the collection back in full.

use task_cli::config::Config;
use task_cli::output::Styles;
use task_cli::store::TodoList;
use task_cli::{repl, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    // Tracing is opt-in via RUST_LOG.
    // Keep startup robust: ignore invalid/huge filters.
    let filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|raw| {
            let raw = raw.trim();
            if raw.is_empty() || raw.len() > 4096 {
                return None;
            }
            EnvFilter::try_new(raw).ok()
        })
        .unwrap_or_else(|| EnvFilter::new("off"));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config = Config::load_from_dir(&cwd)?;
    let mut list = TodoList::load(&config.data_file)?;
    let styles = Styles {
        color: config.ui.color,
    };

    repl::run(&mut list, styles)?;

    // One full overwrite once the loop has stopped
    list.save()
}
