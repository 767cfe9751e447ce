//! Kanban Board Entry Point
//!
//! Starts logging, builds the in-process backend from configuration, loads
//! the board and prints it (as JSON with `--json`).

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use kanban_backend::{init_backend, BackendConfig};
use kanban_board::{BoardContext, LogNotifier};

fn load_config() -> Result<BackendConfig, Box<dyn Error>> {
    let config = match std::env::var("KANBAN_CONFIG") {
        Ok(path) => BackendConfig::load(&PathBuf::from(path))?,
        Err(_) => BackendConfig::default(),
    };
    Ok(config.with_env_overrides()?)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let log_dir = std::env::var("KANBAN_LOG_DIR").unwrap_or_else(|_| "./logs".to_string());
    rolling_logger::init_logger(&log_dir, "kanban-board")?;

    let config = load_config()?;
    tracing::info!(?config, "Backend configuration loaded");

    let api = Arc::new(init_backend(&config));
    let context = BoardContext::new(api, Arc::new(LogNotifier));
    context.reload().await?;

    let board = context.board();
    if std::env::args().any(|arg| arg == "--json") {
        println!("{}", serde_json::to_string_pretty(board.as_ref())?);
        return Ok(());
    }

    for entry in board.iter() {
        println!("[{}] {} ({})", entry.column.order, entry.column.title, entry.column.id);
        for card in &entry.cards {
            let due = card
                .due_date
                .map(|date| format!(" due {}", date.format("%Y-%m-%d")))
                .unwrap_or_default();
            println!("    {}. {}{}", card.order, card.title, due);
        }
    }

    tracing::info!(
        recent = rolling_logger::recent_lines().len(),
        "Board loaded"
    );
    Ok(())
}
