//! Contact Book - main entry point
//!
//! Loads the address book, runs the interactive session on stdin/stdout,
//! and saves the book on the way out.

use anyhow::{Context, Result};
use contact_book::{run_session, BookRepository, Config, FileBookRepository, SystemClock};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration first so LOG_LEVEL can drive the filter
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    // Initialize logging (stderr only, stdout carries the conversation)
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let repository = FileBookRepository::new(&config.data_file);
    let book = repository.load().with_context(|| {
        format!(
            "Could not load address book from {}",
            config.data_file.display()
        )
    })?;

    let stdin = io::stdin();
    let book = run_session(book, stdin.lock(), io::stdout(), &SystemClock)?;

    repository.save(&book).with_context(|| {
        format!(
            "Could not save address book to {}",
            config.data_file.display()
        )
    })?;

    info!("Contact book shutdown complete");
    Ok(())
}
