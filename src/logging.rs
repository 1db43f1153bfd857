/// Tracing setup. The TUI owns the terminal, so it logs to a file.
use std::env;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};

const LOG_FILE_NAME: &str = "palettr.log";

fn env_filter(default: &str) -> String {
    env::var("RUST_LOG").unwrap_or_else(|_| default.into())
}

/// Log to stderr, for one-shot commands.
pub fn init_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter("warn"))
        .with_writer(std::io::stderr)
        .try_init();
}

/// Log to `palettr.log` in the local data directory. Returns the log path.
pub fn init_file() -> Result<PathBuf> {
    let path = default_log_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter("info"))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(path)
}

/// Falls back to `./palettr.log` when no data dir is found.
fn default_log_path() -> PathBuf {
    match dirs::data_local_dir() {
        Some(data_dir) => data_dir.join("palettr").join(LOG_FILE_NAME),
        None => PathBuf::from(LOG_FILE_NAME),
    }
}
