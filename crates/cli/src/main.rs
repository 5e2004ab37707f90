use std::fs::{OpenOptions, create_dir_all};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use laba_tui::{COLOR_MODE_ENV, ColorMode, TuiConfig};
use tracing_subscriber::EnvFilter;

/// Environment variable overriding where tracing output goes.
const LOG_PATH_ENV: &str = "LABA_LOG_PATH";

/// Laba Space dashboard shell in the terminal.
#[derive(Debug, Parser)]
#[command(name = "laba", version, about)]
struct Cli {
    /// Palette depth: auto, truecolor, or ansi256
    #[arg(long, env = COLOR_MODE_ENV, default_value = "auto")]
    color_mode: ColorMode,

    /// File receiving log output (the terminal belongs to the UI)
    #[arg(long, env = LOG_PATH_ENV)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_path = cli.log_file.clone().unwrap_or_else(default_log_path);
    init_tracing(&log_path)?;
    tracing::info!(log_path = %log_path.display(), "laba starting");

    laba_tui::run(TuiConfig::new(cli.color_mode)).await
}

fn default_log_path() -> PathBuf {
    dirs_next::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("laba")
        .join("laba.log")
}

fn init_tracing(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        create_dir_all(parent).with_context(|| format!("create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}
