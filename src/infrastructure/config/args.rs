use super::app_config::LogLevel;
use crate::domain::entities::Category;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "puzzle-setup",
    version,
    about = "Pick a category, image and difficulty for a sliding puzzle",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Image service base URL.
    #[arg(long, env = "PUZZLE_API_BASE_URL", value_name = "URL")]
    pub api_base_url: Option<String>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Category shown first.
    #[arg(long)]
    pub category: Option<Category>,

    /// Gallery tiles per page.
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Disable next-page thumbnail prefetch.
    #[arg(long)]
    pub no_prefetch: bool,
}
