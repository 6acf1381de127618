//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::application::DEFAULT_PAGE_SIZE;
use crate::domain::entities::Category;

pub(super) const APP_NAME: &str = "puzzle-setup";
pub(super) const APP_QUALIFIER: &str = "com";
pub(super) const APP_ORGANIZATION: &str = "puzzle";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, read once at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Image service base URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,

    /// Log file path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Category shown when the screen opens.
    #[serde(default)]
    pub default_category: Category,

    /// Gallery tiles per page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Image list request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Thumbnail prefetch configuration.
    #[serde(default)]
    pub prefetch: PrefetchConfig,
}

/// Thumbnail prefetch configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrefetchConfig {
    /// Warm the next page's thumbnails.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Maximum concurrent thumbnail downloads.
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent: usize,

    /// Maximum thumbnails kept in memory.
    #[serde(default = "default_cache_size")]
    pub cache_size: usize,

    /// Thumbnail request timeout in seconds.
    #[serde(default = "default_prefetch_timeout")]
    pub timeout_secs: u64,
}

impl Default for PrefetchConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_concurrent: default_max_concurrent(),
            cache_size: default_cache_size(),
            timeout_secs: default_prefetch_timeout(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_request_timeout() -> u64 {
    30
}

fn default_max_concurrent() -> usize {
    4
}

fn default_cache_size() -> usize {
    64
}

fn default_prefetch_timeout() -> u64 {
    15
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(api_base_url) = args.api_base_url {
            self.api_base_url = Some(api_base_url);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(category) = args.category {
            self.default_category = category;
        }
        if let Some(page_size) = args.page_size {
            self.page_size = page_size;
        }
        if args.no_prefetch {
            self.prefetch.enabled = false;
        }
    }

    /// Page size with zero coerced to one.
    #[must_use]
    pub fn effective_page_size(&self) -> usize {
        self.page_size.max(1)
    }

    /// Base URL with surrounding whitespace removed, if configured.
    #[must_use]
    pub fn effective_base_url(&self) -> Option<&str> {
        self.api_base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("puzzle-setup.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            api_base_url: None,
            log_path: None,
            log_level: LogLevel::Info,
            default_category: Category::default(),
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout_secs: default_request_timeout(),
            prefetch: PrefetchConfig::default(),
        }
    }
}
