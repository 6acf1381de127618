use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::Result;
use tokio::io::{AsyncWriteExt, BufReader};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use puzzle_setup::application::{
    CategoryCache, LoadCategoryUseCase, Prefetcher, SetupController, SetupState,
};
use puzzle_setup::domain::ports::{NoopWarmer, ThumbnailWarmerPort};
use puzzle_setup::infrastructure::{
    AppConfig, ChannelNavigator, CliArgs, ConfigError, ConfigStore, HttpImageCatalogClient,
    ThumbnailPrefetcher, ThumbnailPrefetcherConfig,
};
use puzzle_setup::presentation::SetupShell;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    Ok(())
}

fn load_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let args = CliArgs::parse();
    let mut config = ConfigStore::locate(args.config.as_deref())?.load()?;
    config.merge_with_args(args);

    Ok(config)
}

fn build_prefetcher(config: &AppConfig) -> Result<Option<Arc<ThumbnailPrefetcher>>> {
    if !config.prefetch.enabled {
        info!("Thumbnail prefetch disabled");
        return Ok(None);
    }

    let prefetcher = ThumbnailPrefetcher::new(ThumbnailPrefetcherConfig {
        cache_size: config.prefetch.cache_size,
        max_concurrent: config.prefetch.max_concurrent,
        timeout_secs: config.prefetch.timeout_secs,
    })?;
    Ok(Some(Arc::new(prefetcher)))
}

fn create_shell(
    config: &AppConfig,
    navigator: ChannelNavigator,
    warmer: Arc<dyn ThumbnailWarmerPort>,
) -> Result<SetupShell> {
    let base_url = config
        .effective_base_url()
        .ok_or(ConfigError::MissingBaseUrl)?;

    let catalog = HttpImageCatalogClient::with_timeout(
        base_url,
        Duration::from_secs(config.request_timeout_secs),
    )?;
    info!(base_url = catalog.base_url(), "Image service configured");

    let (controller, events) = SetupController::new(
        SetupState::new(config.default_category, config.effective_page_size()),
        CategoryCache::new(),
        LoadCategoryUseCase::new(Arc::new(catalog)),
        Prefetcher::new(warmer),
        Arc::new(navigator),
    );

    Ok(SetupShell::new(controller, events))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = load_config()?;
    init_logging(&config)?;

    info!(version = puzzle_setup::VERSION, "Starting {}", puzzle_setup::NAME);

    let (navigator, mut launches) = ChannelNavigator::new();
    let prefetcher = build_prefetcher(&config)?;
    let warmer: Arc<dyn ThumbnailWarmerPort> = match &prefetcher {
        Some(prefetcher) => prefetcher.clone(),
        None => Arc::new(NoopWarmer),
    };
    let mut shell = create_shell(&config, navigator, warmer)?;

    let mut stdout = tokio::io::stdout();
    let launched = shell
        .run(BufReader::new(tokio::io::stdin()), &mut stdout)
        .await?;

    if launched.is_none() {
        info!("Exited without launching");
    }

    if let Some(prefetcher) = &prefetcher {
        info!(
            cached = prefetcher.cached_count().await,
            pending = prefetcher.pending_count().await,
            stats = %prefetcher.cache_stats(),
            "Thumbnail prefetch summary"
        );
    }

    while let Ok(payload) = launches.try_recv() {
        let json = serde_json::to_string(&payload)?;
        stdout.write_all(format!("\n{json}\n").as_bytes()).await?;
    }
    stdout.flush().await?;

    Ok(())
}
