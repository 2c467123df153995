use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::application::use_cases::csv_cleaner::{CleanReport, CsvCleaner};
use crate::domain::error::Result;
use crate::infrastructure::config::{AppConfig, ConfigService, ServerConfig};

/// Install the global subscriber; `RUST_LOG` overrides the `info` default
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Read `.env` (if any) and the layered config
pub fn load_config() -> Result<AppConfig> {
    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            warn!(error = %err, "Failed to load .env file");
        }
    }

    ConfigService::new().load().map_err(|err| {
        error!(error = %err, "Failed to load configuration");
        err
    })
}

/// Run the page server until it is shut down
pub async fn serve(config: ServerConfig) -> std::io::Result<()> {
    if !config.templates_dir.is_dir() {
        warn!(
            templates_dir = %config.templates_dir.display(),
            "Templates directory does not exist, every page will 404"
        );
    }

    let server = crate::interfaces::http::start_server(&config).map_err(|err| {
        error!(error = %err, host = %config.host, port = config.port, "Failed to bind HTTP server");
        err
    })?;

    info!(
        "Serving {} on http://{}:{}",
        config.templates_dir.display(),
        config.host,
        config.port
    );

    server.await
}

/// Load config and run the clean command once
pub fn run_clean() -> Result<CleanReport> {
    let config = load_config()?;
    let cleaner = CsvCleaner::new(config.cleaner);
    cleaner.clean_file().map_err(|err| {
        error!(error = %err, "Clean failed");
        err
    })
}
