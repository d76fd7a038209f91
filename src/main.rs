use anyhow::Result;

use conlog::config::{self, Config};
use conlog::logging::{Logger, Severity};

fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout belongs to the logger
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "conlog=warn".into());
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .init();

    let config = Config::load()?;
    tracing::info!(
        "Threshold {} (from {})",
        config.threshold,
        config::config_file_path().display()
    );

    let logger = Logger::from_config(&config);

    conlog::error!(logger; "Something failed:", "code", 42);
    conlog::warning!(logger; "Disk usage at", 91, "%");
    conlog::debug!(logger; "Enabled levels up to", logger.threshold());
    conlog::info!(logger; "Starting", "server", 8080);
    conlog::verbose!(logger; "Verbose lines enabled:", logger.enabled(Severity::Verbose));

    Ok(())
}
