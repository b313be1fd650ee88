//! Utility billing service binary
//!
//! ```sh
//! # Default config (~/.config/utility-billing/config.toml)
//! billing-service
//!
//! # Custom config and port
//! billing-service --config /etc/utility-billing/config.toml --port 8080
//!
//! # Validate config without starting
//! billing-service --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use utility_billing::config::AppConfig;
use utility_billing::server::{init_tracing, ServerHandle, ServerOptions};
use utility_billing::DatabaseConfig;

#[derive(Parser, Debug)]
#[command(
    name = "billing-service",
    version,
    about = "Utility bill retrieval, payment and adjustment web service",
    long_about = "Serves the utility billing HTML pages and JSON API.\n\n\
                  Default config: ~/.config/utility-billing/config.toml"
)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, env = "BILLING_CONFIG")]
    config: Option<PathBuf>,

    /// Override the HTTP listen port
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration and exit
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup
    #[arg(long)]
    no_migrate: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .unwrap_or_else(utility_billing::default_config_path);

    let loaded = AppConfig::load(&config_path);
    let mut config = match &loaded {
        Ok(cfg) => cfg.clone(),
        Err(_) => AppConfig::default(),
    };

    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    init_tracing(&config);
    match loaded {
        Ok(_) => info!("Configuration loaded from {}", config_path.display()),
        Err(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            if cli.check {
                return Err(e.into());
            }
            error!("Using default configuration.");
        }
    }

    if cli.check {
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   Address     : {}", config.server.address());
        let db = DatabaseConfig {
            url: config.database.connection_url(),
            pool: config.database.pool.clone(),
        };
        println!("   Database    : {}", db.redacted_url());
        println!("   Static dir  : {}", config.web.static_dir.display());
        println!("   Log level   : {}", config.logging.level);
        return Ok(());
    }

    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
    })
    .await?;

    handle.install_signal_handler();
    info!("Press Ctrl+C to shut down.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}
