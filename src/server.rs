//! Service runtime
//!
//! [`ServerHandle`] owns the running service: database pool, HTTP listener
//! task and shutdown coordinator. The `billing-service` binary starts one,
//! installs the signal handler and waits for it to stop.

use std::net::SocketAddr;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use crate::config::AppConfig;
use crate::domain::RepositoryProvider;
use crate::infrastructure::database::migrator::Migrator;
use crate::infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};
use crate::interfaces::http::{create_router, RouterDeps};
use crate::support::errors::{AppError, InfraError};
use crate::support::shutdown::{ShutdownCoordinator, ShutdownSignal};

// ── Options ────────────────────────────────────────────────────────

pub struct ServerOptions {
    pub config: AppConfig,
    /// Apply pending migrations before serving (default: true)
    pub auto_migrate: bool,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            auto_migrate: true,
        }
    }
}

// ── Metrics recorder ───────────────────────────────────────────────

/// The global recorder can be installed once per process; later starts in
/// the same process reuse the first handle.
static PROMETHEUS: OnceLock<PrometheusHandle> = OnceLock::new();

fn prometheus_handle() -> PrometheusHandle {
    PROMETHEUS
        .get_or_init(|| match PrometheusBuilder::new().install_recorder() {
            Ok(handle) => handle,
            Err(e) => {
                warn!("Prometheus recorder not installed ({}); metrics stay local", e);
                PrometheusBuilder::new().build_recorder().handle()
            }
        })
        .clone()
}

// ── ServerHandle ───────────────────────────────────────────────────

/// Handle to a running billing service.
///
/// ```rust,no_run
/// use utility_billing::server::{ServerHandle, ServerOptions};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let handle = ServerHandle::start(ServerOptions::default()).await?;
///     handle.install_signal_handler();
///     handle.shutdown_signal().wait().await;
///     handle.wait().await;
///     Ok(())
/// }
/// ```
pub struct ServerHandle {
    pub repos: Arc<dyn RepositoryProvider>,
    pub config: AppConfig,
    /// Address the HTTP listener is bound to
    pub local_addr: SocketAddr,

    db: DatabaseConnection,
    shutdown: ShutdownCoordinator,
    http_task: tokio::task::JoinHandle<()>,
}

impl ServerHandle {
    /// Connect to the database, run migrations and start serving HTTP.
    pub async fn start(opts: ServerOptions) -> Result<Self, AppError> {
        let config = opts.config;
        info!("Starting utility billing service v{}", env!("CARGO_PKG_VERSION"));

        let metrics = prometheus_handle();

        let db_config = DatabaseConfig {
            url: config.database.connection_url(),
            pool: config.database.pool.clone(),
        };
        let db = init_database(&db_config).await.map_err(InfraError::from)?;

        if opts.auto_migrate {
            info!("Running database migrations...");
            Migrator::up(&db, None).await.map_err(InfraError::from)?;
            info!("Migrations completed");
        }

        let repos: Arc<dyn RepositoryProvider> =
            Arc::new(SeaOrmRepositoryProvider::new(db.clone()));

        let router = create_router(RouterDeps {
            repos: repos.clone(),
            db: db.clone(),
            metrics,
            web: config.web.clone(),
        });

        let shutdown = ShutdownCoordinator::new(config.server.shutdown_timeout);
        let shutdown_signal = shutdown.signal();

        let addr = config.server.address();
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(InfraError::from)?;
        let local_addr = listener.local_addr().map_err(InfraError::from)?;
        info!("Listening on http://{}", local_addr);
        info!("Swagger UI available at http://{}/docs/", local_addr);

        let http_task = tokio::spawn(async move {
            let served = axum::serve(listener, router)
                .with_graceful_shutdown(async move {
                    shutdown_signal.wait().await;
                    info!("HTTP server received shutdown signal");
                })
                .await;
            if let Err(e) = served {
                error!("HTTP server error: {}", e);
            }
        });

        Ok(Self {
            repos,
            config,
            local_addr,
            db,
            shutdown,
            http_task,
        })
    }

    pub fn shutdown_signal(&self) -> ShutdownSignal {
        self.shutdown.signal()
    }

    /// Trigger shutdown on SIGTERM or SIGINT.
    pub fn install_signal_handler(&self) {
        self.shutdown.start_signal_listener();
    }

    pub fn trigger_shutdown(&self) {
        self.shutdown.signal().trigger();
    }

    /// Wait for the HTTP server to drain, then close the database pool.
    ///
    /// In-flight requests get `server.shutdown_timeout` seconds to finish.
    pub async fn wait(self) {
        let timeout = Duration::from_secs(self.shutdown.timeout_secs());
        let mut http_task = self.http_task;
        match tokio::time::timeout(timeout, &mut http_task).await {
            Ok(Ok(())) => info!("HTTP server stopped"),
            Ok(Err(e)) => error!("HTTP server task panicked: {}", e),
            Err(_) => {
                warn!("HTTP server did not stop within {:?}; aborting", timeout);
                http_task.abort();
            }
        }

        match self.db.close().await {
            Ok(()) => info!("Database connection closed"),
            Err(e) => warn!("Error closing database connection: {}", e),
        }
        info!("Utility billing service stopped");
    }

    /// Trigger shutdown and wait for completion.
    pub async fn shutdown(self) {
        self.trigger_shutdown();
        self.wait().await;
    }

    pub fn is_running(&self) -> bool {
        !self.http_task.is_finished()
    }
}

// ── Tracing ────────────────────────────────────────────────────────

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `logging.level`. Call once, before
/// [`ServerHandle::start`].
pub fn init_tracing(config: &AppConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    let registry = tracing_subscriber::registry().with(env_filter);
    if config.logging.format.eq_ignore_ascii_case("json") {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
