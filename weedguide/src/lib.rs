//! # weedguide: a field guide to invasive weeds
//!
//! `weedguide` serves a single web page listing invasive weed species: what each looks like,
//! how to remove it, where it grows, and photos of it. Content lives in PostgreSQL and is
//! rendered on the server for every request; visitors never log in and nothing is written
//! at runtime.
//!
//! ## Data
//!
//! Four tables back the page (see [`db`]):
//!
//! - `page_headers`: the banner image, title and subtitle; the oldest row is shown
//! - `weeds`: one row per species, listed by `display_order`
//! - `weed_common_names`: the names a weed goes by, one of them flagged primary
//! - `weed_photos`: a weed's gallery, ordered by its own `display_order`
//!
//! The primary name heads each weed's entry. The remaining names are listed after it,
//! joined by [`names::comma_separated`], which also backs the `comma_separated` template filter.
//!
//! ## Request Flow
//!
//! `GET /` borrows one connection from the pool, loads the banner, the ordered weeds and the
//! children of those weeds with one query per table ([`catalog::load_page`]), groups names and
//! photos under their weed in memory, and renders `templates/index.html` through minijinja
//! ([`templates`]). Any database or template failure becomes a plain `500 Internal server
//! error`; details go to the log only ([`errors`]).
//!
//! Besides the page, the router serves the embedded stylesheet under `/static/`, a liveness
//! check at `/healthz`, and Prometheus metrics at `/internal/metrics` when enabled.
//!
//! ## Startup
//!
//! [`Application::new`] connects to the database, applies the embedded schema ([`migrator`]),
//! loads a catalog file into an empty database if one is configured ([`seed`]), and builds the
//! router. [`Application::serve`] then runs until the shutdown future resolves, closes the pool
//! and flushes telemetry.
//!
//! ## Configuration
//!
//! YAML file plus `WEEDGUIDE_`-prefixed environment variables; see [`config`].

pub mod api;
pub mod catalog;
pub mod config;
pub mod db;
pub mod errors;
pub mod names;
pub mod seed;
pub mod static_assets;
pub mod telemetry;
pub mod templates;
#[cfg(test)]
pub mod test_utils;
pub mod types;

use anyhow::Context;
use axum::{Router, routing::get};
use axum_prometheus::PrometheusMetricLayer;
use bon::Builder;
use minijinja::Environment;
use sqlx::{PgPool, postgres::PgPoolOptions};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::{Level, debug, info};

pub use config::Config;

/// Application state shared across all request handlers.
///
/// ```ignore
/// let state = AppState::builder()
///     .db(pool)
///     .config(config)
///     .templates(Arc::new(templates::environment()?))
///     .build();
/// ```
#[derive(Clone, Builder)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    pub templates: Arc<Environment<'static>>,
}

/// Get the weedguide database migrator
pub fn migrator() -> sqlx::migrate::Migrator {
    sqlx::migrate!("./migrations")
}

/// Open the connection pool described by `config.database`
async fn connect_pool(config: &Config) -> anyhow::Result<PgPool> {
    let settings = &config.database.pool;
    info!(
        max_connections = settings.max_connections,
        min_connections = settings.min_connections,
        "Connecting to database"
    );

    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .acquire_timeout(settings.acquire_timeout)
        .idle_timeout(settings.idle_timeout)
        .connect(&config.database.url)
        .await
        .context("Failed to connect to database")
}

/// Apply the schema and load the seed catalog, as configured
async fn setup_database(config: &Config, pool: &PgPool) -> anyhow::Result<()> {
    if config.run_migrations {
        migrator().run(pool).await.context("Failed to apply database migrations")?;
        debug!("Database migrations applied");
    }

    if let Some(path) = &config.seed_file {
        let catalog = seed::Catalog::from_file(path)?;
        let seeded = seed::seed_database(&catalog, pool)
            .await
            .with_context(|| format!("Failed to seed database from {}", path.display()))?;
        if seeded {
            info!("Seeded database from {}", path.display());
        }
    }

    Ok(())
}

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    let enable_metrics = state.config.enable_metrics;

    let mut router = Router::new()
        .route("/", get(api::handlers::page::show_page))
        .route("/static/{*path}", get(api::handlers::static_assets::serve_static))
        .route("/healthz", get(|| async { "OK" }))
        .with_state(state);

    if enable_metrics {
        let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();
        router = router
            .route("/internal/metrics", get(|| async move { metric_handle.render() }))
            .layer(prometheus_layer);
    }

    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    )
}

/// A ready-to-serve site: router plus the pool it reads from.
///
/// 1. **Create**: [`Application::new`] connects, migrates, seeds and builds the router
/// 2. **Serve**: [`Application::serve`] binds to the configured address
/// 3. **Shutdown**: when the shutdown future resolves, in-flight requests finish, the pool
///    closes and pending spans are flushed
pub struct Application {
    router: Router,
    config: Config,
    pool: PgPool,
}

impl Application {
    /// Create a new application instance, connecting to the configured database
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        debug!("Starting weedguide with configuration: {:#?}", config);
        let pool = connect_pool(&config).await?;
        Self::new_with_pool(config, pool).await
    }

    /// Create an application on an existing pool
    pub async fn new_with_pool(config: Config, pool: PgPool) -> anyhow::Result<Self> {
        setup_database(&config, &pool).await?;

        let templates = templates::environment().context("Failed to load page templates")?;
        let state = AppState::builder()
            .db(pool.clone())
            .config(config.clone())
            .templates(Arc::new(templates))
            .build();

        Ok(Self {
            router: build_router(state),
            config,
            pool,
        })
    }

    /// Convert application into a test server (for tests)
    #[cfg(test)]
    pub fn into_test_server(self) -> axum_test::TestServer {
        axum_test::TestServer::new(self.router.into_make_service()).expect("Failed to create test server")
    }

    /// Start serving the application
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let bind_addr = self.config.bind_address();
        let listener = TcpListener::bind(&bind_addr)
            .await
            .with_context(|| format!("Failed to bind to {bind_addr}"))?;
        info!(
            "weedguide listening on http://{}, available at http://localhost:{}",
            bind_addr, self.config.port
        );

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Closing database connections...");
        self.pool.close().await;

        info!("Shutting down telemetry...");
        telemetry::shutdown_telemetry();

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_utils::create_test_config;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use std::path::Path;

    fn lazy_state(config: Config) -> AppState {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgresql://localhost/weedguide")
            .unwrap();
        AppState::builder()
            .db(pool)
            .config(config)
            .templates(Arc::new(templates::environment().unwrap()))
            .build()
    }

    #[tokio::test]
    async fn test_healthz() {
        let server = TestServer::new(build_router(lazy_state(create_test_config()))).unwrap();

        let response = server.get("/healthz").await;

        response.assert_status(StatusCode::OK);
        assert_eq!(response.text(), "OK");
    }

    #[tokio::test]
    async fn test_metrics_route_only_when_enabled() {
        let server = TestServer::new(build_router(lazy_state(create_test_config()))).unwrap();
        server.get("/internal/metrics").await.assert_status(StatusCode::NOT_FOUND);

        // The Prometheus recorder is process-global, so only this test installs it
        let mut config = create_test_config();
        config.enable_metrics = true;
        let server = TestServer::new(build_router(lazy_state(config))).unwrap();

        server.get("/healthz").await.assert_status(StatusCode::OK);
        server.get("/internal/metrics").await.assert_status(StatusCode::OK);
    }

    #[tokio::test]
    async fn test_stylesheet_is_routed() {
        let server = TestServer::new(build_router(lazy_state(create_test_config()))).unwrap();

        server.get("/static/css/styles.css").await.assert_status(StatusCode::OK);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_application_seeds_and_renders_catalog(pool: PgPool) {
        let mut config = create_test_config();
        config.run_migrations = true;
        config.seed_file = Some(Path::new(env!("CARGO_MANIFEST_DIR")).join("catalog.example.yaml"));

        let server = Application::new_with_pool(config, pool).await.unwrap().into_test_server();

        let response = server.get("/").await;
        response.assert_status(StatusCode::OK);
        let body = response.text();
        assert!(body.contains("Invasive Weeds"));
        assert!(body.contains(r#"<h2 class="weed-name">English ivy</h2>"#));
        assert!(body.contains("Also known as: Common ivy, European ivy"));
        assert!(body.find("English ivy").unwrap() < body.find("Himalayan blackberry").unwrap());
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_missing_seed_file_fails_startup(pool: PgPool) {
        let mut config = create_test_config();
        config.seed_file = Some("no-such-catalog.yaml".into());

        let result = Application::new_with_pool(config, pool).await;
        assert!(result.is_err());
    }
}
