mod catalog;
mod config;
mod db;
mod errors;
mod identity;
mod llm_client;
mod matching;
mod models;
mod profile;
mod recommend;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;

/// Schema migrations embedded from the workspace-level migrations directory.
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations");

/// Default tracing filter when RUST_LOG is unset. Tracing targets use the
/// underscored crate name, not the hyphenated package name.
fn default_log_directive(level: &str) -> String {
    format!("{}={level}", env!("CARGO_CRATE_NAME"))
}
use crate::llm_client::LlmClient;
use crate::recommend::narrator::{LiveNarrator, NarrativeGenerator, OfflineNarrator};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_log_directive(&config.rust_log))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Gabay API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL and bring the schema up to date
    let pool = create_pool(&config.database_url, config.db_max_connections).await?;
    MIGRATOR.run(&pool).await?;
    info!("Database migrations applied");

    // Select the narrative generator once at startup
    let narrator: Arc<dyn NarrativeGenerator> = match (&config.openai_api_key, config.ai_offline) {
        (Some(key), false) => Arc::new(LiveNarrator::new(LlmClient::new(
            config.openai_base_url.clone(),
            key.clone(),
        ))),
        (None, false) => {
            warn!("OPENAI_API_KEY not set; using offline narrative templates");
            Arc::new(OfflineNarrator)
        }
        (_, true) => Arc::new(OfflineNarrator),
    };
    info!(
        "Narrative generator initialized (mode: {}, model: {})",
        narrator.mode(),
        llm_client::MODEL
    );

    // Load the sample catalogs on first run; no-op once seeded
    let report = catalog::seed::seed_catalogs(&pool).await?;
    info!(
        "Catalogs ready (+{} courses, +{} schools, +{} scholarships)",
        report.courses_inserted, report.schools_inserted, report.scholarships_inserted
    );

    // Build app state
    let state = AppState { db: pool, narrator };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_directive_uses_underscored_crate_name() {
        assert_eq!(default_log_directive("info"), "gabay_api=info");
    }

    #[test]
    fn test_embedded_migrations_present() {
        assert!(!MIGRATOR.migrations.is_empty());
    }
}
