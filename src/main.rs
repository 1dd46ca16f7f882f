use std::sync::Arc;

use journal_api::auth::TokenVerifier;
use journal_api::config;
use journal_api::database::{pool, JournalStore, PgJournalStore};
use journal_api::routes;
use journal_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!("Starting Journal API in {:?} mode", config.environment);

    let pg_pool = pool::connect(&config.database).await?;
    let store: Arc<dyn JournalStore> = Arc::new(PgJournalStore::new(pg_pool));
    let verifier = TokenVerifier::new(config.security.jwt_secret.clone());

    let app = routes::app(AppState::new(store, verifier));

    // Allow tests or deployments to override port via env
    let port = std::env::var("JOURNAL_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    println!("🚀 Journal API server listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
