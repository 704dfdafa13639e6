#![recursion_limit = "256"]

mod config;
mod db;
mod routes;
mod services;
mod state;

use std::time::Duration;

const SESSION_PURGE_INTERVAL: Duration = Duration::from_secs(60 * 60);

#[tokio::main]
async fn main() {
    // A missing .env is normal in production; real env vars win either way.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");

    let pool = db::init_pool(&config.database_url, config.db_max_connections)
        .await
        .expect("database init failed");

    let state = state::AppState::new(pool.clone(), config.session);

    // Spawn background session cleanup.
    let _reaper = services::session::spawn_session_reaper(pool, SESSION_PURGE_INTERVAL);

    let app = routes::leptos_app(state).expect("leptos app init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "refined-stack listening");
    axum::serve(listener, app).await.expect("server failed");
}
