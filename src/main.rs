use std::sync::Arc;
use std::time::Duration;

mod app;
mod auth;
mod business;
mod config;
mod error;
mod recommendations;
mod security;
mod state;
mod users;

use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "adviser=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let app_state = AppState::init().await?;

    sqlx::migrate!("./migrations").run(&app_state.db).await?;

    // Idle rate-limit windows are evicted in the background.
    let limiter = Arc::clone(&app_state.rate_limiter);
    let window_secs = app_state.config.rate_limit.window_secs;
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(window_secs.max(1) as u64));
        loop {
            ticker.tick().await;
            limiter.evict_expired(time::OffsetDateTime::now_utc().unix_timestamp());
        }
    });

    let host = app_state.config.host.clone();
    let port = app_state.config.port;
    let app = app::build_app(app_state);
    app::serve(app, &host, port).await
}
