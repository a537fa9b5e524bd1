use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use time::OffsetDateTime;
use tracing::warn;

use crate::{error::ApiError, state::AppState};

pub mod rate_limiter;

/// Global per-IP ceiling applied in front of the API routes.
pub async fn rate_limit(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request,
    next: Next,
) -> Response {
    let now = OffsetDateTime::now_utc().unix_timestamp();
    if !state.rate_limiter.allow(addr.ip(), now) {
        warn!(client = %addr.ip(), "rate limit exceeded");
        return ApiError::RateLimited.into_response();
    }
    next.run(request).await
}
