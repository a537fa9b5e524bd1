use crate::state::AppState;
use axum::Router;

pub mod client;
pub mod fallback;
pub mod handlers;

pub fn router() -> Router<AppState> {
    handlers::router()
}
