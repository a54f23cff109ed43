use crate::modules::ping::controller::ping;
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn init_ping_router() -> Router<AppState> {
    Router::new().route("/", get(ping))
}
