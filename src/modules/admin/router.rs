use crate::modules::admin::controller::get_session;
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn init_admin_router() -> Router<AppState> {
    Router::new().route("/session", get(get_session))
}
