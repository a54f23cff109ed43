use std::sync::Arc;

use savely_auth::{JwtTokenService, TokenVerifier};
use savely_config::{CorsConfig, JwtConfig};

/// Collaborators shared by every request. Nothing here holds per-request state.
#[derive(Clone)]
pub struct AppState {
    pub verifier: Arc<dyn TokenVerifier>,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(verifier: Arc<dyn TokenVerifier>, cors_config: CorsConfig) -> Self {
        Self {
            verifier,
            cors_config,
        }
    }
}

pub fn init_app_state() -> AppState {
    let jwt_config = JwtConfig::from_env();

    AppState::new(
        Arc::new(JwtTokenService::new(&jwt_config)),
        CorsConfig::from_env(),
    )
}
