//! Ordered request pipeline.
//!
//! Every route group is assembled as
//!
//! ```text
//! correlation -> [cors] -> guard (none | authenticate | admin) -> handler
//! ```
//!
//! Each stage either forwards the request or returns a terminal response; a
//! guard that fails never calls the next stage.

use axum::{Router, middleware};
use tower_http::cors::CorsLayer;

use crate::middleware::admin::require_admin;
use crate::middleware::auth::require_auth;
use crate::middleware::correlation::correlation_middleware;
use crate::state::AppState;

/// Access requirement for a route group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    Public,
    Authenticated,
    Admin,
}

pub struct Pipeline {
    state: AppState,
    routes: Router<AppState>,
    cors: Option<CorsLayer>,
}

impl Pipeline {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            routes: Router::new(),
            cors: None,
        }
    }

    pub fn public(self, prefix: &str, router: Router<AppState>) -> Self {
        self.route(prefix, Guard::Public, router)
    }

    pub fn authenticated(self, prefix: &str, router: Router<AppState>) -> Self {
        self.route(prefix, Guard::Authenticated, router)
    }

    pub fn admin(self, prefix: &str, router: Router<AppState>) -> Self {
        self.route(prefix, Guard::Admin, router)
    }

    /// Mount `router` under `prefix` behind `guard`. An empty or `/` prefix merges
    /// at the root.
    pub fn route(mut self, prefix: &str, guard: Guard, router: Router<AppState>) -> Self {
        let guarded = match guard {
            Guard::Public => router,
            Guard::Authenticated => router.route_layer(middleware::from_fn_with_state(
                self.state.clone(),
                require_auth,
            )),
            Guard::Admin => router.route_layer(middleware::from_fn_with_state(
                self.state.clone(),
                require_admin,
            )),
        };

        self.routes = if prefix.is_empty() || prefix == "/" {
            self.routes.merge(guarded)
        } else {
            self.routes.nest(prefix, guarded)
        };
        self
    }

    pub fn with_cors(mut self, cors: CorsLayer) -> Self {
        self.cors = Some(cors);
        self
    }

    pub fn build(self) -> Router {
        let mut router = self.routes.with_state(self.state);
        if let Some(cors) = self.cors {
            router = router.layer(cors);
        }
        router.layer(middleware::from_fn(correlation_middleware))
    }
}
