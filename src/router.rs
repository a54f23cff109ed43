use axum::Router;
use axum::http::{HeaderValue, Method, header};
use savely_config::CorsConfig;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::middleware::correlation::CORRELATION_ID_HEADER;
use crate::middleware::pipeline::Pipeline;
use crate::modules::admin::router::init_admin_router;
use crate::modules::ping::router::init_ping_router;
use crate::modules::users::router::init_users_router;
use crate::state::AppState;

pub fn init_router(state: AppState) -> Router {
    let cors = cors_layer(&state.cors_config);

    Pipeline::new(state)
        .public(
            "/",
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", ApiDoc::openapi())
                .into(),
        )
        .public("/api/v1/ping", init_ping_router())
        .authenticated("/api/v1/users", init_users_router())
        .admin("/api/v1/admin", init_admin_router())
        .with_cors(cors)
        .build()
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::HeaderName::from_static(CORRELATION_ID_HEADER)])
        .allow_credentials(true)
}
