use savely_auth::Role;
use savely_core::{ErrorBody, ErrorEnvelope};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::admin::model::AdminSessionResponse;
use crate::modules::ping::model::PingResponse;
use crate::modules::users::model::ProfileResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::ping::controller::ping,
        crate::modules::users::controller::get_profile,
        crate::modules::admin::controller::get_session,
    ),
    components(
        schemas(
            PingResponse,
            ProfileResponse,
            AdminSessionResponse,
            Role,
            ErrorEnvelope,
            ErrorBody,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Ping", description = "Liveness"),
        (name = "Users", description = "Authenticated user endpoints"),
        (name = "Admin", description = "Administrator-only endpoints")
    ),
    info(
        title = "Savely API",
        version = "0.1.0",
        description = "A personal finance API. Protected routes expect `Authorization: Bearer <token>`; every response carries `X-Correlation-ID`.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
