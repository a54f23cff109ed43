use axum::{Extension, Json};
use savely_core::ErrorEnvelope;
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::middleware::correlation::CorrelationId;
use crate::modules::admin::model::AdminSessionResponse;

#[utoipa::path(
    get,
    path = "/api/v1/admin/session",
    responses(
        (status = 200, description = "Admin session details", body = AdminSessionResponse),
        (status = 401, description = "Unauthorized - missing, invalid or expired token", body = ErrorEnvelope),
        (status = 403, description = "Forbidden - caller is not an administrator", body = ErrorEnvelope),
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Admin"
)]
#[instrument(skip_all)]
pub async fn get_session(
    Extension(correlation_id): Extension<CorrelationId>,
    AuthUser(identity): AuthUser,
) -> Json<AdminSessionResponse> {
    Json(AdminSessionResponse {
        user_id: identity.user_id,
        email: identity.email,
        role: identity.role,
        correlation_id: correlation_id.to_string(),
    })
}
