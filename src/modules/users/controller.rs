use axum::Json;
use savely_core::ErrorEnvelope;
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::modules::users::model::ProfileResponse;

#[utoipa::path(
    get,
    path = "/api/v1/users/me",
    responses(
        (status = 200, description = "Identity of the caller", body = ProfileResponse),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorEnvelope),
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip_all, fields(user.id = %auth_user.user_id()))]
pub async fn get_profile(auth_user: AuthUser) -> Json<ProfileResponse> {
    Json(ProfileResponse::from(auth_user.0))
}
