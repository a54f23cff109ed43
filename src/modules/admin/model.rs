use savely_auth::Role;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct AdminSessionResponse {
    pub user_id: String,
    pub email: String,
    pub role: Option<Role>,
    pub correlation_id: String,
}
