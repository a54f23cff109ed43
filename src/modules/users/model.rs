use savely_auth::AuthContext;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub user_id: String,
    pub email: String,
}

impl From<AuthContext> for ProfileResponse {
    fn from(identity: AuthContext) -> Self {
        Self {
            user_id: identity.user_id,
            email: identity.email,
        }
    }
}
