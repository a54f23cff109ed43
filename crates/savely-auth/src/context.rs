//! Request-scoped identity.

use serde::Serialize;
use utoipa::ToSchema;

use crate::claims::{Claims, LabelledIdentity, Role};

/// Verified identity attached to a single request.
///
/// Built only by the authentication stages after the credential has been
/// verified; handlers read it and never construct or mutate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AuthContext {
    pub user_id: String,
    pub email: String,
    /// Present only when the identity passed a role gate
    pub role: Option<Role>,
}

impl AuthContext {
    /// Identity for authenticated routes: the label is taken as-is.
    pub fn from_claims(claims: &Claims) -> Self {
        Self {
            user_id: claims.sub.clone(),
            email: claims.email.clone(),
            role: None,
        }
    }

    /// Identity for admin-gated routes: the email portion of the decoded label.
    pub fn admin(claims: &Claims, identity: LabelledIdentity) -> Self {
        Self {
            user_id: claims.sub.clone(),
            email: identity.email,
            role: Some(Role::Admin),
        }
    }
}
