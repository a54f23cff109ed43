//! Claim structures carried by access tokens.
//!
//! Access tokens carry the identity label in the `email` claim. On tokens
//! issued for privileged sessions the label is `<email>,<role>`; see
//! [`LabelledIdentity`] for the decoding rules.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JWT claims for access tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID (subject claim)
    #[serde(alias = "id")]
    pub sub: String,
    /// Identity label; `<email>` or `<email>,<role>`
    pub email: String,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}

/// Roles recognised in identity labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

/// An identity label decoded into its email and role parts.
///
/// The role is kept as the raw string so an unknown role stays distinguishable
/// from a malformed label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelledIdentity {
    pub email: String,
    pub role: String,
}

impl LabelledIdentity {
    /// Decodes `<email>,<role>`. Any label that does not split into exactly
    /// two comma-separated fields yields `None`.
    pub fn parse(label: &str) -> Option<Self> {
        let mut fields = label.split(',');
        let email = fields.next()?;
        let role = fields.next()?;
        if fields.next().is_some() {
            return None;
        }

        Some(Self {
            email: email.to_string(),
            role: role.to_string(),
        })
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.role == role.as_str()
    }
}
