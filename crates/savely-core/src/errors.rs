//! Error taxonomy and the uniform error envelope.
//!
//! Every failure leaves the service as
//!
//! ```json
//! { "error": { "code": "EmptyCredential", "message": "authorization header is not provided" } }
//! ```
//!
//! The `code` is stable and machine readable; the `message` is a fixed,
//! human-readable string. Neither ever carries text from an underlying
//! verifier or library error.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Failures produced by the authentication and admin-gate stages.
///
/// All variants are terminal for the current request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The authorization header is absent or empty.
    #[error("authorization header is not provided")]
    EmptyCredential,

    /// The header is not `<scheme> <token>` with the accepted scheme.
    #[error("authorization header format is invalid")]
    MalformedCredentialScheme,

    /// The token verifier rejected the credential.
    #[error("access token is invalid")]
    InvalidCredential,

    /// The token verifier reported an expired credential.
    #[error("access token has expired")]
    ExpiredCredential,

    /// The claims label does not decode into `<email>,<role>`.
    #[error("access token claims are invalid")]
    MalformedClaimsLabel,

    /// The verified identity lacks the required role.
    #[error("authorization failed")]
    Unauthorized,
}

impl AuthError {
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::EmptyCredential => "EmptyCredential",
            AuthError::MalformedCredentialScheme => "MalformedCredentialScheme",
            AuthError::InvalidCredential => "InvalidCredential",
            AuthError::ExpiredCredential => "ExpiredCredential",
            AuthError::MalformedClaimsLabel => "MalformedClaimsLabel",
            AuthError::Unauthorized => "Unauthorized",
        }
    }

    /// Credential failures are 401; a role mismatch on a verified identity is 403.
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::Unauthorized => StatusCode::FORBIDDEN,
            _ => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        ErrorEnvelope::new(self.code(), self.to_string()).into_response_with(self.status())
    }
}

/// Errors returned by terminal handlers.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("internal server error")]
    Internal(#[source] anyhow::Error),
}

impl AppError {
    pub fn internal<E>(err: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        AppError::Internal(err.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Auth(err) => err.into_response(),
            AppError::Internal(err) => {
                tracing::error!(error = ?err, "internal error");
                ErrorEnvelope::new("InternalError", "internal server error")
                    .into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Machine-readable error code
    #[schema(example = "EmptyCredential")]
    pub code: String,
    /// Human-readable description
    #[schema(example = "authorization header is not provided")]
    pub message: String,
}

impl ErrorEnvelope {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
        }
    }

    fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn envelope_of(response: Response) -> ErrorEnvelope {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[test]
    fn test_credential_failures_are_401() {
        for err in [
            AuthError::EmptyCredential,
            AuthError::MalformedCredentialScheme,
            AuthError::InvalidCredential,
            AuthError::ExpiredCredential,
            AuthError::MalformedClaimsLabel,
        ] {
            assert_eq!(err.status(), StatusCode::UNAUTHORIZED, "{}", err.code());
        }
    }

    #[test]
    fn test_role_mismatch_is_403() {
        assert_eq!(AuthError::Unauthorized.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_codes_match_variant_names() {
        assert_eq!(AuthError::EmptyCredential.code(), "EmptyCredential");
        assert_eq!(
            AuthError::MalformedCredentialScheme.code(),
            "MalformedCredentialScheme"
        );
        assert_eq!(AuthError::ExpiredCredential.code(), "ExpiredCredential");
        assert_eq!(AuthError::MalformedClaimsLabel.code(), "MalformedClaimsLabel");
    }

    #[tokio::test]
    async fn test_auth_error_response_envelope() {
        let response = AuthError::ExpiredCredential.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let envelope = envelope_of(response).await;
        assert_eq!(envelope.error.code, "ExpiredCredential");
        assert_eq!(envelope.error.message, "access token has expired");
    }

    #[tokio::test]
    async fn test_app_error_wraps_auth_error() {
        let response = AppError::from(AuthError::Unauthorized).into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(envelope_of(response).await.error.code, "Unauthorized");
    }

    #[tokio::test]
    async fn test_internal_error_hides_cause() {
        let response = AppError::internal(anyhow::anyhow!("pool exhausted at 10.0.0.3")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let envelope = envelope_of(response).await;
        assert_eq!(envelope.error.code, "InternalError");
        assert!(!envelope.error.message.contains("10.0.0.3"));
    }
}
