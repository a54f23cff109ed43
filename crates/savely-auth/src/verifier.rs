//! Token verification contract.

use thiserror::Error;

use crate::claims::Claims;

/// Why a token was rejected.
///
/// The detail strings are for operators only and must never reach a client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerificationError {
    #[error("token has expired")]
    Expired,

    #[error("token is malformed: {0}")]
    Malformed(String),

    #[error("token signature is invalid")]
    InvalidSignature,

    #[error("token was rejected: {0}")]
    Rejected(String),
}

impl VerificationError {
    pub fn is_expired(&self) -> bool {
        matches!(self, VerificationError::Expired)
    }
}

/// Verifies bearer tokens and decodes their claims.
///
/// Implementations are shared across all in-flight requests and must not hold
/// per-request state.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Result<Claims, VerificationError>;
}
