//! # Savely Auth
//!
//! Claims, request identity and token verification for the Savely API.
//!
//! - [`claims`]: access-token claims, [`Role`] and identity-label decoding
//! - [`context`]: the request-scoped [`AuthContext`]
//! - [`verifier`]: the [`TokenVerifier`] contract and [`VerificationError`]
//! - [`jwt`]: the HS256 [`JwtTokenService`]
//!
//! Enable the `testing` feature to get `MockTokenVerifier`.

pub mod claims;
pub mod context;
pub mod jwt;
pub mod verifier;

// Re-export commonly used types at crate root
pub use claims::{Claims, LabelledIdentity, Role};
pub use context::AuthContext;
pub use jwt::JwtTokenService;
#[cfg(any(test, feature = "testing"))]
pub use verifier::MockTokenVerifier;
pub use verifier::{TokenVerifier, VerificationError};
