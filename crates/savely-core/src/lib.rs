//! # Savely Core
//!
//! Core error types for the Savely API.
//!
//! - [`errors`]: the authentication/authorization failure taxonomy, the
//!   handler-facing [`AppError`], and the uniform JSON error envelope.
//!
//! # Example
//!
//! ```ignore
//! use savely_core::{AppError, AuthError};
//!
//! async fn handler() -> Result<Json<Profile>, AppError> {
//!     Err(AuthError::Unauthorized.into())
//! }
//! ```

pub mod errors;

// Re-export commonly used types at crate root
pub use errors::{AppError, AuthError, ErrorBody, ErrorEnvelope};
