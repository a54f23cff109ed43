//! Bearer credential extraction shared by the authentication and admin stages.

use axum::http::header::{AsHeaderName, ToStrError};
use axum::http::{HeaderMap, header};
use savely_core::AuthError;

/// The only accepted authorization scheme, compared case-insensitively.
pub const AUTHORIZATION_TYPE: &str = "bearer";

/// Value of `key`, or an empty string when the header is absent.
///
/// A header that is present but not visible ASCII is an error, never empty.
pub fn header_value<K: AsHeaderName>(headers: &HeaderMap, key: K) -> Result<&str, ToStrError> {
    match headers.get(key) {
        Some(value) => value.to_str(),
        None => Ok(""),
    }
}

/// Extract the token from `Authorization: Bearer <token>`.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let raw = header_value(headers, header::AUTHORIZATION)
        .map_err(|_| AuthError::MalformedCredentialScheme)?;
    split_credential(raw)
}

/// Split a raw credential into scheme and token.
///
/// The credential must be exactly two whitespace-separated fields and the
/// scheme must be [`AUTHORIZATION_TYPE`].
pub fn split_credential(raw: &str) -> Result<&str, AuthError> {
    if raw.is_empty() {
        return Err(AuthError::EmptyCredential);
    }

    let mut fields = raw.split_whitespace();
    match (fields.next(), fields.next(), fields.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case(AUTHORIZATION_TYPE) => {
            Ok(token)
        }
        _ => Err(AuthError::MalformedCredentialScheme),
    }
}
