//! HS256 JWT implementation of [`TokenVerifier`].
//!
//! # Example
//!
//! ```ignore
//! use savely_auth::{JwtTokenService, TokenVerifier};
//! use savely_config::JwtConfig;
//!
//! let service = JwtTokenService::new(&JwtConfig::from_env());
//! let token = service.create_access_token("u1", "a@x.com,admin")?;
//! let claims = service.verify(&token)?;
//! ```

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use savely_config::JwtConfig;

use crate::claims::Claims;
use crate::verifier::{TokenVerifier, VerificationError};

pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    access_token_expiry: i64,
}

impl JwtTokenService {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
            access_token_expiry: config.access_token_expiry,
        }
    }

    /// Issues an access token for `user_id` carrying `label` as the identity label.
    pub fn create_access_token(
        &self,
        user_id: &str,
        label: &str,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now().timestamp() as usize;

        let claims = Claims {
            sub: user_id.to_string(),
            email: label.to_string(),
            exp: now + self.access_token_expiry as usize,
            iat: now,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
    }
}

impl TokenVerifier for JwtTokenService {
    fn verify(&self, token: &str) -> Result<Claims, VerificationError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(VerificationError::from)
    }
}

impl From<jsonwebtoken::errors::Error> for VerificationError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::ExpiredSignature => VerificationError::Expired,
            ErrorKind::InvalidSignature => VerificationError::InvalidSignature,
            ErrorKind::InvalidToken
            | ErrorKind::Base64(_)
            | ErrorKind::Json(_)
            | ErrorKind::Utf8(_) => VerificationError::Malformed(err.to_string()),
            _ => VerificationError::Rejected(err.to_string()),
        }
    }
}
