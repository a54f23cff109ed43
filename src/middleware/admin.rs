//! Admin gate.
//!
//! Runs the same credential extraction and verification as
//! [`authenticate`](crate::middleware::auth::authenticate), then requires the
//! identity label to decode to `<email>,admin`. Every failure returns before
//! the wrapped handler is reached.

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use savely_auth::{AuthContext, LabelledIdentity, Role, TokenVerifier};
use savely_core::AuthError;

use crate::middleware::credential::bearer_token;
use crate::security_event;
use crate::state::AppState;
use crate::utils::tracing::{record_auth_result, record_user_id};

/// Verify the credential and require the administrative role.
///
/// Unlike plain authentication, an expired credential is reported as
/// `ExpiredCredential` so clients know to log in again.
pub fn authorize_admin(
    headers: &HeaderMap,
    verifier: &dyn TokenVerifier,
) -> Result<AuthContext, AuthError> {
    let token = bearer_token(headers)?;

    let claims = verifier.verify(token).map_err(|err| {
        if err.is_expired() {
            tracing::warn!(error = %err, "access token has expired");
            return AuthError::ExpiredCredential;
        }
        tracing::error!(error = %err, "error verifying token");
        AuthError::InvalidCredential
    })?;

    let identity =
        LabelledIdentity::parse(&claims.email).ok_or(AuthError::MalformedClaimsLabel)?;

    if !identity.has_role(Role::Admin) {
        return Err(AuthError::Unauthorized);
    }

    Ok(AuthContext::admin(&claims, identity))
}

/// Middleware for admin-only routes.
///
/// ```rust,ignore
/// let admin_routes = Router::new()
///     .route("/session", get(session))
///     .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));
/// ```
pub async fn require_admin(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let identity = authorize_admin(req.headers(), state.verifier.as_ref()).inspect_err(|err| {
        record_auth_result(false);
        security_event!("authorization.rejected", reason = err.code());
    })?;

    record_auth_result(true);
    record_user_id(&identity.user_id);

    req.extensions_mut().insert(identity);
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, header};
    use savely_auth::{Claims, MockTokenVerifier, VerificationError};

    fn bearer() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer goodtoken"));
        headers
    }

    fn verifier_returning(label: &'static str) -> MockTokenVerifier {
        let mut verifier = MockTokenVerifier::new();
        verifier.expect_verify().times(1).returning(move |_| {
            Ok(Claims {
                sub: "u1".to_string(),
                email: label.to_string(),
                exp: 9999999999,
                iat: 1234567890,
            })
        });
        verifier
    }

    fn verifier_failing(err: VerificationError) -> MockTokenVerifier {
        let mut verifier = MockTokenVerifier::new();
        verifier
            .expect_verify()
            .times(1)
            .returning(move |_| Err(err.clone()));
        verifier
    }

    #[test]
    fn test_admin_label_is_accepted() {
        let identity = authorize_admin(&bearer(), &verifier_returning("a@x.com,admin")).unwrap();
        assert_eq!(identity.user_id, "u1");
        assert_eq!(identity.email, "a@x.com");
        assert_eq!(identity.role, Some(Role::Admin));
    }

    #[test]
    fn test_user_role_is_rejected() {
        assert_eq!(
            authorize_admin(&bearer(), &verifier_returning("a@x.com,user")),
            Err(AuthError::Unauthorized)
        );
    }

    #[test]
    fn test_label_without_role_is_malformed() {
        assert_eq!(
            authorize_admin(&bearer(), &verifier_returning("a@x.com")),
            Err(AuthError::MalformedClaimsLabel)
        );
        assert_eq!(
            authorize_admin(&bearer(), &verifier_returning("a@x.com,admin,admin")),
            Err(AuthError::MalformedClaimsLabel)
        );
    }

    #[test]
    fn test_expired_is_distinct() {
        assert_eq!(
            authorize_admin(&bearer(), &verifier_failing(VerificationError::Expired)),
            Err(AuthError::ExpiredCredential)
        );
    }

    #[test]
    fn test_other_verifier_failures_are_invalid() {
        for err in [
            VerificationError::InvalidSignature,
            VerificationError::Malformed("bad header".into()),
            VerificationError::Rejected("wrong algorithm".into()),
        ] {
            assert_eq!(
                authorize_admin(&bearer(), &verifier_failing(err)),
                Err(AuthError::InvalidCredential)
            );
        }
    }

    #[test]
    fn test_malformed_scheme_skips_verifier() {
        let mut verifier = MockTokenVerifier::new();
        verifier.expect_verify().never();

        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Token xyz123 extra"),
        );

        assert_eq!(
            authorize_admin(&headers, &verifier),
            Err(AuthError::MalformedCredentialScheme)
        );
    }
}
