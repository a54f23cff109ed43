use anyhow::anyhow;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, request::Parts},
    middleware::Next,
    response::Response,
};
use savely_auth::{AuthContext, TokenVerifier};
use savely_core::{AppError, AuthError};

use crate::middleware::credential::bearer_token;
use crate::security_event;
use crate::state::AppState;
use crate::utils::tracing::{record_auth_result, record_user_id};

/// Verify the bearer credential and build the request identity.
///
/// Verifier failures are logged and collapsed into `InvalidCredential`; the
/// caller never learns why verification failed.
pub fn authenticate(
    headers: &HeaderMap,
    verifier: &dyn TokenVerifier,
) -> Result<AuthContext, AuthError> {
    let token = bearer_token(headers)?;

    let claims = verifier.verify(token).map_err(|err| {
        tracing::error!(error = %err, "error verifying token");
        AuthError::InvalidCredential
    })?;

    Ok(AuthContext::from_claims(&claims))
}

/// Middleware for routes that require any verified identity.
///
/// ```rust,ignore
/// let routes = Router::new()
///     .route("/me", get(me))
///     .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));
/// ```
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let identity = authenticate(req.headers(), state.verifier.as_ref()).inspect_err(|err| {
        record_auth_result(false);
        security_event!("authentication.rejected", reason = err.code());
    })?;

    record_auth_result(true);
    record_user_id(&identity.user_id);

    req.extensions_mut().insert(identity);
    Ok(next.run(req).await)
}

/// Extractor for the identity attached by [`require_auth`] or
/// [`require_admin`](crate::middleware::admin::require_admin).
///
/// On a route outside the authentication pipeline there is no identity and
/// extraction fails with an internal error.
#[derive(Debug, Clone)]
pub struct AuthUser(pub AuthContext);

impl AuthUser {
    pub fn user_id(&self) -> &str {
        &self.0.user_id
    }

    pub fn email(&self) -> &str {
        &self.0.email
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthContext>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| AppError::internal(anyhow!("route is not behind an authentication stage")))
    }
}
