//! Tracing helpers shared by the request pipeline.
//!
//! The `request` span opened by the correlation stage is the per-request child
//! logger: every event emitted while a request is in flight inherits its
//! `correlation_id`, and later stages fill in its empty fields.

use tracing::Span;
use tracing::field::Empty;

/// Create the span that scopes one request
pub fn request_span(correlation_id: &str, method: &str, path: &str) -> Span {
    tracing::info_span!(
        "request",
        correlation_id = %correlation_id,
        http.method = %method,
        http.path = %path,
        http.status_code = Empty,
        user.id = Empty,
        auth.success = Empty,
        otel.kind = "server",
        otel.status_code = Empty
    )
}

/// Record a user ID on the current span
pub fn record_user_id(user_id: &str) {
    Span::current().record("user.id", user_id);
}

/// Record authentication success/failure on the current span
pub fn record_auth_result(success: bool) {
    Span::current().record("auth.success", success);
}

/// Record HTTP status code on the given span
pub fn record_http_status(span: &Span, status: u16) {
    span.record("http.status_code", status);
    if status >= 500 {
        span.record("otel.status_code", "ERROR");
    } else {
        span.record("otel.status_code", "OK");
    }
}

/// Log a security-relevant event at WARN level
///
/// Use this for failed authentication and authorization denials.
#[macro_export]
macro_rules! security_event {
    ($event:expr, $($field:tt)*) => {
        tracing::warn!(
            security.event = $event,
            $($field)*
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_outside_span() {
        // Just ensure it doesn't panic when there's no span
        record_user_id("u1");
        record_auth_result(false);
    }

    #[test]
    fn test_record_http_status() {
        let span = request_span("id", "GET", "/");
        record_http_status(&span, 200);
        record_http_status(&span, 503);
    }
}
