//! Request correlation and completion logging.

use std::fmt;
use std::time::Instant;

use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use tracing::{Instrument, error, info, warn};
use uuid::Uuid;

use crate::utils::tracing::{record_http_status, request_span};

/// Response header echoing the request's correlation identifier.
pub const CORRELATION_ID_HEADER: &str = "x-correlation-id";

/// Identifier tying together every log line and the response of one request.
///
/// UUIDv7, so identifiers sort by creation time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CorrelationId(String);

impl CorrelationId {
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CorrelationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outermost pipeline stage.
///
/// Assigns a fresh [`CorrelationId`], exposes it to handlers through request
/// extensions, runs the rest of the chain inside a `request` span carrying the
/// id, echoes it in `X-Correlation-ID`, and emits exactly one completion
/// record. This stage never rejects a request.
pub async fn correlation_middleware(mut req: Request, next: Next) -> Response {
    let start = Instant::now();
    let correlation_id = CorrelationId::new();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    req.extensions_mut().insert(correlation_id.clone());

    let span = request_span(correlation_id.as_str(), method.as_str(), &path);
    let mut response = next.run(req).instrument(span.clone()).await;

    if let Ok(value) = HeaderValue::from_str(correlation_id.as_str()) {
        response.headers_mut().insert(CORRELATION_ID_HEADER, value);
    }

    let status = response.status().as_u16();
    let latency_ms = start.elapsed().as_millis() as u64;
    record_http_status(&span, status);

    span.in_scope(|| match status {
        500..=599 => error!(
            correlation_id = %correlation_id,
            method = %method,
            path = %path,
            status,
            latency_ms,
            "{method} request to {path} failed"
        ),
        400..=499 => warn!(
            correlation_id = %correlation_id,
            method = %method,
            path = %path,
            status,
            latency_ms,
            "{method} request to {path} rejected"
        ),
        _ => info!(
            correlation_id = %correlation_id,
            method = %method,
            path = %path,
            status,
            latency_ms,
            "{method} request to {path} completed"
        ),
    });

    response
}
