#![allow(dead_code)]

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{Request, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use http_body_util::BodyExt;
use savely::middleware::auth::AuthUser;
use savely::middleware::correlation::CorrelationId;
use savely::middleware::pipeline::Pipeline;
use savely::state::AppState;
use savely_auth::{Claims, MockTokenVerifier};
use savely_config::CorsConfig;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

pub const CORRELATION_TARGET: &str = "savely::middleware::correlation";

pub fn claims(id: &str, label: &str) -> Claims {
    Claims {
        sub: id.to_string(),
        email: label.to_string(),
        exp: 9999999999,
        iat: 1234567890,
    }
}

pub fn verifier_returning(label: &'static str) -> MockTokenVerifier {
    let mut verifier = MockTokenVerifier::new();
    verifier
        .expect_verify()
        .times(1)
        .returning(move |_| Ok(claims("u1", label)));
    verifier
}

pub fn verifier_never_called() -> MockTokenVerifier {
    let mut verifier = MockTokenVerifier::new();
    verifier.expect_verify().never();
    verifier
}

/// Router with a counting handler mounted at `/public/whoami`,
/// `/auth/whoami` and `/admin/whoami`. The guarded routes echo the identity.
pub fn test_app(verifier: MockTokenVerifier) -> (Router, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let state = AppState::new(
        Arc::new(verifier),
        CorsConfig {
            allowed_origins: vec![],
        },
    );

    let handler_hits = hits.clone();
    let whoami = Router::new().route(
        "/whoami",
        get(move |AuthUser(identity): AuthUser| {
            let hits = handler_hits.clone();
            async move {
                hits.fetch_add(1, Ordering::SeqCst);
                Json(identity)
            }
        }),
    );

    let public = Router::new().route(
        "/whoami",
        get(|Extension(correlation_id): Extension<CorrelationId>| async move {
            correlation_id.to_string()
        }),
    );

    let app = Pipeline::new(state)
        .public("/public", public)
        .authenticated("/auth", whoami.clone())
        .admin("/admin", whoami)
        .build();

    (app, hits)
}

pub fn get_request(uri: &str, authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(value) = authorization {
        builder = builder.header("authorization", value);
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

pub fn error_code(body: &str) -> String {
    let value: serde_json::Value = serde_json::from_str(body).unwrap();
    value["error"]["code"].as_str().unwrap().to_string()
}

#[derive(Debug, Clone)]
pub struct CapturedEvent {
    pub target: String,
    pub level: Level,
    pub fields: HashMap<String, String>,
}

/// Tracing layer that records every event it sees.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<CapturedEvent>>>);

impl CapturedLogs {
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.0.lock().unwrap().clone()
    }

    pub fn events_from(&self, target: &str) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|event| event.target == target)
            .collect()
    }
}

struct FieldVisitor<'a>(&'a mut HashMap<String, String>);

impl Visit for FieldVisitor<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{value:?}"));
    }
}

impl<S: Subscriber> Layer<S> for CapturedLogs {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = HashMap::new();
        event.record(&mut FieldVisitor(&mut fields));

        self.0.lock().unwrap().push(CapturedEvent {
            target: event.metadata().target().to_string(),
            level: *event.metadata().level(),
            fields,
        });
    }
}
