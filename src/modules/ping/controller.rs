use axum::{Extension, Json};
use tracing::instrument;

use crate::middleware::correlation::CorrelationId;
use crate::modules::ping::model::PingResponse;

#[utoipa::path(
    get,
    path = "/api/v1/ping",
    responses(
        (status = 200, description = "Service is up", body = PingResponse),
    ),
    tag = "Ping"
)]
#[instrument(skip_all)]
pub async fn ping(Extension(correlation_id): Extension<CorrelationId>) -> Json<PingResponse> {
    Json(PingResponse {
        message: "pong".to_string(),
        correlation_id: correlation_id.to_string(),
    })
}
