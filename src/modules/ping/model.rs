use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct PingResponse {
    #[schema(example = "pong")]
    pub message: String,
    /// Same value as the `X-Correlation-ID` response header
    pub correlation_id: String,
}
