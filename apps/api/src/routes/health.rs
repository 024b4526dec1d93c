use axum::Json;
use serde_json::{json, Value};

/// GET /health
/// Liveness only; does not touch the oracle or check the credential.
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
