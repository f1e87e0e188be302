//! Liveness endpoint.

use axum::Json;
use serde_json::{json, Value};

/// GET /health - Basic liveness probe.
///
/// Returns 200 immediately without touching any backend.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
