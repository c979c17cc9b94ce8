//! Health check - GET /health

use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use chrono::Utc;
use serde_json::{json, Value};

use crate::state::WebServerState;

pub async fn health_check(State(state): State<Arc<WebServerState>>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "uptime_seconds": state.get_uptime_seconds(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
