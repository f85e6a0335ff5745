use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::infra::app_state::AppState;

pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let targets = state.engine().targets().list().len();

    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "checks": {
            "engine": {
                "status": "healthy",
                "targets": targets,
                "required_antenna_type": state.config().policy.required_antenna_type,
            }
        }
    }))
}
