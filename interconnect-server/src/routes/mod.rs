pub mod v1;

use crate::AppState;
use axum::Router;

/// Create the API router with all versions
pub fn create_api_router() -> Router<AppState> {
    Router::new().nest("/api/v1", v1::create_v1_router())
}
