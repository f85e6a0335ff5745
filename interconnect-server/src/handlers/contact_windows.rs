use axum::{
    Json,
    extract::{Query, State},
};
use interconnect_model::ContactWindow;
use serde::Serialize;

use super::ListQuery;
use crate::infra::{app_state::AppState, errors::AppResult};

#[derive(Debug, Serialize)]
pub struct ListContactWindowsResponse {
    pub contact_windows: Vec<ContactWindow>,
}

pub async fn list_contact_windows_handler(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<ListContactWindowsResponse>> {
    let contact_windows = state
        .engine()
        .contact_windows()
        .list(query.filter.as_deref())?;
    Ok(Json(ListContactWindowsResponse { contact_windows }))
}
