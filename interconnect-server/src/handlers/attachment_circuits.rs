use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use interconnect_model::{AttachmentCircuit, Collection};
use serde::{Deserialize, Serialize};

use super::ListQuery;
use crate::infra::{app_state::AppState, errors::AppResult, extract::ApiJson};

#[derive(Debug, Default, Deserialize)]
pub struct CreateAttachmentCircuitQuery {
    #[serde(default)]
    pub attachment_circuit_id: String,
}

#[derive(Debug, Serialize)]
pub struct ListAttachmentCircuitsResponse {
    pub attachment_circuits: Vec<AttachmentCircuit>,
}

pub async fn create_attachment_circuit_handler(
    State(state): State<AppState>,
    Query(query): Query<CreateAttachmentCircuitQuery>,
    ApiJson(circuit): ApiJson<AttachmentCircuit>,
) -> AppResult<(StatusCode, Json<AttachmentCircuit>)> {
    let created = state
        .engine()
        .attachment_circuits()
        .create(&query.attachment_circuit_id, circuit)?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_attachment_circuit_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<AttachmentCircuit>> {
    let name = Collection::AttachmentCircuits.qualify(&id);
    Ok(Json(state.engine().attachment_circuits().get(&name)?))
}

pub async fn delete_attachment_circuit_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let name = Collection::AttachmentCircuits.qualify(&id);
    state.engine().attachment_circuits().delete(&name)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_attachment_circuits_handler(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<ListAttachmentCircuitsResponse>> {
    let attachment_circuits = state
        .engine()
        .attachment_circuits()
        .list(query.filter.as_deref())?;
    Ok(Json(ListAttachmentCircuitsResponse {
        attachment_circuits,
    }))
}
