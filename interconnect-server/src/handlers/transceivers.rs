use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use interconnect_model::{Collection, CompatibleTransceiverType, Transceiver};
use serde::{Deserialize, Serialize};

use super::ListQuery;
use crate::infra::{app_state::AppState, errors::AppResult, extract::ApiJson};

#[derive(Debug, Default, Deserialize)]
pub struct CreateTransceiverQuery {
    #[serde(default)]
    pub transceiver_id: String,
}

#[derive(Debug, Serialize)]
pub struct ListTransceiversResponse {
    pub transceivers: Vec<Transceiver>,
}

#[derive(Debug, Serialize)]
pub struct ListCompatibleTransceiverTypesResponse {
    pub compatible_transceiver_types: Vec<CompatibleTransceiverType>,
}

pub async fn create_transceiver_handler(
    State(state): State<AppState>,
    Query(query): Query<CreateTransceiverQuery>,
    ApiJson(transceiver): ApiJson<Transceiver>,
) -> AppResult<(StatusCode, Json<Transceiver>)> {
    let created = state
        .engine()
        .transceivers()
        .create(&query.transceiver_id, transceiver)?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_transceiver_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Transceiver>> {
    let name = Collection::Transceivers.qualify(&id);
    Ok(Json(state.engine().transceivers().get(&name)?))
}

/// The path names the transceiver; any name in the body is ignored.
pub async fn update_transceiver_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(mut transceiver): ApiJson<Transceiver>,
) -> AppResult<Json<Transceiver>> {
    transceiver.name = Collection::Transceivers.qualify(&id);
    Ok(Json(state.engine().transceivers().update(transceiver)?))
}

pub async fn delete_transceiver_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let name = Collection::Transceivers.qualify(&id);
    state.engine().transceivers().delete(&name)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_transceivers_handler(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<ListTransceiversResponse>> {
    let transceivers = state
        .engine()
        .transceivers()
        .list(query.filter.as_deref())?;
    Ok(Json(ListTransceiversResponse { transceivers }))
}

pub async fn list_compatible_transceiver_types_handler(
    State(state): State<AppState>,
) -> Json<ListCompatibleTransceiverTypesResponse> {
    Json(ListCompatibleTransceiverTypesResponse {
        compatible_transceiver_types: state.engine().transceivers().compatible_types(),
    })
}
