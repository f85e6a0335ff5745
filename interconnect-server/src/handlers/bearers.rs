use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use interconnect_model::{Bearer, Collection};
use serde::{Deserialize, Serialize};

use super::ListQuery;
use crate::infra::{app_state::AppState, errors::AppResult, extract::ApiJson};

#[derive(Debug, Default, Deserialize)]
pub struct CreateBearerQuery {
    #[serde(default)]
    pub bearer_id: String,
}

#[derive(Debug, Serialize)]
pub struct ListBearersResponse {
    pub bearers: Vec<Bearer>,
}

pub async fn create_bearer_handler(
    State(state): State<AppState>,
    Query(query): Query<CreateBearerQuery>,
    ApiJson(bearer): ApiJson<Bearer>,
) -> AppResult<(StatusCode, Json<Bearer>)> {
    let created = state.engine().bearers().create(&query.bearer_id, bearer)?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_bearer_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Bearer>> {
    let name = Collection::Bearers.qualify(&id);
    Ok(Json(state.engine().bearers().get(&name)?))
}

pub async fn delete_bearer_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let name = Collection::Bearers.qualify(&id);
    state.engine().bearers().delete(&name)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_bearers_handler(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<ListBearersResponse>> {
    let bearers = state.engine().bearers().list(query.filter.as_deref())?;
    Ok(Json(ListBearersResponse { bearers }))
}
