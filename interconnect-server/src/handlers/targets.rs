use axum::{
    Json,
    extract::{Path, State},
};
use interconnect_model::{Collection, Target};
use serde::Serialize;

use crate::infra::{app_state::AppState, errors::AppResult};

#[derive(Debug, Serialize)]
pub struct ListTargetsResponse {
    pub targets: Vec<Target>,
}

pub async fn get_target_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Target>> {
    let name = Collection::Targets.qualify(&id);
    Ok(Json(state.engine().targets().get(&name)?))
}

pub async fn list_targets_handler(State(state): State<AppState>) -> Json<ListTargetsResponse> {
    Json(ListTargetsResponse {
        targets: state.engine().targets().list(),
    })
}
