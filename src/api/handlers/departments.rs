use axum::{Json, extract::State, http::StatusCode};
use tracing::info;
use uuid::Uuid;

use super::ApiResult;
use crate::api::extract::{ApiJson, IdPath};
use crate::api::state::AppState;
use crate::auth::Identity;
use crate::models::{
    Department, DepartmentDetail, DepartmentSummary, DepartmentUpdate, NewDepartment,
};

/// Handler for GET /api/departments.
pub(super) async fn list(
    State(state): State<AppState>,
    identity: Identity,
) -> ApiResult<Json<Vec<DepartmentSummary>>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, user_id = %identity.user_id, "Listing departments");
    state
        .service()
        .list_departments(&identity)
        .await
        .map(Json)
        .map_err(|err| state.reject(correlation_id, err))
}

/// Handler for GET /api/departments/:id.
pub(super) async fn fetch(
    State(state): State<AppState>,
    identity: Identity,
    IdPath(id): IdPath,
) -> ApiResult<Json<DepartmentDetail>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, department_id = %id, "Fetching department");
    state
        .service()
        .get_department(&identity, id)
        .await
        .map(Json)
        .map_err(|err| state.reject(correlation_id, err))
}

/// Handler for POST /api/departments.
pub(super) async fn create(
    State(state): State<AppState>,
    identity: Identity,
    ApiJson(new): ApiJson<NewDepartment>,
) -> ApiResult<(StatusCode, Json<Department>)> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, code = %new.code, "Creating department");
    state
        .service()
        .create_department(&identity, new)
        .await
        .map(|department| (StatusCode::CREATED, Json(department)))
        .map_err(|err| state.reject(correlation_id, err))
}

/// Handler for PUT /api/departments/:id.
pub(super) async fn update(
    State(state): State<AppState>,
    identity: Identity,
    IdPath(id): IdPath,
    ApiJson(changes): ApiJson<DepartmentUpdate>,
) -> ApiResult<Json<Department>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, department_id = %id, "Updating department");
    state
        .service()
        .update_department(&identity, id, changes)
        .await
        .map(Json)
        .map_err(|err| state.reject(correlation_id, err))
}
