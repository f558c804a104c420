use axum::{Json, extract::State, http::StatusCode};
use tracing::info;
use uuid::Uuid;

use super::ApiResult;
use crate::api::extract::{ApiJson, ApiQuery, IdPath};
use crate::api::request::EmployeeListQuery;
use crate::api::state::AppState;
use crate::auth::Identity;
use crate::models::{Employee, EmployeeUpdate, NewEmployee, Page};

/// Handler for GET /api/employees.
pub(super) async fn list(
    State(state): State<AppState>,
    identity: Identity,
    ApiQuery(query): ApiQuery<EmployeeListQuery>,
) -> ApiResult<Json<Page<Employee>>> {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        user_id = %identity.user_id,
        search = ?query.search,
        "Listing employees"
    );
    let result = match query.into_query() {
        Ok(query) => state.service().list_employees(&identity, query).await,
        Err(err) => Err(err),
    };
    result
        .map(Json)
        .map_err(|err| state.reject(correlation_id, err))
}

/// Handler for GET /api/employees/:id.
pub(super) async fn fetch(
    State(state): State<AppState>,
    identity: Identity,
    IdPath(id): IdPath,
) -> ApiResult<Json<Employee>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id = %id, "Fetching employee");
    state
        .service()
        .get_employee(&identity, id)
        .await
        .map(Json)
        .map_err(|err| state.reject(correlation_id, err))
}

/// Handler for POST /api/employees.
pub(super) async fn create(
    State(state): State<AppState>,
    identity: Identity,
    ApiJson(new): ApiJson<NewEmployee>,
) -> ApiResult<(StatusCode, Json<Employee>)> {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        user_id = %identity.user_id,
        "Creating employee"
    );
    state
        .service()
        .create_employee(&identity, new)
        .await
        .map(|employee| (StatusCode::CREATED, Json(employee)))
        .map_err(|err| state.reject(correlation_id, err))
}

/// Handler for PUT /api/employees/:id.
pub(super) async fn update(
    State(state): State<AppState>,
    identity: Identity,
    IdPath(id): IdPath,
    ApiJson(changes): ApiJson<EmployeeUpdate>,
) -> ApiResult<Json<Employee>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id = %id, "Updating employee");
    state
        .service()
        .update_employee(&identity, id, changes)
        .await
        .map(Json)
        .map_err(|err| state.reject(correlation_id, err))
}

/// Handler for DELETE /api/employees/:id.
pub(super) async fn terminate(
    State(state): State<AppState>,
    identity: Identity,
    IdPath(id): IdPath,
) -> ApiResult<Json<Employee>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id = %id, "Terminating employee");
    state
        .service()
        .terminate_employee(&identity, id)
        .await
        .map(Json)
        .map_err(|err| state.reject(correlation_id, err))
}
