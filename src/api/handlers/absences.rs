use axum::{Json, extract::State, http::StatusCode};
use tracing::info;
use uuid::Uuid;

use super::ApiResult;
use crate::api::extract::{ApiJson, ApiQuery, IdPath};
use crate::api::request::AbsenceListQuery;
use crate::api::state::AppState;
use crate::auth::Identity;
use crate::models::{Absence, AbsenceType, NewAbsence, Page};
use crate::reports::LeaveBalance;

/// Handler for GET /api/absences.
pub(super) async fn list(
    State(state): State<AppState>,
    identity: Identity,
    ApiQuery(query): ApiQuery<AbsenceListQuery>,
) -> ApiResult<Json<Page<Absence>>> {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee_id = ?query.employee_id,
        "Listing absences"
    );
    let result = match query.into_filter() {
        Ok((filter, page)) => state.service().list_absences(&identity, filter, page).await,
        Err(err) => Err(err),
    };
    result
        .map(Json)
        .map_err(|err| state.reject(correlation_id, err))
}

/// Handler for GET /api/absences/types.
pub(super) async fn types(
    State(state): State<AppState>,
    identity: Identity,
) -> ApiResult<Json<Vec<AbsenceType>>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Listing absence types");
    state
        .service()
        .list_absence_types(&identity)
        .await
        .map(Json)
        .map_err(|err| state.reject(correlation_id, err))
}

/// Handler for GET /api/absences/balance/:employee_id.
pub(super) async fn balance(
    State(state): State<AppState>,
    identity: Identity,
    IdPath(employee_id): IdPath,
) -> ApiResult<Json<Vec<LeaveBalance>>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id = %employee_id, "Computing leave balance");
    state
        .service()
        .leave_balance(&identity, employee_id)
        .await
        .map(Json)
        .map_err(|err| state.reject(correlation_id, err))
}

/// Handler for POST /api/absences.
pub(super) async fn request(
    State(state): State<AppState>,
    identity: Identity,
    ApiJson(new): ApiJson<NewAbsence>,
) -> ApiResult<(StatusCode, Json<Absence>)> {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee_id = %new.employee_id,
        start_date = %new.start_date,
        end_date = %new.end_date,
        "Requesting absence"
    );
    state
        .service()
        .request_absence(&identity, new)
        .await
        .map(|absence| (StatusCode::CREATED, Json(absence)))
        .map_err(|err| state.reject(correlation_id, err))
}

/// Handler for PATCH /api/absences/:id/approve.
pub(super) async fn approve(
    State(state): State<AppState>,
    identity: Identity,
    IdPath(id): IdPath,
) -> ApiResult<Json<Absence>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, absence_id = %id, "Approving absence");
    state
        .service()
        .approve_absence(&identity, id)
        .await
        .map(Json)
        .map_err(|err| state.reject(correlation_id, err))
}

/// Handler for PATCH /api/absences/:id/reject.
pub(super) async fn reject(
    State(state): State<AppState>,
    identity: Identity,
    IdPath(id): IdPath,
) -> ApiResult<Json<Absence>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, absence_id = %id, "Rejecting absence");
    state
        .service()
        .reject_absence(&identity, id)
        .await
        .map(Json)
        .map_err(|err| state.reject(correlation_id, err))
}

/// Handler for PATCH /api/absences/:id/cancel.
pub(super) async fn cancel(
    State(state): State<AppState>,
    identity: Identity,
    IdPath(id): IdPath,
) -> ApiResult<Json<Absence>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, absence_id = %id, "Cancelling absence");
    state
        .service()
        .cancel_absence(&identity, id)
        .await
        .map(Json)
        .map_err(|err| state.reject(correlation_id, err))
}
