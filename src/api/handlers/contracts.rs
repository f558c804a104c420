use axum::{Json, extract::State, http::StatusCode};
use tracing::info;
use uuid::Uuid;

use super::ApiResult;
use crate::api::extract::{ApiJson, ApiQuery, IdPath};
use crate::api::request::ContractListQuery;
use crate::api::state::AppState;
use crate::auth::Identity;
use crate::models::{Contract, ContractUpdate, NewContract, Page};

/// Handler for GET /api/contracts.
pub(super) async fn list(
    State(state): State<AppState>,
    identity: Identity,
    ApiQuery(query): ApiQuery<ContractListQuery>,
) -> ApiResult<Json<Page<Contract>>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Listing contracts");
    let result = match query.into_filter() {
        Ok((filter, page)) => state.service().list_contracts(&identity, filter, page).await,
        Err(err) => Err(err),
    };
    result
        .map(Json)
        .map_err(|err| state.reject(correlation_id, err))
}

/// Handler for POST /api/contracts.
pub(super) async fn create(
    State(state): State<AppState>,
    identity: Identity,
    ApiJson(new): ApiJson<NewContract>,
) -> ApiResult<(StatusCode, Json<Contract>)> {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee_id = %new.employee_id,
        "Creating contract"
    );
    state
        .service()
        .create_contract(&identity, new)
        .await
        .map(|contract| (StatusCode::CREATED, Json(contract)))
        .map_err(|err| state.reject(correlation_id, err))
}

/// Handler for PUT /api/contracts/:id.
pub(super) async fn update(
    State(state): State<AppState>,
    identity: Identity,
    IdPath(id): IdPath,
    ApiJson(changes): ApiJson<ContractUpdate>,
) -> ApiResult<Json<Contract>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, contract_id = %id, "Updating contract");
    state
        .service()
        .update_contract(&identity, id, changes)
        .await
        .map(Json)
        .map_err(|err| state.reject(correlation_id, err))
}
