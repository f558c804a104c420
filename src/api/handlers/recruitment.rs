use axum::{Json, extract::State, http::StatusCode};
use tracing::info;
use uuid::Uuid;

use super::ApiResult;
use crate::api::extract::{ApiJson, ApiQuery, IdPath};
use crate::api::request::RecruitmentListQuery;
use crate::api::state::AppState;
use crate::auth::Identity;
use crate::models::{
    Candidate, CandidateUpdate, NewCandidate, NewRecruitment, RecruitmentDetail,
    RecruitmentPosting, RecruitmentSummary, RecruitmentUpdate,
};

/// Handler for GET /api/recruitment.
pub(super) async fn list(
    State(state): State<AppState>,
    identity: Identity,
    ApiQuery(query): ApiQuery<RecruitmentListQuery>,
) -> ApiResult<Json<Vec<RecruitmentSummary>>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Listing postings");
    state
        .service()
        .list_postings(&identity, query.into())
        .await
        .map(Json)
        .map_err(|err| state.reject(correlation_id, err))
}

/// Handler for GET /api/recruitment/:id.
pub(super) async fn fetch(
    State(state): State<AppState>,
    identity: Identity,
    IdPath(id): IdPath,
) -> ApiResult<Json<RecruitmentDetail>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, recruitment_id = %id, "Fetching posting");
    state
        .service()
        .get_posting(&identity, id)
        .await
        .map(Json)
        .map_err(|err| state.reject(correlation_id, err))
}

/// Handler for POST /api/recruitment.
pub(super) async fn create(
    State(state): State<AppState>,
    identity: Identity,
    ApiJson(new): ApiJson<NewRecruitment>,
) -> ApiResult<(StatusCode, Json<RecruitmentPosting>)> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, title = %new.title, "Opening posting");
    state
        .service()
        .create_posting(&identity, new)
        .await
        .map(|posting| (StatusCode::CREATED, Json(posting)))
        .map_err(|err| state.reject(correlation_id, err))
}

/// Handler for PUT /api/recruitment/:id.
pub(super) async fn update(
    State(state): State<AppState>,
    identity: Identity,
    IdPath(id): IdPath,
    ApiJson(changes): ApiJson<RecruitmentUpdate>,
) -> ApiResult<Json<RecruitmentPosting>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, recruitment_id = %id, "Updating posting");
    state
        .service()
        .update_posting(&identity, id, changes)
        .await
        .map(Json)
        .map_err(|err| state.reject(correlation_id, err))
}

/// Handler for POST /api/recruitment/:id/candidates.
pub(super) async fn add_candidate(
    State(state): State<AppState>,
    identity: Identity,
    IdPath(recruitment_id): IdPath,
    ApiJson(new): ApiJson<NewCandidate>,
) -> ApiResult<(StatusCode, Json<Candidate>)> {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        recruitment_id = %recruitment_id,
        "Adding candidate"
    );
    state
        .service()
        .add_candidate(&identity, recruitment_id, new)
        .await
        .map(|candidate| (StatusCode::CREATED, Json(candidate)))
        .map_err(|err| state.reject(correlation_id, err))
}

/// Handler for PATCH /api/recruitment/candidates/:id.
pub(super) async fn update_candidate(
    State(state): State<AppState>,
    identity: Identity,
    IdPath(id): IdPath,
    ApiJson(changes): ApiJson<CandidateUpdate>,
) -> ApiResult<Json<Candidate>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, candidate_id = %id, "Updating candidate");
    state
        .service()
        .update_candidate(&identity, id, changes)
        .await
        .map(Json)
        .map_err(|err| state.reject(correlation_id, err))
}
