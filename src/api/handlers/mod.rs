//! HTTP request handlers for the HR API.
//!
//! Every handler opens a correlation id, logs the request with it, calls
//! the matching [`HrService`](crate::services::HrService) operation and
//! hands failures to [`AppState::reject`].

mod absences;
mod contracts;
mod dashboard;
mod departments;
mod employees;
mod payroll;
mod recruitment;

use axum::{
    Json, Router,
    extract::State,
    routing::{get, patch, post, put},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use super::response::ApiErrorResponse;
use super::state::AppState;
use crate::auth::{Capability, Identity};

type ApiResult<T> = Result<T, ApiErrorResponse>;

/// Creates the API router with all endpoints mounted under `/api`.
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(health))
        .route("/auth/me", get(me))
        .route(
            "/employees",
            get(employees::list).post(employees::create),
        )
        .route(
            "/employees/:id",
            get(employees::fetch)
                .put(employees::update)
                .delete(employees::terminate),
        )
        .route(
            "/departments",
            get(departments::list).post(departments::create),
        )
        .route(
            "/departments/:id",
            get(departments::fetch).put(departments::update),
        )
        .route("/payroll", get(payroll::list))
        .route(
            "/payroll/parameters",
            get(payroll::parameters).post(payroll::create_parameter),
        )
        .route("/payroll/calculate", post(payroll::calculate))
        .route("/payroll/:id", get(payroll::fetch))
        .route("/payroll/:id/approve", patch(payroll::approve))
        .route("/payroll/:id/pay", patch(payroll::pay))
        .route("/payroll/:id/cancel", patch(payroll::cancel))
        .route(
            "/contracts",
            get(contracts::list).post(contracts::create),
        )
        .route("/contracts/:id", put(contracts::update))
        .route(
            "/recruitment",
            get(recruitment::list).post(recruitment::create),
        )
        .route(
            "/recruitment/candidates/:id",
            patch(recruitment::update_candidate),
        )
        .route(
            "/recruitment/:id",
            get(recruitment::fetch).put(recruitment::update),
        )
        .route(
            "/recruitment/:id/candidates",
            post(recruitment::add_candidate),
        )
        .route(
            "/absences",
            get(absences::list).post(absences::request),
        )
        .route("/absences/types", get(absences::types))
        .route("/absences/balance/:id", get(absences::balance))
        .route("/absences/:id/approve", patch(absences::approve))
        .route("/absences/:id/reject", patch(absences::reject))
        .route("/absences/:id/cancel", patch(absences::cancel))
        .route("/dashboard/stats", get(dashboard::stats))
        .route("/dashboard/kpi", get(dashboard::kpi));

    Router::new().nest("/api", api).with_state(state)
}

/// Body of `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

/// Handler for GET /api/health; needs no identity.
async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        service: state.settings().name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: state.service().clock().now(),
    })
}

/// Handler for GET /api/auth/me.
async fn me(State(state): State<AppState>, identity: Identity) -> ApiResult<Json<Identity>> {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        user_id = %identity.user_id,
        role = %identity.role,
        "Resolving caller identity"
    );
    identity
        .require(Capability::ViewRecords)
        .map(|_| Json(identity))
        .map_err(|err| state.reject(correlation_id, err))
}
