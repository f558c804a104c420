use axum::{Json, extract::State};
use tracing::info;
use uuid::Uuid;

use super::ApiResult;
use crate::api::state::AppState;
use crate::auth::Identity;
use crate::reports::{DashboardStats, Kpis};

/// Handler for GET /api/dashboard/stats.
pub(super) async fn stats(
    State(state): State<AppState>,
    identity: Identity,
) -> ApiResult<Json<DashboardStats>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, user_id = %identity.user_id, "Building dashboard");
    state
        .service()
        .dashboard_stats(&identity)
        .await
        .map(Json)
        .map_err(|err| state.reject(correlation_id, err))
}

/// Handler for GET /api/dashboard/kpi.
pub(super) async fn kpi(
    State(state): State<AppState>,
    identity: Identity,
) -> ApiResult<Json<Kpis>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, user_id = %identity.user_id, "Computing KPIs");
    state
        .service()
        .kpis(&identity)
        .await
        .map(Json)
        .map_err(|err| state.reject(correlation_id, err))
}
