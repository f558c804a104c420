use axum::{Json, extract::State, http::StatusCode};
use tracing::info;
use uuid::Uuid;

use super::ApiResult;
use crate::api::extract::{ApiJson, ApiQuery, IdPath};
use crate::api::request::{CalculatePayslipRequest, PayrollListQuery};
use crate::api::state::AppState;
use crate::auth::Identity;
use crate::models::{CalculationResult, NewPayrollParameter, Page, PayrollParameter, Payslip};

/// Handler for GET /api/payroll.
pub(super) async fn list(
    State(state): State<AppState>,
    identity: Identity,
    ApiQuery(query): ApiQuery<PayrollListQuery>,
) -> ApiResult<Json<Page<Payslip>>> {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee_id = ?query.employee_id,
        "Listing payslips"
    );
    let result = match query.into_filter() {
        Ok((filter, page)) => state.service().list_payslips(&identity, filter, page).await,
        Err(err) => Err(err),
    };
    result
        .map(Json)
        .map_err(|err| state.reject(correlation_id, err))
}

/// Handler for GET /api/payroll/:id.
pub(super) async fn fetch(
    State(state): State<AppState>,
    identity: Identity,
    IdPath(id): IdPath,
) -> ApiResult<Json<Payslip>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, payslip_id = %id, "Fetching payslip");
    state
        .service()
        .get_payslip(&identity, id)
        .await
        .map(Json)
        .map_err(|err| state.reject(correlation_id, err))
}

/// Handler for GET /api/payroll/parameters.
pub(super) async fn parameters(
    State(state): State<AppState>,
    identity: Identity,
) -> ApiResult<Json<Vec<PayrollParameter>>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Listing payroll parameters");
    state
        .service()
        .list_payroll_parameters(&identity)
        .await
        .map(Json)
        .map_err(|err| state.reject(correlation_id, err))
}

/// Handler for POST /api/payroll/parameters.
pub(super) async fn create_parameter(
    State(state): State<AppState>,
    identity: Identity,
    ApiJson(new): ApiJson<NewPayrollParameter>,
) -> ApiResult<(StatusCode, Json<PayrollParameter>)> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, code = %new.code, "Creating payroll parameter");
    state
        .service()
        .create_payroll_parameter(&identity, new)
        .await
        .map(|parameter| (StatusCode::CREATED, Json(parameter)))
        .map_err(|err| state.reject(correlation_id, err))
}

/// Handler for POST /api/payroll/calculate.
///
/// Runs the payroll engine for one employee and period and returns the
/// stored payslip with its audit trace.
pub(super) async fn calculate(
    State(state): State<AppState>,
    identity: Identity,
    ApiJson(request): ApiJson<CalculatePayslipRequest>,
) -> ApiResult<(StatusCode, Json<CalculationResult>)> {
    let correlation_id = Uuid::new_v4();
    let (employee_id, input) = request.into_input();
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        period_start = %input.pay_period_start,
        period_end = %input.pay_period_end,
        "Processing payroll calculation"
    );
    state
        .service()
        .calculate_payslip(&identity, employee_id, input)
        .await
        .map(|result| (StatusCode::CREATED, Json(result)))
        .map_err(|err| state.reject(correlation_id, err))
}

/// Handler for PATCH /api/payroll/:id/approve.
pub(super) async fn approve(
    State(state): State<AppState>,
    identity: Identity,
    IdPath(id): IdPath,
) -> ApiResult<Json<Payslip>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, payslip_id = %id, "Approving payslip");
    state
        .service()
        .approve_payslip(&identity, id)
        .await
        .map(Json)
        .map_err(|err| state.reject(correlation_id, err))
}

/// Handler for PATCH /api/payroll/:id/pay.
pub(super) async fn pay(
    State(state): State<AppState>,
    identity: Identity,
    IdPath(id): IdPath,
) -> ApiResult<Json<Payslip>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, payslip_id = %id, "Paying payslip");
    state
        .service()
        .pay_payslip(&identity, id)
        .await
        .map(Json)
        .map_err(|err| state.reject(correlation_id, err))
}

/// Handler for PATCH /api/payroll/:id/cancel.
pub(super) async fn cancel(
    State(state): State<AppState>,
    identity: Identity,
    IdPath(id): IdPath,
) -> ApiResult<Json<Payslip>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, payslip_id = %id, "Cancelling payslip");
    state
        .service()
        .cancel_payslip(&identity, id)
        .await
        .map(Json)
        .map_err(|err| state.reject(correlation_id, err))
}
