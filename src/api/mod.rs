//! HTTP API for the HR backend.
//!
//! All routes live under `/api`. Callers are identified by the
//! `x-user-id` and `x-user-role` headers set by the upstream gateway.

mod extract;
mod handlers;
mod request;
mod response;
mod state;

pub use extract::{ApiJson, ApiQuery, IdPath, USER_ID_HEADER, USER_ROLE_HEADER};
pub use handlers::{HealthStatus, create_router};
pub use request::{
    AbsenceListQuery, CalculatePayslipRequest, ContractListQuery, EmployeeListQuery,
    PayrollListQuery, RecruitmentListQuery,
};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
