//! Application state for the HR API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tracing::{error, warn};
use uuid::Uuid;

use super::response::ApiErrorResponse;
use crate::clock::Clock;
use crate::config::AppSettings;
use crate::error::HrError;
use crate::services::HrService;
use crate::store::HrStore;

/// Shared application state.
///
/// Holds the service every handler delegates to and the settings that
/// shape error reporting.
#[derive(Clone)]
pub struct AppState {
    service: HrService,
    settings: Arc<AppSettings>,
}

impl AppState {
    /// Creates the state over a store and a clock.
    pub fn new(store: Arc<dyn HrStore>, clock: Arc<dyn Clock>, settings: AppSettings) -> Self {
        Self {
            service: HrService::new(store, clock),
            settings: Arc::new(settings),
        }
    }

    pub fn service(&self) -> &HrService {
        &self.service
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// Logs a failed operation and turns it into a response.
    ///
    /// Internal failures are logged as errors with their full message; in
    /// production their body carries only a generic message.
    pub fn reject(&self, correlation_id: Uuid, err: HrError) -> ApiErrorResponse {
        let response = ApiErrorResponse::from(err);
        if response.is_internal() {
            error!(
                correlation_id = %correlation_id,
                code = %response.error.code,
                error = %response.error.details.as_deref().unwrap_or(&response.error.message),
                "Request failed"
            );
            if self.settings.environment.is_production() {
                return response.redacted();
            }
        } else {
            warn!(
                correlation_id = %correlation_id,
                status = response.status.as_u16(),
                code = %response.error.code,
                error = %response.error.message,
                "Request rejected"
            );
        }
        response
    }
}
