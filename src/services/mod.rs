//! Use cases behind the HTTP routes.
//!
//! [`HrService`] holds the store and the clock; its operations are split by
//! area across the submodules. Every operation takes the caller's
//! [`Identity`](crate::auth::Identity) and checks the capability it needs
//! before touching the store.

mod absences;
mod contracts;
mod dashboard;
mod departments;
mod employees;
mod payroll;
mod recruitment;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::store::HrStore;

pub use employees::{EmployeeQuery, EmployeeSort};
pub use payroll::ENGINE_VERSION;

/// Direction of a sorted list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Applies the direction to an ascending comparison.
    pub fn apply(self, ordering: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

/// Entry point for every HR operation.
#[derive(Clone)]
pub struct HrService {
    store: Arc<dyn HrStore>,
    clock: Arc<dyn Clock>,
}

impl HrService {
    pub fn new(store: Arc<dyn HrStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub fn store(&self) -> &dyn HrStore {
        self.store.as_ref()
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }
}
