//! Roles, capabilities and the caller identity.
//!
//! Tokens are verified upstream; the engine only sees the resulting user id
//! and role. Every operation names the [`Capability`] it needs and the
//! caller's [`Role`] decides whether it holds it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{HrError, HrResult};

/// A user role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    HrManager,
    Manager,
    Employee,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::HrManager => "hr_manager",
            Role::Manager => "manager",
            Role::Employee => "employee",
        }
    }

    /// Returns true if this role holds `capability`.
    ///
    /// # Example
    ///
    /// ```
    /// use hr_engine::auth::{Capability, Role};
    ///
    /// assert!(Role::HrManager.allows(Capability::ApprovePayroll));
    /// assert!(Role::Manager.allows(Capability::DecideAbsences));
    /// assert!(!Role::Employee.allows(Capability::ManageEmployees));
    /// ```
    pub fn allows(self, capability: Capability) -> bool {
        use Capability::*;
        match self {
            Role::Admin | Role::HrManager => true,
            Role::Manager => matches!(
                capability,
                ViewRecords | ViewReports | RequestAbsence | DecideAbsences | ManageRecruitment
            ),
            Role::Employee => matches!(capability, ViewRecords | RequestAbsence),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = HrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "admin" => Ok(Role::Admin),
            "hr_manager" => Ok(Role::HrManager),
            "manager" => Ok(Role::Manager),
            "employee" => Ok(Role::Employee),
            other => Err(HrError::Unauthorized {
                message: format!("unknown role '{}'", other),
            }),
        }
    }
}

/// Something an operation requires the caller to be allowed to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    ViewRecords,
    ViewReports,
    ManageEmployees,
    ManageDepartments,
    ManagePayroll,
    ApprovePayroll,
    ManageContracts,
    ManageRecruitment,
    RequestAbsence,
    DecideAbsences,
}

impl Capability {
    pub fn as_str(self) -> &'static str {
        match self {
            Capability::ViewRecords => "view records",
            Capability::ViewReports => "view reports",
            Capability::ManageEmployees => "manage employees",
            Capability::ManageDepartments => "manage departments",
            Capability::ManagePayroll => "manage payroll",
            Capability::ApprovePayroll => "approve payroll",
            Capability::ManageContracts => "manage contracts",
            Capability::ManageRecruitment => "manage recruitment",
            Capability::RequestAbsence => "request absences",
            Capability::DecideAbsences => "decide absences",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: Uuid,
    pub role: Role,
}

impl Identity {
    pub fn new(user_id: Uuid, role: Role) -> Self {
        Self { user_id, role }
    }

    /// Fails with [`HrError::Forbidden`] unless the role holds `capability`.
    pub fn require(&self, capability: Capability) -> HrResult<()> {
        if self.role.allows(capability) {
            Ok(())
        } else {
            Err(HrError::Forbidden {
                role: self.role.to_string(),
                capability: capability.to_string(),
            })
        }
    }
}
