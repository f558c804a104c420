use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use super::{HrService, SortOrder};
use crate::auth::{Capability, Identity};
use crate::error::HrResult;
use crate::models::{Employee, EmployeeUpdate, NewEmployee, Page, PageRequest};
use crate::store::EmployeeFilter;

/// Column an employee list can be sorted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeSort {
    #[default]
    CreatedAt,
    FirstName,
    LastName,
    HireDate,
    BaseSalary,
}

/// A filtered, sorted and paged employee list request.
#[derive(Debug, Clone, Default)]
pub struct EmployeeQuery {
    pub filter: EmployeeFilter,
    pub sort: EmployeeSort,
    pub order: SortOrder,
    pub page: PageRequest,
}

impl HrService {
    pub async fn list_employees(
        &self,
        identity: &Identity,
        query: EmployeeQuery,
    ) -> HrResult<Page<Employee>> {
        identity.require(Capability::ViewRecords)?;
        let mut employees = self.store.list_employees(&query.filter).await?;
        employees.sort_by(|a, b| {
            let ordering = match query.sort {
                EmployeeSort::CreatedAt => a.created_at.cmp(&b.created_at),
                EmployeeSort::FirstName => a.first_name.cmp(&b.first_name),
                EmployeeSort::LastName => a.last_name.cmp(&b.last_name),
                EmployeeSort::HireDate => a.hire_date.cmp(&b.hire_date),
                EmployeeSort::BaseSalary => a.base_salary.cmp(&b.base_salary),
            };
            query.order.apply(ordering)
        });
        Ok(query.page.slice(employees))
    }

    pub async fn get_employee(&self, identity: &Identity, id: Uuid) -> HrResult<Employee> {
        identity.require(Capability::ViewRecords)?;
        self.store.get_employee(id).await
    }

    pub async fn create_employee(
        &self,
        identity: &Identity,
        new: NewEmployee,
    ) -> HrResult<Employee> {
        identity.require(Capability::ManageEmployees)?;
        new.validate()?;
        let employee = self.store.create_employee(new).await?;
        info!(
            employee_id = %employee.id,
            employee_number = %employee.employee_number,
            "Employee created"
        );
        Ok(employee)
    }

    /// Applies a partial update; absent fields keep their stored value.
    pub async fn update_employee(
        &self,
        identity: &Identity,
        id: Uuid,
        changes: EmployeeUpdate,
    ) -> HrResult<Employee> {
        identity.require(Capability::ManageEmployees)?;
        changes.validate()?;
        let changes = changes.normalized();
        let today = self.clock.today();
        self.store
            .update_employee(
                id,
                Box::new(move |employee| {
                    employee.apply(changes, today);
                    Ok(())
                }),
            )
            .await
    }

    /// Soft-deletes the employee as of today.
    pub async fn terminate_employee(&self, identity: &Identity, id: Uuid) -> HrResult<Employee> {
        identity.require(Capability::ManageEmployees)?;
        let today = self.clock.today();
        let employee = self
            .store
            .update_employee(
                id,
                Box::new(move |employee| {
                    employee.terminate(today);
                    Ok(())
                }),
            )
            .await?;
        info!(employee_id = %id, termination_date = %today, "Employee terminated");
        Ok(employee)
    }
}
