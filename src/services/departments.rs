use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use super::HrService;
use crate::auth::{Capability, Identity};
use crate::error::HrResult;
use crate::models::{
    Department, DepartmentDetail, DepartmentSummary, DepartmentUpdate, NewDepartment,
};
use crate::store::EmployeeFilter;

impl HrService {
    /// Active departments by name, each with its active headcount and the
    /// sum of those employees' base salaries.
    pub async fn list_departments(&self, identity: &Identity) -> HrResult<Vec<DepartmentSummary>> {
        identity.require(Capability::ViewRecords)?;
        let departments = self.store.list_departments().await?;
        let employees = self.store.list_employees(&EmployeeFilter::default()).await?;

        let mut summaries: Vec<DepartmentSummary> = departments
            .into_iter()
            .filter(|d| d.is_active)
            .map(|department| {
                let members: Vec<_> = employees
                    .iter()
                    .filter(|e| e.is_active() && e.department_id == Some(department.id))
                    .collect();
                DepartmentSummary {
                    employee_count: members.len() as u64,
                    total_salary_budget: members.iter().map(|e| e.base_salary).sum::<Decimal>(),
                    department,
                }
            })
            .collect();
        summaries.sort_by(|a, b| a.department.name.cmp(&b.department.name));
        Ok(summaries)
    }

    pub async fn get_department(&self, identity: &Identity, id: Uuid) -> HrResult<DepartmentDetail> {
        identity.require(Capability::ViewRecords)?;
        let department = self.store.get_department(id).await?;
        let filter = EmployeeFilter {
            department_id: Some(id),
            ..Default::default()
        };
        let mut employees = self.store.list_employees(&filter).await?;
        employees.sort_by(|a, b| {
            (&a.last_name, &a.first_name).cmp(&(&b.last_name, &b.first_name))
        });
        Ok(DepartmentDetail {
            department,
            employees,
        })
    }

    pub async fn create_department(
        &self,
        identity: &Identity,
        new: NewDepartment,
    ) -> HrResult<Department> {
        identity.require(Capability::ManageDepartments)?;
        new.validate()?;
        let department = new.into_department(Uuid::new_v4(), self.clock.now());
        let department = self.store.insert_department(department).await?;
        info!(department_id = %department.id, code = %department.code, "Department created");
        Ok(department)
    }

    pub async fn update_department(
        &self,
        identity: &Identity,
        id: Uuid,
        changes: DepartmentUpdate,
    ) -> HrResult<Department> {
        identity.require(Capability::ManageDepartments)?;
        changes.validate()?;
        self.store
            .update_department(
                id,
                Box::new(move |department| {
                    department.apply(changes);
                    Ok(())
                }),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HrError;
    use crate::models::{EmployeeUpdate, NewEmployee};
    use crate::services::testing::{admin, date, new_employee, service_on, staff};

    fn finance() -> NewDepartment {
        NewDepartment {
            name: "Finance".to_string(),
            code: "FIN".to_string(),
            ..Default::default()
        }
    }

    fn member(department_id: Uuid, first: &str, salary: i64) -> NewEmployee {
        NewEmployee {
            department_id: Some(department_id),
            ..new_employee(first, "Test", salary)
        }
    }

    #[tokio::test]
    async fn test_summary_counts_active_members_only() {
        let service = service_on(date(2026, 3, 15));
        let department = service.create_department(&admin(), finance()).await.unwrap();
        service
            .create_employee(&admin(), member(department.id, "Amal", 2000))
            .await
            .unwrap();
        let leaving = service
            .create_employee(&admin(), member(department.id, "Sami", 3000))
            .await
            .unwrap();
        service.terminate_employee(&admin(), leaving.id).await.unwrap();

        let summaries = service.list_departments(&staff()).await.unwrap();

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].employee_count, 1);
        assert_eq!(summaries[0].total_salary_budget, Decimal::from(2000));
    }

    #[tokio::test]
    async fn test_inactive_departments_are_not_listed() {
        let service = service_on(date(2026, 3, 15));
        let department = service.create_department(&admin(), finance()).await.unwrap();
        let changes = DepartmentUpdate {
            is_active: Some(false),
            ..Default::default()
        };
        service
            .update_department(&admin(), department.id, changes)
            .await
            .unwrap();

        assert!(service.list_departments(&staff()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_detail_lists_members() {
        let service = service_on(date(2026, 3, 15));
        let department = service.create_department(&admin(), finance()).await.unwrap();
        let amal = service
            .create_employee(&admin(), new_employee("Amal", "Test", 2000))
            .await
            .unwrap();
        let changes = EmployeeUpdate {
            department_id: Some(department.id),
            ..Default::default()
        };
        service.update_employee(&admin(), amal.id, changes).await.unwrap();

        let detail = service.get_department(&staff(), department.id).await.unwrap();

        assert_eq!(detail.department.code, "FIN");
        assert_eq!(detail.employees.len(), 1);
        assert_eq!(detail.employees[0].id, amal.id);
    }

    #[tokio::test]
    async fn test_update_keeps_absent_fields() {
        let service = service_on(date(2026, 3, 15));
        let department = service.create_department(&admin(), finance()).await.unwrap();
        let changes = DepartmentUpdate {
            description: Some("Accounts and treasury".to_string()),
            ..Default::default()
        };

        let updated = service
            .update_department(&admin(), department.id, changes)
            .await
            .unwrap();

        assert_eq!(updated.name, "Finance");
        assert_eq!(updated.description.as_deref(), Some("Accounts and treasury"));
    }

    #[tokio::test]
    async fn test_duplicate_code_conflicts() {
        let service = service_on(date(2026, 3, 15));
        service.create_department(&admin(), finance()).await.unwrap();
        let result = service.create_department(&admin(), finance()).await;

        assert!(matches!(result, Err(HrError::Conflict { .. })));
    }
}
