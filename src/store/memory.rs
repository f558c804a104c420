//! In-memory [`HrStore`] backed by vectors behind one async `RwLock`.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use super::{
    AbsenceFilter, ContractFilter, EmployeeFilter, HrStore, Mutation, PayslipFilter,
    RecruitmentFilter,
};
use crate::clock::Clock;
use crate::config::HrConfig;
use crate::error::{HrError, HrResult};
use crate::models::{
    Absence, AbsenceType, Candidate, Contract, Department, Employee, NewEmployee, Payslip,
    PayrollParameter, RecruitmentPosting, format_employee_number,
};

/// A stored record with an id and an `updated_at` stamp.
trait Record: Clone {
    const ENTITY: &'static str;

    fn id(&self) -> Uuid;

    fn touch(&mut self, at: DateTime<Utc>);
}

macro_rules! record {
    ($ty:ty, $entity:literal) => {
        impl Record for $ty {
            const ENTITY: &'static str = $entity;

            fn id(&self) -> Uuid {
                self.id
            }

            fn touch(&mut self, at: DateTime<Utc>) {
                self.updated_at = at;
            }
        }
    };
}

record!(Employee, "employee");
record!(Department, "department");
record!(PayrollParameter, "payroll parameter");
record!(Payslip, "payslip");
record!(AbsenceType, "absence type");
record!(Absence, "absence");
record!(Contract, "contract");
record!(RecruitmentPosting, "recruitment");
record!(Candidate, "candidate");

fn find<T: Record>(rows: &[T], id: Uuid) -> HrResult<&T> {
    rows.iter()
        .find(|row| row.id() == id)
        .ok_or_else(|| HrError::not_found(T::ENTITY, id))
}

fn position<T: Record>(rows: &[T], id: Uuid) -> HrResult<usize> {
    rows.iter()
        .position(|row| row.id() == id)
        .ok_or_else(|| HrError::not_found(T::ENTITY, id))
}

fn exists<T: Record>(rows: &[T], id: Uuid) -> bool {
    rows.iter().any(|row| row.id() == id)
}

fn require_reference<T: Record>(rows: &[T], id: Uuid) -> HrResult<()> {
    if exists(rows, id) {
        Ok(())
    } else {
        Err(HrError::ForeignKeyViolation {
            entity: T::ENTITY,
            id: id.to_string(),
        })
    }
}

#[derive(Debug, Default)]
struct Tables {
    employees: Vec<Employee>,
    employee_sequence: u64,
    departments: Vec<Department>,
    payroll_parameters: Vec<PayrollParameter>,
    payslips: Vec<Payslip>,
    absence_types: Vec<AbsenceType>,
    absences: Vec<Absence>,
    contracts: Vec<Contract>,
    postings: Vec<RecruitmentPosting>,
    candidates: Vec<Candidate>,
}

impl Tables {
    fn number_taken(&self, number: &str, except: Option<Uuid>) -> bool {
        self.employees
            .iter()
            .any(|e| Some(e.id) != except && e.employee_number.eq_ignore_ascii_case(number))
    }

    /// The next free generated number and the sequence value behind it.
    /// The sequence only advances once the employee is actually inserted.
    fn next_employee_number(&self) -> (u64, String) {
        let mut sequence = self.employee_sequence;
        loop {
            sequence += 1;
            let candidate = format_employee_number(sequence);
            if !self.number_taken(&candidate, None) {
                return (sequence, candidate);
            }
        }
    }

    fn check_employee(&self, employee: &Employee) -> HrResult<()> {
        if self.number_taken(&employee.employee_number, Some(employee.id)) {
            return Err(HrError::Conflict {
                message: format!(
                    "employee number {} is already in use",
                    employee.employee_number
                ),
            });
        }
        if let Some(email) = &employee.email {
            let taken = self.employees.iter().any(|e| {
                e.id != employee.id
                    && e.email
                        .as_deref()
                        .is_some_and(|other| other.eq_ignore_ascii_case(email))
            });
            if taken {
                return Err(HrError::Conflict {
                    message: format!("email {} is already in use", email),
                });
            }
        }
        if let Some(department_id) = employee.department_id {
            require_reference(&self.departments, department_id)?;
        }
        Ok(())
    }

    fn check_department(&self, department: &Department) -> HrResult<()> {
        let taken = self
            .departments
            .iter()
            .any(|d| d.id != department.id && d.code.eq_ignore_ascii_case(&department.code));
        if taken {
            return Err(HrError::Conflict {
                message: format!("department code {} is already in use", department.code),
            });
        }
        if let Some(parent) = department.parent_department_id {
            if parent == department.id {
                return Err(HrError::validation(
                    "parent_department_id",
                    "a department cannot be its own parent",
                ));
            }
            require_reference(&self.departments, parent)?;
        }
        if let Some(manager) = department.manager_id {
            require_reference(&self.employees, manager)?;
        }
        Ok(())
    }

    fn check_payslip(&self, payslip: &Payslip) -> HrResult<()> {
        require_reference(&self.employees, payslip.employee_id)?;
        let duplicate = self
            .payslips
            .iter()
            .any(|p| p.id != payslip.id && p.same_period(payslip));
        if duplicate {
            return Err(HrError::Conflict {
                message: format!(
                    "a payslip already exists for employee {} from {} to {}",
                    payslip.employee_id, payslip.pay_period_start, payslip.pay_period_end
                ),
            });
        }
        Ok(())
    }

    fn check_absence_type(&self, absence_type: &AbsenceType) -> HrResult<()> {
        let taken = self
            .absence_types
            .iter()
            .any(|t| t.id != absence_type.id && t.code.eq_ignore_ascii_case(&absence_type.code));
        if taken {
            return Err(HrError::Conflict {
                message: format!("absence type code {} is already in use", absence_type.code),
            });
        }
        Ok(())
    }

    fn check_absence(&self, absence: &Absence) -> HrResult<()> {
        require_reference(&self.employees, absence.employee_id)?;
        require_reference(&self.absence_types, absence.absence_type_id)
    }

    fn check_contract(&self, contract: &Contract) -> HrResult<()> {
        require_reference(&self.employees, contract.employee_id)
    }

    fn check_posting(&self, posting: &RecruitmentPosting) -> HrResult<()> {
        match posting.department_id {
            Some(department_id) => require_reference(&self.departments, department_id),
            None => Ok(()),
        }
    }

    fn check_candidate(&self, candidate: &Candidate) -> HrResult<()> {
        require_reference(&self.postings, candidate.recruitment_id)
    }
}

/// Applies `mutation` to a copy of row `id`, validates the copy against the
/// other tables, then writes it back. The row is untouched on any error.
fn mutate<T, S, C>(
    tables: &mut Tables,
    select: S,
    check: C,
    id: Uuid,
    mutation: Mutation<T>,
    now: DateTime<Utc>,
) -> HrResult<T>
where
    T: Record,
    S: Fn(&mut Tables) -> &mut Vec<T>,
    C: Fn(&Tables, &T) -> HrResult<()>,
{
    let index = position(select(&mut *tables).as_slice(), id)?;
    let mut updated = select(&mut *tables)[index].clone();
    mutation(&mut updated)?;
    check(&*tables, &updated)?;
    updated.touch(now);
    select(&mut *tables)[index] = updated.clone();
    Ok(updated)
}

/// An [`HrStore`] holding every table in memory.
///
/// All writes take the single write lock, so check-then-write sequences
/// (number generation, uniqueness checks, status transitions) cannot
/// interleave.
pub struct MemoryStore {
    tables: RwLock<Tables>,
    clock: Arc<dyn Clock>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
            clock,
        }
    }

    /// Creates a store holding the absence types and payroll parameters from
    /// `config`.
    pub fn seeded(clock: Arc<dyn Clock>, config: &HrConfig) -> HrResult<Self> {
        let now = clock.now();
        let mut tables = Tables::default();

        for new in config.absence_types() {
            let absence_type = new.clone().into_absence_type(Uuid::new_v4(), now);
            tables.check_absence_type(&absence_type)?;
            tables.absence_types.push(absence_type);
        }
        for new in config.payroll_parameters() {
            tables
                .payroll_parameters
                .push(new.clone().into_parameter(Uuid::new_v4(), now));
        }

        debug!(
            absence_types = tables.absence_types.len(),
            payroll_parameters = tables.payroll_parameters.len(),
            "Seeded memory store"
        );

        Ok(Self {
            tables: RwLock::new(tables),
            clock,
        })
    }
}

#[async_trait]
impl HrStore for MemoryStore {
    async fn create_employee(&self, new: NewEmployee) -> HrResult<Employee> {
        let mut tables = self.tables.write().await;
        let (sequence, number) = match new.employee_number.clone() {
            Some(number) => (None, number.trim().to_string()),
            None => {
                let (sequence, number) = tables.next_employee_number();
                (Some(sequence), number)
            }
        };
        let employee = new.into_employee(Uuid::new_v4(), number, self.clock.now());
        tables.check_employee(&employee)?;
        if let Some(sequence) = sequence {
            tables.employee_sequence = sequence;
        }
        tables.employees.push(employee.clone());
        Ok(employee)
    }

    async fn get_employee(&self, id: Uuid) -> HrResult<Employee> {
        let tables = self.tables.read().await;
        find(&tables.employees, id).cloned()
    }

    async fn list_employees(&self, filter: &EmployeeFilter) -> HrResult<Vec<Employee>> {
        let tables = self.tables.read().await;
        Ok(tables
            .employees
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect())
    }

    async fn update_employee(&self, id: Uuid, mutation: Mutation<Employee>) -> HrResult<Employee> {
        let mut tables = self.tables.write().await;
        mutate(
            &mut tables,
            |t| &mut t.employees,
            Tables::check_employee,
            id,
            mutation,
            self.clock.now(),
        )
    }

    async fn insert_department(&self, department: Department) -> HrResult<Department> {
        let mut tables = self.tables.write().await;
        tables.check_department(&department)?;
        tables.departments.push(department.clone());
        Ok(department)
    }

    async fn get_department(&self, id: Uuid) -> HrResult<Department> {
        let tables = self.tables.read().await;
        find(&tables.departments, id).cloned()
    }

    async fn list_departments(&self) -> HrResult<Vec<Department>> {
        Ok(self.tables.read().await.departments.clone())
    }

    async fn update_department(
        &self,
        id: Uuid,
        mutation: Mutation<Department>,
    ) -> HrResult<Department> {
        let mut tables = self.tables.write().await;
        mutate(
            &mut tables,
            |t| &mut t.departments,
            Tables::check_department,
            id,
            mutation,
            self.clock.now(),
        )
    }

    async fn insert_payroll_parameter(
        &self,
        parameter: PayrollParameter,
    ) -> HrResult<PayrollParameter> {
        let mut tables = self.tables.write().await;
        tables.payroll_parameters.push(parameter.clone());
        Ok(parameter)
    }

    async fn list_payroll_parameters(&self) -> HrResult<Vec<PayrollParameter>> {
        Ok(self.tables.read().await.payroll_parameters.clone())
    }

    async fn insert_payslip(&self, payslip: Payslip) -> HrResult<Payslip> {
        let mut tables = self.tables.write().await;
        tables.check_payslip(&payslip)?;
        tables.payslips.push(payslip.clone());
        Ok(payslip)
    }

    async fn get_payslip(&self, id: Uuid) -> HrResult<Payslip> {
        let tables = self.tables.read().await;
        find(&tables.payslips, id).cloned()
    }

    async fn list_payslips(&self, filter: &PayslipFilter) -> HrResult<Vec<Payslip>> {
        let tables = self.tables.read().await;
        Ok(tables
            .payslips
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect())
    }

    async fn update_payslip(&self, id: Uuid, mutation: Mutation<Payslip>) -> HrResult<Payslip> {
        let mut tables = self.tables.write().await;
        mutate(
            &mut tables,
            |t| &mut t.payslips,
            Tables::check_payslip,
            id,
            mutation,
            self.clock.now(),
        )
    }

    async fn insert_absence_type(&self, absence_type: AbsenceType) -> HrResult<AbsenceType> {
        let mut tables = self.tables.write().await;
        tables.check_absence_type(&absence_type)?;
        tables.absence_types.push(absence_type.clone());
        Ok(absence_type)
    }

    async fn list_absence_types(&self) -> HrResult<Vec<AbsenceType>> {
        Ok(self.tables.read().await.absence_types.clone())
    }

    async fn insert_absence(&self, absence: Absence) -> HrResult<Absence> {
        let mut tables = self.tables.write().await;
        tables.check_absence(&absence)?;
        tables.absences.push(absence.clone());
        Ok(absence)
    }

    async fn get_absence(&self, id: Uuid) -> HrResult<Absence> {
        let tables = self.tables.read().await;
        find(&tables.absences, id).cloned()
    }

    async fn list_absences(&self, filter: &AbsenceFilter) -> HrResult<Vec<Absence>> {
        let tables = self.tables.read().await;
        Ok(tables
            .absences
            .iter()
            .filter(|a| filter.matches(a))
            .cloned()
            .collect())
    }

    async fn update_absence(&self, id: Uuid, mutation: Mutation<Absence>) -> HrResult<Absence> {
        let mut tables = self.tables.write().await;
        mutate(
            &mut tables,
            |t| &mut t.absences,
            Tables::check_absence,
            id,
            mutation,
            self.clock.now(),
        )
    }

    async fn insert_contract(&self, contract: Contract) -> HrResult<Contract> {
        let mut tables = self.tables.write().await;
        tables.check_contract(&contract)?;
        tables.contracts.push(contract.clone());
        Ok(contract)
    }

    async fn get_contract(&self, id: Uuid) -> HrResult<Contract> {
        let tables = self.tables.read().await;
        find(&tables.contracts, id).cloned()
    }

    async fn list_contracts(&self, filter: &ContractFilter) -> HrResult<Vec<Contract>> {
        let tables = self.tables.read().await;
        Ok(tables
            .contracts
            .iter()
            .filter(|c| filter.matches(c))
            .cloned()
            .collect())
    }

    async fn update_contract(&self, id: Uuid, mutation: Mutation<Contract>) -> HrResult<Contract> {
        let mut tables = self.tables.write().await;
        mutate(
            &mut tables,
            |t| &mut t.contracts,
            Tables::check_contract,
            id,
            mutation,
            self.clock.now(),
        )
    }

    async fn insert_posting(&self, posting: RecruitmentPosting) -> HrResult<RecruitmentPosting> {
        let mut tables = self.tables.write().await;
        tables.check_posting(&posting)?;
        tables.postings.push(posting.clone());
        Ok(posting)
    }

    async fn get_posting(&self, id: Uuid) -> HrResult<RecruitmentPosting> {
        let tables = self.tables.read().await;
        find(&tables.postings, id).cloned()
    }

    async fn list_postings(&self, filter: &RecruitmentFilter) -> HrResult<Vec<RecruitmentPosting>> {
        let tables = self.tables.read().await;
        Ok(tables
            .postings
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect())
    }

    async fn update_posting(
        &self,
        id: Uuid,
        mutation: Mutation<RecruitmentPosting>,
    ) -> HrResult<RecruitmentPosting> {
        let mut tables = self.tables.write().await;
        mutate(
            &mut tables,
            |t| &mut t.postings,
            Tables::check_posting,
            id,
            mutation,
            self.clock.now(),
        )
    }

    async fn insert_candidate(&self, candidate: Candidate) -> HrResult<Candidate> {
        let mut tables = self.tables.write().await;
        tables.check_candidate(&candidate)?;
        tables.candidates.push(candidate.clone());
        Ok(candidate)
    }

    async fn list_candidates(&self, recruitment_id: Option<Uuid>) -> HrResult<Vec<Candidate>> {
        let tables = self.tables.read().await;
        Ok(tables
            .candidates
            .iter()
            .filter(|c| recruitment_id.is_none_or(|id| id == c.recruitment_id))
            .cloned()
            .collect())
    }

    async fn update_candidate(
        &self,
        id: Uuid,
        mutation: Mutation<Candidate>,
    ) -> HrResult<Candidate> {
        let mut tables = self.tables.write().await;
        mutate(
            &mut tables,
            |t| &mut t.candidates,
            Tables::check_candidate,
            id,
            mutation,
            self.clock.now(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::config::ConfigLoader;
    use crate::models::{NewDepartment, PayslipStatus};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn store() -> MemoryStore {
        MemoryStore::new(Arc::new(FixedClock::on(date(2026, 3, 15))))
    }

    fn new_employee(first: &str, email: Option<&str>) -> NewEmployee {
        NewEmployee {
            first_name: first.to_string(),
            last_name: "Test".to_string(),
            email: email.map(str::to_string),
            hire_date: date(2024, 1, 1),
            base_salary: Some(Decimal::from(2000)),
            ..Default::default()
        }
    }

    fn payslip_for(employee_id: Uuid, status: PayslipStatus) -> Payslip {
        let now = Utc::now();
        Payslip {
            id: Uuid::new_v4(),
            employee_id,
            pay_period_start: date(2026, 3, 1),
            pay_period_end: date(2026, 3, 31),
            pay_date: date(2026, 3, 31),
            base_salary: Decimal::from(2000),
            overtime_hours: Decimal::ZERO,
            overtime_amount: Decimal::ZERO,
            bonuses: Decimal::ZERO,
            allowances: Decimal::ZERO,
            gross_salary: Decimal::from(2000),
            income_tax: Decimal::ZERO,
            social_security: Decimal::ZERO,
            retirement_contribution: Decimal::ZERO,
            health_insurance: Decimal::ZERO,
            total_deductions: Decimal::ZERO,
            net_salary: Decimal::from(2000),
            status,
            approved_by: None,
            approved_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_employee_numbers_are_sequential() {
        let store = store();

        let first = store.create_employee(new_employee("A", None)).await.unwrap();
        let second = store.create_employee(new_employee("B", None)).await.unwrap();

        assert_eq!(first.employee_number, "EMP001");
        assert_eq!(second.employee_number, "EMP002");
    }

    #[tokio::test]
    async fn test_generated_number_skips_taken_numbers() {
        let store = store();
        let mut explicit = new_employee("A", None);
        explicit.employee_number = Some("EMP001".to_string());
        store.create_employee(explicit).await.unwrap();

        let generated = store.create_employee(new_employee("B", None)).await.unwrap();

        assert_eq!(generated.employee_number, "EMP002");
    }

    #[tokio::test]
    async fn test_rejected_creation_does_not_consume_a_number() {
        let store = store();
        store
            .create_employee(new_employee("A", Some("a@example.com")))
            .await
            .unwrap();

        let duplicate = store
            .create_employee(new_employee("B", Some("A@example.com")))
            .await;
        assert!(matches!(duplicate, Err(HrError::Conflict { .. })));

        let next = store.create_employee(new_employee("C", None)).await.unwrap();
        assert_eq!(next.employee_number, "EMP002");
    }

    #[tokio::test]
    async fn test_concurrent_creations_get_distinct_numbers() {
        let store = Arc::new(store());
        let mut handles = Vec::new();
        for i in 0..20 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store
                    .create_employee(new_employee(&format!("E{}", i), None))
                    .await
                    .unwrap()
                    .employee_number
            }));
        }

        let mut numbers = Vec::new();
        for handle in handles {
            numbers.push(handle.await.unwrap());
        }
        numbers.sort();
        numbers.dedup();
        assert_eq!(numbers.len(), 20);
    }

    #[tokio::test]
    async fn test_duplicate_explicit_number_conflicts() {
        let store = store();
        let mut first = new_employee("A", None);
        first.employee_number = Some("X-1".to_string());
        store.create_employee(first.clone()).await.unwrap();

        let result = store.create_employee(first).await;

        assert!(matches!(result, Err(HrError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let store = store();
        store
            .create_employee(new_employee("A", Some("a@example.com")))
            .await
            .unwrap();

        let result = store
            .create_employee(new_employee("B", Some("A@example.com")))
            .await;

        assert!(matches!(result, Err(HrError::Conflict { .. })));
        assert_eq!(
            store.list_employees(&EmployeeFilter::default()).await.unwrap().len(),
            1
        );
    }

    #[tokio::test]
    async fn test_unknown_department_is_rejected() {
        let store = store();
        let mut new = new_employee("A", None);
        new.department_id = Some(Uuid::new_v4());

        let result = store.create_employee(new).await;

        assert!(matches!(
            result,
            Err(HrError::ForeignKeyViolation { entity: "department", .. })
        ));
    }

    #[tokio::test]
    async fn test_failed_mutation_leaves_row_untouched() {
        let store = store();
        let employee = store.create_employee(new_employee("A", None)).await.unwrap();

        let result = store
            .update_employee(
                employee.id,
                Box::new(|e| {
                    e.first_name = "Changed".to_string();
                    Err(HrError::validation("first_name", "rejected"))
                }),
            )
            .await;

        assert!(result.is_err());
        let stored = store.get_employee(employee.id).await.unwrap();
        assert_eq!(stored.first_name, "A");
    }

    #[tokio::test]
    async fn test_update_stamps_updated_at() {
        let clock = FixedClock::on(date(2026, 3, 15));
        let store = MemoryStore::new(Arc::new(clock));
        let employee = store.create_employee(new_employee("A", None)).await.unwrap();

        let updated = store
            .update_employee(
                employee.id,
                Box::new(|e| {
                    e.position = Some("Analyst".to_string());
                    Ok(())
                }),
            )
            .await
            .unwrap();

        assert_eq!(updated.updated_at, clock.now());
        assert_eq!(updated.position.as_deref(), Some("Analyst"));
    }

    #[tokio::test]
    async fn test_missing_record_is_not_found() {
        let store = store();
        let result = store.get_payslip(Uuid::new_v4()).await;
        assert!(matches!(result, Err(HrError::NotFound { entity: "payslip", .. })));
    }

    #[tokio::test]
    async fn test_payslip_period_is_unique() {
        let store = store();
        let employee = store.create_employee(new_employee("A", None)).await.unwrap();
        store
            .insert_payslip(payslip_for(employee.id, PayslipStatus::Calculated))
            .await
            .unwrap();

        let result = store
            .insert_payslip(payslip_for(employee.id, PayslipStatus::Calculated))
            .await;

        assert!(matches!(result, Err(HrError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_department_code_is_unique() {
        let store = store();
        let now = Utc::now();
        let new = NewDepartment {
            name: "Finance".to_string(),
            code: "FIN".to_string(),
            description: None,
            manager_id: None,
            parent_department_id: None,
            budget: None,
        };
        store
            .insert_department(new.clone().into_department(Uuid::new_v4(), now))
            .await
            .unwrap();

        let result = store
            .insert_department(new.into_department(Uuid::new_v4(), now))
            .await;

        assert!(matches!(result, Err(HrError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_filters_narrow_lists() {
        let store = store();
        store
            .create_employee(new_employee("Alice", Some("alice@example.com")))
            .await
            .unwrap();
        store
            .create_employee(new_employee("Bob", None))
            .await
            .unwrap();

        let filter = EmployeeFilter {
            search: Some("ALI".to_string()),
            ..Default::default()
        };
        let found = store.list_employees(&filter).await.unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].first_name, "Alice");
    }

    #[tokio::test]
    async fn test_seeded_store_holds_config_records() {
        let loader = ConfigLoader::load("./config/default").unwrap();
        let store =
            MemoryStore::seeded(Arc::new(FixedClock::on(date(2026, 1, 1))), loader.config())
                .unwrap();

        let types = store.list_absence_types().await.unwrap();
        let params = store.list_payroll_parameters().await.unwrap();

        assert_eq!(types.len(), loader.config().absence_types().len());
        assert!(params.iter().any(|p| p.code == "TRANSPORT"));
    }
}
