use tracing::{info, warn};
use uuid::Uuid;

use super::HrService;
use crate::auth::{Capability, Identity};
use crate::calculation::{ActiveParameters, PayslipInput, calculate_payslip};
use crate::error::{HrError, HrResult};
use crate::models::{
    CalculationResult, NewPayrollParameter, Page, PageRequest, PayrollParameter, Payslip,
};
use crate::store::PayslipFilter;

/// Version stamped on every calculation result.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

impl HrService {
    /// Payslips matching `filter`, latest pay date first.
    pub async fn list_payslips(
        &self,
        identity: &Identity,
        filter: PayslipFilter,
        page: PageRequest,
    ) -> HrResult<Page<Payslip>> {
        identity.require(Capability::ViewRecords)?;
        let mut payslips = self.store.list_payslips(&filter).await?;
        payslips.sort_by(|a, b| {
            b.pay_date
                .cmp(&a.pay_date)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        Ok(page.slice(payslips))
    }

    pub async fn get_payslip(&self, identity: &Identity, id: Uuid) -> HrResult<Payslip> {
        identity.require(Capability::ViewRecords)?;
        self.store.get_payslip(id).await
    }

    /// Parameters in effect today, ordered by type then name.
    pub async fn list_payroll_parameters(
        &self,
        identity: &Identity,
    ) -> HrResult<Vec<PayrollParameter>> {
        identity.require(Capability::ViewRecords)?;
        let today = self.clock.today();
        let mut parameters: Vec<PayrollParameter> = self
            .store
            .list_payroll_parameters()
            .await?
            .into_iter()
            .filter(|p| p.is_effective_on(today))
            .collect();
        parameters.sort_by(|a, b| (a.param_type, &a.name).cmp(&(b.param_type, &b.name)));
        Ok(parameters)
    }

    pub async fn create_payroll_parameter(
        &self,
        identity: &Identity,
        new: NewPayrollParameter,
    ) -> HrResult<PayrollParameter> {
        identity.require(Capability::ManagePayroll)?;
        new.validate()?;
        let parameter = new.into_parameter(Uuid::new_v4(), self.clock.now());
        if parameter.known_code().is_none() {
            warn!(code = %parameter.code, "Payroll parameter code is not used by the engine");
        }
        self.store.insert_payroll_parameter(parameter).await
    }

    /// Runs the engine for one employee and stores the payslip as
    /// `calculated`.
    ///
    /// Parameters are those in effect on the first day of the period. A
    /// second payslip for the same employee and period is a Conflict.
    pub async fn calculate_payslip(
        &self,
        identity: &Identity,
        employee_id: Uuid,
        input: PayslipInput,
    ) -> HrResult<CalculationResult> {
        identity.require(Capability::ManagePayroll)?;
        input.validate()?;

        let employee = self.store.get_employee(employee_id).await?;
        let stored = self.store.list_payroll_parameters().await?;
        let parameters = ActiveParameters::effective_on(&stored, input.pay_period_start);

        let calculation = calculate_payslip(&employee, &input, &parameters);
        let now = self.clock.now();
        let payslip = Payslip::calculated(
            Uuid::new_v4(),
            employee.id,
            (input.pay_period_start, input.pay_period_end),
            input.pay_date,
            calculation.breakdown,
            now,
        );
        let payslip = self.store.insert_payslip(payslip).await?;

        for warning in &calculation.audit_trace.warnings {
            warn!(
                payslip_id = %payslip.id,
                code = %warning.code,
                severity = %warning.severity,
                "{}", warning.message
            );
        }
        info!(
            payslip_id = %payslip.id,
            employee_id = %employee.id,
            gross_salary = %payslip.gross_salary,
            net_salary = %payslip.net_salary,
            duration_us = calculation.audit_trace.duration_us,
            "Payslip calculated"
        );

        Ok(CalculationResult {
            calculation_id: Uuid::new_v4(),
            timestamp: now,
            engine_version: ENGINE_VERSION.to_string(),
            payslip,
            audit_trace: calculation.audit_trace,
        })
    }

    /// Approves a calculated payslip on behalf of the caller.
    pub async fn approve_payslip(&self, identity: &Identity, id: Uuid) -> HrResult<Payslip> {
        identity.require(Capability::ApprovePayroll)?;
        let approver = identity.user_id;
        let at = self.clock.now();
        let payslip = self
            .store
            .update_payslip(id, Box::new(move |payslip| payslip.approve(approver, at)))
            .await?;
        info!(payslip_id = %id, approved_by = %approver, "Payslip approved");
        Ok(payslip)
    }

    /// Marks an approved payslip as paid.
    ///
    /// An unknown id and a payslip that is not approved are reported alike.
    pub async fn pay_payslip(&self, identity: &Identity, id: Uuid) -> HrResult<Payslip> {
        identity.require(Capability::ManagePayroll)?;
        let payslip = self
            .store
            .update_payslip(id, Box::new(|payslip| payslip.mark_paid()))
            .await
            .map_err(|err| match err {
                HrError::NotFound { .. } => HrError::PayslipNotPayable { id: id.to_string() },
                other => other,
            })?;
        info!(payslip_id = %id, "Payslip paid");
        Ok(payslip)
    }

    pub async fn cancel_payslip(&self, identity: &Identity, id: Uuid) -> HrResult<Payslip> {
        identity.require(Capability::ManagePayroll)?;
        let payslip = self
            .store
            .update_payslip(id, Box::new(|payslip| payslip.cancel()))
            .await?;
        info!(payslip_id = %id, "Payslip cancelled");
        Ok(payslip)
    }
}
