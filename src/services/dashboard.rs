use super::HrService;
use crate::auth::{Capability, Identity};
use crate::error::HrResult;
use crate::reports::{DashboardSources, DashboardStats, Kpis, compute_kpis, dashboard_stats};
use crate::store::{AbsenceFilter, ContractFilter, EmployeeFilter, PayslipFilter, RecruitmentFilter};

impl HrService {
    pub async fn dashboard_stats(&self, identity: &Identity) -> HrResult<DashboardStats> {
        identity.require(Capability::ViewReports)?;
        let employees = self.store.list_employees(&EmployeeFilter::default()).await?;
        let departments = self.store.list_departments().await?;
        let payslips = self.store.list_payslips(&PayslipFilter::default()).await?;
        let absence_types = self.store.list_absence_types().await?;
        let absences = self.store.list_absences(&AbsenceFilter::default()).await?;
        let contracts = self.store.list_contracts(&ContractFilter::default()).await?;
        let postings = self.store.list_postings(&RecruitmentFilter::default()).await?;

        let sources = DashboardSources {
            employees: &employees,
            departments: &departments,
            payslips: &payslips,
            absence_types: &absence_types,
            absences: &absences,
            contracts: &contracts,
            postings: &postings,
        };
        Ok(dashboard_stats(sources, self.clock.today()))
    }

    pub async fn kpis(&self, identity: &Identity) -> HrResult<Kpis> {
        identity.require(Capability::ViewReports)?;
        let employees = self.store.list_employees(&EmployeeFilter::default()).await?;
        let absences = self.store.list_absences(&AbsenceFilter::default()).await?;
        let payslips = self.store.list_payslips(&PayslipFilter::default()).await?;
        Ok(compute_kpis(&employees, &absences, &payslips, self.clock.today()))
    }
}
