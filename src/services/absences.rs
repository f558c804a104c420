use tracing::info;
use uuid::Uuid;

use super::HrService;
use crate::auth::{Capability, Identity};
use crate::error::HrResult;
use crate::models::{Absence, AbsenceDecision, AbsenceType, NewAbsence, Page, PageRequest};
use crate::reports::{LeaveBalance, leave_balance};
use crate::store::AbsenceFilter;

impl HrService {
    /// Absences matching `filter`, latest start date first.
    pub async fn list_absences(
        &self,
        identity: &Identity,
        filter: AbsenceFilter,
        page: PageRequest,
    ) -> HrResult<Page<Absence>> {
        identity.require(Capability::ViewRecords)?;
        let mut absences = self.store.list_absences(&filter).await?;
        absences.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        Ok(page.slice(absences))
    }

    pub async fn list_absence_types(&self, identity: &Identity) -> HrResult<Vec<AbsenceType>> {
        identity.require(Capability::ViewRecords)?;
        let mut types = self.store.list_absence_types().await?;
        types.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(types)
    }

    /// Per-type days used and remaining this year for one employee.
    pub async fn leave_balance(
        &self,
        identity: &Identity,
        employee_id: Uuid,
    ) -> HrResult<Vec<LeaveBalance>> {
        identity.require(Capability::ViewRecords)?;
        let employee = self.store.get_employee(employee_id).await?;
        let types = self.store.list_absence_types().await?;
        let filter = AbsenceFilter {
            employee_id: Some(employee.id),
            ..Default::default()
        };
        let absences = self.store.list_absences(&filter).await?;
        Ok(leave_balance(&types, &absences, employee.id, self.clock.today()))
    }

    /// Files a pending absence request.
    pub async fn request_absence(&self, identity: &Identity, new: NewAbsence) -> HrResult<Absence> {
        identity.require(Capability::RequestAbsence)?;
        new.validate()?;
        let absence = new.into_absence(Uuid::new_v4(), self.clock.now());
        let absence = self.store.insert_absence(absence).await?;
        info!(
            absence_id = %absence.id,
            employee_id = %absence.employee_id,
            total_days = %absence.total_days,
            "Absence requested"
        );
        Ok(absence)
    }

    pub async fn approve_absence(&self, identity: &Identity, id: Uuid) -> HrResult<Absence> {
        self.decide_absence(identity, id, AbsenceDecision::Approve).await
    }

    pub async fn reject_absence(&self, identity: &Identity, id: Uuid) -> HrResult<Absence> {
        self.decide_absence(identity, id, AbsenceDecision::Reject).await
    }

    async fn decide_absence(
        &self,
        identity: &Identity,
        id: Uuid,
        decision: AbsenceDecision,
    ) -> HrResult<Absence> {
        identity.require(Capability::DecideAbsences)?;
        let approver = identity.user_id;
        let at = self.clock.now();
        let absence = self
            .store
            .update_absence(
                id,
                Box::new(move |absence| absence.decide(decision, approver, at)),
            )
            .await?;
        info!(absence_id = %id, status = %absence.status, decided_by = %approver, "Absence decided");
        Ok(absence)
    }

    pub async fn cancel_absence(&self, identity: &Identity, id: Uuid) -> HrResult<Absence> {
        identity.require(Capability::RequestAbsence)?;
        let absence = self
            .store
            .update_absence(id, Box::new(|absence| absence.cancel()))
            .await?;
        info!(absence_id = %id, "Absence cancelled");
        Ok(absence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HrError;
    use crate::models::AbsenceStatus;
    use crate::services::testing::{admin, date, hire, manager, seeded_service_on, staff};
    use rust_decimal::Decimal;

    async fn annual_leave_id(service: &HrService) -> Uuid {
        service
            .list_absence_types(&staff())
            .await
            .unwrap()
            .into_iter()
            .find(|t| t.code == "CP")
            .unwrap()
            .id
    }

    fn request(employee_id: Uuid, type_id: Uuid, from: u32, to: u32) -> NewAbsence {
        NewAbsence {
            employee_id,
            absence_type_id: type_id,
            start_date: date(2026, 3, from),
            end_date: date(2026, 3, to),
            total_days: None,
            reason: None,
        }
    }

    #[tokio::test]
    async fn test_types_ordered_by_name() {
        let service = seeded_service_on(date(2026, 3, 15));
        let types = service.list_absence_types(&staff()).await.unwrap();
        let names: Vec<_> = types.iter().map(|t| t.name.as_str()).collect();

        assert_eq!(names, vec!["Annual leave", "Sick leave"]);
    }

    #[tokio::test]
    async fn test_request_then_approve() {
        let service = seeded_service_on(date(2026, 3, 15));
        let employee = hire(&service, "Amal", 2000).await;
        let annual = annual_leave_id(&service).await;

        let absence = service
            .request_absence(&staff(), request(employee.id, annual, 2, 6))
            .await
            .unwrap();
        assert_eq!(absence.status, AbsenceStatus::Pending);
        assert_eq!(absence.total_days, Decimal::from(5));

        let approver = manager();
        let approved = service.approve_absence(&approver, absence.id).await.unwrap();
        assert_eq!(approved.status, AbsenceStatus::Approved);
        assert_eq!(approved.approved_by, Some(approver.user_id));
    }

    #[tokio::test]
    async fn test_decided_absence_cannot_be_decided_again() {
        let service = seeded_service_on(date(2026, 3, 15));
        let employee = hire(&service, "Amal", 2000).await;
        let annual = annual_leave_id(&service).await;
        let absence = service
            .request_absence(&staff(), request(employee.id, annual, 2, 6))
            .await
            .unwrap();
        service.reject_absence(&admin(), absence.id).await.unwrap();

        let result = service.approve_absence(&admin(), absence.id).await;

        assert!(matches!(result, Err(HrError::InvalidTransition { .. })));
    }

    #[tokio::test]
    async fn test_employee_cannot_decide() {
        let service = seeded_service_on(date(2026, 3, 15));
        let employee = hire(&service, "Amal", 2000).await;
        let annual = annual_leave_id(&service).await;
        let absence = service
            .request_absence(&staff(), request(employee.id, annual, 2, 6))
            .await
            .unwrap();

        let result = service.approve_absence(&staff(), absence.id).await;

        assert!(matches!(result, Err(HrError::Forbidden { .. })));
    }

    #[tokio::test]
    async fn test_unknown_type_is_rejected() {
        let service = seeded_service_on(date(2026, 3, 15));
        let employee = hire(&service, "Amal", 2000).await;

        let result = service
            .request_absence(&staff(), request(employee.id, Uuid::new_v4(), 2, 6))
            .await;

        assert!(matches!(result, Err(HrError::ForeignKeyViolation { .. })));
    }

    #[tokio::test]
    async fn test_balance_counts_pending_and_approved() {
        let service = seeded_service_on(date(2026, 3, 15));
        let employee = hire(&service, "Amal", 2000).await;
        let annual = annual_leave_id(&service).await;
        let approved = service
            .request_absence(&staff(), request(employee.id, annual, 2, 6))
            .await
            .unwrap();
        service.approve_absence(&admin(), approved.id).await.unwrap();
        service
            .request_absence(&staff(), request(employee.id, annual, 16, 17))
            .await
            .unwrap();
        let cancelled = service
            .request_absence(&staff(), request(employee.id, annual, 23, 27))
            .await
            .unwrap();
        service.cancel_absence(&staff(), cancelled.id).await.unwrap();

        let balance = service.leave_balance(&staff(), employee.id).await.unwrap();
        let annual_row = balance.iter().find(|b| b.code == "CP").unwrap();

        assert_eq!(annual_row.used_days, Decimal::from(7));
        assert_eq!(annual_row.remaining_days, Some(Decimal::from(23)));
    }

    #[tokio::test]
    async fn test_balance_of_unknown_employee_is_not_found() {
        let service = seeded_service_on(date(2026, 3, 15));
        let result = service.leave_balance(&staff(), Uuid::new_v4()).await;

        assert!(matches!(result, Err(HrError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_list_latest_first() {
        let service = seeded_service_on(date(2026, 3, 15));
        let employee = hire(&service, "Amal", 2000).await;
        let annual = annual_leave_id(&service).await;
        for (from, to) in [(2, 3), (16, 17), (9, 10)] {
            service
                .request_absence(&staff(), request(employee.id, annual, from, to))
                .await
                .unwrap();
        }

        let page = service
            .list_absences(&staff(), AbsenceFilter::default(), PageRequest::default())
            .await
            .unwrap();
        let starts: Vec<_> = page.data.iter().map(|a| a.start_date).collect();

        assert_eq!(starts, vec![date(2026, 3, 16), date(2026, 3, 9), date(2026, 3, 2)]);
    }
}
