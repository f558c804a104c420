use tracing::info;
use uuid::Uuid;

use super::HrService;
use crate::auth::{Capability, Identity};
use crate::error::{HrError, HrResult};
use crate::models::{Contract, ContractUpdate, NewContract, Page, PageRequest};
use crate::store::ContractFilter;

impl HrService {
    /// Contracts matching `filter`, latest start date first.
    pub async fn list_contracts(
        &self,
        identity: &Identity,
        filter: ContractFilter,
        page: PageRequest,
    ) -> HrResult<Page<Contract>> {
        identity.require(Capability::ViewRecords)?;
        let mut contracts = self.store.list_contracts(&filter).await?;
        contracts.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        Ok(page.slice(contracts))
    }

    pub async fn create_contract(&self, identity: &Identity, new: NewContract) -> HrResult<Contract> {
        identity.require(Capability::ManageContracts)?;
        new.validate()?;
        let contract = new.into_contract(Uuid::new_v4(), self.clock.now());
        let contract = self.store.insert_contract(contract).await?;
        info!(
            contract_id = %contract.id,
            employee_id = %contract.employee_id,
            "Contract created"
        );
        Ok(contract)
    }

    pub async fn update_contract(
        &self,
        identity: &Identity,
        id: Uuid,
        changes: ContractUpdate,
    ) -> HrResult<Contract> {
        identity.require(Capability::ManageContracts)?;
        if changes.working_hours_per_week == Some(0) {
            return Err(HrError::validation(
                "working_hours_per_week",
                "must be positive",
            ));
        }
        self.store
            .update_contract(id, Box::new(move |contract| contract.apply(changes)))
            .await
    }
}
