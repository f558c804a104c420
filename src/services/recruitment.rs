use tracing::info;
use uuid::Uuid;

use super::HrService;
use crate::auth::{Capability, Identity};
use crate::error::HrResult;
use crate::models::{
    Candidate, CandidateStatus, CandidateUpdate, NewCandidate, NewRecruitment, RecruitmentDetail,
    RecruitmentPosting, RecruitmentSummary, RecruitmentUpdate,
};
use crate::store::RecruitmentFilter;

impl HrService {
    /// Postings matching `filter`, newest first, with candidate and hire counts.
    pub async fn list_postings(
        &self,
        identity: &Identity,
        filter: RecruitmentFilter,
    ) -> HrResult<Vec<RecruitmentSummary>> {
        identity.require(Capability::ViewRecords)?;
        let postings = self.store.list_postings(&filter).await?;
        let candidates = self.store.list_candidates(None).await?;

        let mut summaries: Vec<RecruitmentSummary> = postings
            .into_iter()
            .map(|posting| {
                let applied = candidates.iter().filter(|c| c.recruitment_id == posting.id);
                let (total, hired) = applied.fold((0u64, 0u64), |(total, hired), c| {
                    let is_hired = u64::from(c.status == CandidateStatus::Hired);
                    (total + 1, hired + is_hired)
                });
                RecruitmentSummary {
                    posting,
                    total_candidates: total,
                    hired_count: hired,
                }
            })
            .collect();
        summaries.sort_by(|a, b| b.posting.created_at.cmp(&a.posting.created_at));
        Ok(summaries)
    }

    /// A posting with its candidates, latest applications first.
    pub async fn get_posting(&self, identity: &Identity, id: Uuid) -> HrResult<RecruitmentDetail> {
        identity.require(Capability::ViewRecords)?;
        let posting = self.store.get_posting(id).await?;
        let mut candidates = self.store.list_candidates(Some(id)).await?;
        candidates.sort_by(|a, b| b.applied_at.cmp(&a.applied_at));
        Ok(RecruitmentDetail {
            posting,
            candidates,
        })
    }

    /// Opens a posting recorded as posted by the caller.
    pub async fn create_posting(
        &self,
        identity: &Identity,
        new: NewRecruitment,
    ) -> HrResult<RecruitmentPosting> {
        identity.require(Capability::ManageRecruitment)?;
        new.validate()?;
        let posting = new.into_posting(Uuid::new_v4(), identity.user_id, self.clock.now());
        let posting = self.store.insert_posting(posting).await?;
        info!(recruitment_id = %posting.id, title = %posting.title, "Posting opened");
        Ok(posting)
    }

    pub async fn update_posting(
        &self,
        identity: &Identity,
        id: Uuid,
        changes: RecruitmentUpdate,
    ) -> HrResult<RecruitmentPosting> {
        identity.require(Capability::ManageRecruitment)?;
        self.store
            .update_posting(id, Box::new(move |posting| posting.apply(changes)))
            .await
    }

    /// Adds a candidate to an existing posting.
    pub async fn add_candidate(
        &self,
        identity: &Identity,
        recruitment_id: Uuid,
        new: NewCandidate,
    ) -> HrResult<Candidate> {
        identity.require(Capability::ManageRecruitment)?;
        new.validate()?;
        let posting = self.store.get_posting(recruitment_id).await?;
        let candidate = new.into_candidate(Uuid::new_v4(), posting.id, self.clock.now());
        let candidate = self.store.insert_candidate(candidate).await?;
        info!(
            candidate_id = %candidate.id,
            recruitment_id = %posting.id,
            "Candidate added"
        );
        Ok(candidate)
    }

    pub async fn update_candidate(
        &self,
        identity: &Identity,
        id: Uuid,
        changes: CandidateUpdate,
    ) -> HrResult<Candidate> {
        identity.require(Capability::ManageRecruitment)?;
        changes.validate()?;
        self.store
            .update_candidate(
                id,
                Box::new(move |candidate| {
                    candidate.apply(changes);
                    Ok(())
                }),
            )
            .await
    }
}
