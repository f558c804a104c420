//! Recruitment postings and their candidates.
//!
//! Both statuses are plain fields: any status may follow any other.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::round_money;
use crate::error::{HrError, HrResult};

/// Urgency of a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

/// Status of a recruitment posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecruitmentStatus {
    Draft,
    #[default]
    Open,
    InReview,
    Interviewing,
    Closed,
    Filled,
}

/// Status of a candidate within a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateStatus {
    #[default]
    Applied,
    Screening,
    Interview,
    Offered,
    Hired,
    Rejected,
}

/// An open position the organization is hiring for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecruitmentPosting {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub position: Option<String>,
    pub department_id: Option<Uuid>,
    /// Headcount to hire.
    pub number_of_positions: u32,
    pub salary_range_min: Option<Decimal>,
    pub salary_range_max: Option<Decimal>,
    pub application_deadline: Option<NaiveDate>,
    pub priority: Priority,
    pub status: RecruitmentStatus,
    pub posted_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RecruitmentPosting {
    /// Applies a partial update; fields left as `None` are unchanged.
    pub fn apply(&mut self, changes: RecruitmentUpdate) -> HrResult<()> {
        let min = changes.salary_range_min.or(self.salary_range_min);
        let max = changes.salary_range_max.or(self.salary_range_max);
        validate_salary_range(min, max)?;

        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(description) = changes.description {
            self.description = Some(description);
        }
        if let Some(requirements) = changes.requirements {
            self.requirements = Some(requirements);
        }
        if let Some(n) = changes.number_of_positions {
            self.number_of_positions = n;
        }
        self.salary_range_min = min.map(round_money);
        self.salary_range_max = max.map(round_money);
        if let Some(deadline) = changes.application_deadline {
            self.application_deadline = Some(deadline);
        }
        if let Some(status) = changes.status {
            self.status = status;
        }
        if let Some(priority) = changes.priority {
            self.priority = priority;
        }
        Ok(())
    }
}

fn validate_salary_range(min: Option<Decimal>, max: Option<Decimal>) -> HrResult<()> {
    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            return Err(HrError::validation(
                "salary_range_max",
                "must not be below salary_range_min",
            ));
        }
    }
    Ok(())
}

/// Input for opening a posting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewRecruitment {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub requirements: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub department_id: Option<Uuid>,
    #[serde(default)]
    pub number_of_positions: Option<u32>,
    #[serde(default)]
    pub salary_range_min: Option<Decimal>,
    #[serde(default)]
    pub salary_range_max: Option<Decimal>,
    #[serde(default)]
    pub application_deadline: Option<NaiveDate>,
    #[serde(default)]
    pub priority: Option<Priority>,
}

impl NewRecruitment {
    /// Checks the title, headcount and salary range.
    pub fn validate(&self) -> HrResult<()> {
        if self.title.trim().is_empty() {
            return Err(HrError::validation("title", "is required"));
        }
        if self.number_of_positions == Some(0) {
            return Err(HrError::validation("number_of_positions", "must be positive"));
        }
        validate_salary_range(self.salary_range_min, self.salary_range_max)
    }

    /// Builds an open posting.
    pub fn into_posting(self, id: Uuid, posted_by: Uuid, now: DateTime<Utc>) -> RecruitmentPosting {
        RecruitmentPosting {
            id,
            title: self.title.trim().to_string(),
            description: self.description,
            requirements: self.requirements,
            position: self.position,
            department_id: self.department_id,
            number_of_positions: self.number_of_positions.unwrap_or(1),
            salary_range_min: self.salary_range_min.map(round_money),
            salary_range_max: self.salary_range_max.map(round_money),
            application_deadline: self.application_deadline,
            priority: self.priority.unwrap_or_default(),
            status: RecruitmentStatus::default(),
            posted_by,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update of a posting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecruitmentUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub number_of_positions: Option<u32>,
    pub salary_range_min: Option<Decimal>,
    pub salary_range_max: Option<Decimal>,
    pub application_deadline: Option<NaiveDate>,
    pub status: Option<RecruitmentStatus>,
    pub priority: Option<Priority>,
}

/// A person who applied to a posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: Uuid,
    pub recruitment_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub cover_letter: Option<String>,
    pub notes: Option<String>,
    pub status: CandidateStatus,
    /// Interviewer rating from 1 to 5.
    pub rating: Option<u8>,
    pub interview_date: Option<DateTime<Utc>>,
    pub applied_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Candidate {
    /// Applies a partial update; fields left as `None` are unchanged.
    pub fn apply(&mut self, changes: CandidateUpdate) {
        if let Some(status) = changes.status {
            self.status = status;
        }
        if let Some(rating) = changes.rating {
            self.rating = Some(rating);
        }
        if let Some(notes) = changes.notes {
            self.notes = Some(notes);
        }
        if let Some(interview_date) = changes.interview_date {
            self.interview_date = Some(interview_date);
        }
    }
}

/// Input for adding a candidate to a posting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCandidate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub cover_letter: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewCandidate {
    /// Checks the name and email.
    pub fn validate(&self) -> HrResult<()> {
        if self.first_name.trim().is_empty() {
            return Err(HrError::validation("first_name", "is required"));
        }
        if self.last_name.trim().is_empty() {
            return Err(HrError::validation("last_name", "is required"));
        }
        if !self.email.contains('@') {
            return Err(HrError::validation("email", "is not a valid email address"));
        }
        Ok(())
    }

    /// Builds a freshly applied candidate.
    pub fn into_candidate(self, id: Uuid, recruitment_id: Uuid, now: DateTime<Utc>) -> Candidate {
        Candidate {
            id,
            recruitment_id,
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email,
            phone: self.phone,
            cover_letter: self.cover_letter,
            notes: self.notes,
            status: CandidateStatus::default(),
            rating: None,
            interview_date: None,
            applied_at: now,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update of a candidate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateUpdate {
    pub status: Option<CandidateStatus>,
    pub rating: Option<u8>,
    pub notes: Option<String>,
    pub interview_date: Option<DateTime<Utc>>,
}

impl CandidateUpdate {
    /// Checks the rating scale.
    pub fn validate(&self) -> HrResult<()> {
        if self.rating.is_some_and(|r| !(1..=5).contains(&r)) {
            return Err(HrError::validation("rating", "must be between 1 and 5"));
        }
        Ok(())
    }
}

/// A posting as listed, with candidate counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecruitmentSummary {
    #[serde(flatten)]
    pub posting: RecruitmentPosting,
    pub total_candidates: u64,
    pub hired_count: u64,
}

/// A posting with all of its candidates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecruitmentDetail {
    #[serde(flatten)]
    pub posting: RecruitmentPosting,
    /// Most recent applications first.
    pub candidates: Vec<Candidate>,
}
