//! Application entity — a student's submission against a job.
//!
//! `(job_id, student_id)` is a natural composite key: the store never
//! holds two applications for the same pair. Ratings are 1–5 integers
//! written once per side after the work is completed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    /// Submitted, awaiting the employer's decision.
    Pending,
    /// Accepted by the employer.
    Approved,
    /// Declined by the employer.
    Rejected,
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "PENDING"),
            Self::Approved => write!(f, "APPROVED"),
            Self::Rejected => write!(f, "REJECTED"),
        }
    }
}

/// A stored application document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationRecord {
    /// Unique record ID (UUID v4), assigned on create.
    pub id: String,
    /// Job applied to.
    pub job_id: String,
    /// Applying student's user ID.
    pub student_id: String,
    /// Student's wage ask, overriding the posted daily wage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desired_wage: Option<f64>,
    /// Lifecycle state; starts `Pending`.
    pub status: ApplicationStatus,
    /// Employer marked the job done and rated the student.
    #[serde(default)]
    pub employer_completed: bool,
    /// Student marked the job done and rated the employer.
    #[serde(default)]
    pub student_completed: bool,
    /// Rating the employer gave the student (1–5).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employer_rating: Option<u8>,
    /// Employer's free-text comment on the student.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employer_comment: Option<String>,
    /// Rating the student gave the employer (1–5).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_rating: Option<u8>,
    /// Student's free-text comment on the employer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_comment: Option<String>,
    /// Creation timestamp, immutable.
    pub created_at: DateTime<Utc>,
}

/// Shallow-merge patch for `update_application`. `None` = unchanged.
///
/// The dedicated completion operations are the gated way to write
/// ratings; this patch exists for the remaining status/flag updates.
#[derive(Debug, Clone, Default)]
pub struct ApplicationPatch {
    pub desired_wage: Option<f64>,
    pub status: Option<ApplicationStatus>,
    pub employer_completed: Option<bool>,
    pub student_completed: Option<bool>,
    pub employer_rating: Option<u8>,
    pub employer_comment: Option<String>,
    pub student_rating: Option<u8>,
    pub student_comment: Option<String>,
}

impl ApplicationRecord {
    /// Apply a patch in place. Absent patch fields leave the record as is.
    pub fn apply(&mut self, patch: ApplicationPatch) {
        if let Some(desired_wage) = patch.desired_wage {
            self.desired_wage = Some(desired_wage);
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(employer_completed) = patch.employer_completed {
            self.employer_completed = employer_completed;
        }
        if let Some(student_completed) = patch.student_completed {
            self.student_completed = student_completed;
        }
        if let Some(employer_rating) = patch.employer_rating {
            self.employer_rating = Some(employer_rating);
        }
        if let Some(employer_comment) = patch.employer_comment {
            self.employer_comment = Some(employer_comment);
        }
        if let Some(student_rating) = patch.student_rating {
            self.student_rating = Some(student_rating);
        }
        if let Some(student_comment) = patch.student_comment {
            self.student_comment = Some(student_comment);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_screaming_snake() {
        let json = serde_json::to_string(&ApplicationStatus::Rejected).unwrap();
        assert_eq!(json, "\"REJECTED\"");
    }

    #[test]
    fn test_completion_flags_default_false_on_deserialize() {
        let json = r#"{
            "id": "a-1",
            "job_id": "j-1",
            "student_id": "u-1",
            "status": "PENDING",
            "created_at": "2026-01-01T00:00:00Z"
        }"#;
        let record: ApplicationRecord = serde_json::from_str(json).unwrap();
        assert!(!record.employer_completed);
        assert!(!record.student_completed);
        assert!(record.employer_rating.is_none());
    }
}
