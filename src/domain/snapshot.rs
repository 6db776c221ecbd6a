//! Snapshot — the whole database as one serializable document.
//!
//! Three collections, persisted together as a single JSON file. Absent
//! arrays deserialize as empty so older or hand-edited files load
//! cleanly. The fixed seed makes a fresh store usable with zero setup:
//! one admin, one approved employer with a job, one student with a
//! pending application on that job.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::application::{ApplicationRecord, ApplicationStatus};
use super::job::JobRecord;
use super::user::{EmployerStatus, Role, UserRecord};

/// Login email of the seeded admin account.
pub const SEED_ADMIN_EMAIL: &str = "admin@workflow.local";
/// Login email of the seeded employer account.
pub const SEED_EMPLOYER_EMAIL: &str = "deneme@isveren.com";
/// Login email of the seeded student account.
pub const SEED_STUDENT_EMAIL: &str = "deneme@ogrenci.com";

const SEED_ADMIN_PASSWORD: &str = "admin123";
const SEED_MEMBER_PASSWORD: &str = "123456";

/// Complete in-memory state of the store at one point in time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// All user records, insertion order.
    #[serde(default)]
    pub users: Vec<UserRecord>,
    /// All job records, insertion order.
    #[serde(default)]
    pub jobs: Vec<JobRecord>,
    /// All application records, insertion order.
    #[serde(default)]
    pub applications: Vec<ApplicationRecord>,
}

impl Snapshot {
    /// Populate the fixed seed dataset if no users exist yet.
    ///
    /// `hash` is the injected password digest function; the snapshot
    /// never holds plaintext. Returns `true` when seeding happened, so
    /// the caller knows to persist before handing the snapshot out.
    pub fn seed_if_empty(&mut self, hash: impl Fn(&str) -> String) -> bool {
        if !self.users.is_empty() {
            return false;
        }

        let now = Utc::now();
        let admin_id = Uuid::new_v4().to_string();
        let employer_id = Uuid::new_v4().to_string();
        let student_id = Uuid::new_v4().to_string();
        let job_id = Uuid::new_v4().to_string();

        self.users.push(UserRecord {
            id: admin_id,
            role: Role::Admin,
            name: Some("Sistem Admin".to_string()),
            company_name: None,
            avatar_url: None,
            company_logo_url: None,
            age: None,
            city: "İstanbul".to_string(),
            phone: "0000 000 00 00".to_string(),
            email: SEED_ADMIN_EMAIL.to_string(),
            password_hash: hash(SEED_ADMIN_PASSWORD),
            employer_status: None,
            created_at: now,
        });
        self.users.push(UserRecord {
            id: employer_id.clone(),
            role: Role::Employer,
            name: Some("Ayşe Kaya".to_string()),
            company_name: Some("Kampüs Kafe".to_string()),
            avatar_url: Some(String::new()),
            company_logo_url: Some(String::new()),
            age: None,
            city: "Ankara".to_string(),
            phone: "0500 000 00 00".to_string(),
            email: SEED_EMPLOYER_EMAIL.to_string(),
            password_hash: hash(SEED_MEMBER_PASSWORD),
            employer_status: Some(EmployerStatus::Approved),
            created_at: now,
        });
        self.users.push(UserRecord {
            id: student_id.clone(),
            role: Role::Student,
            name: Some("Ece Demir".to_string()),
            company_name: None,
            avatar_url: Some(String::new()),
            company_logo_url: None,
            age: Some(21),
            city: "Ankara".to_string(),
            phone: "0500 111 11 11".to_string(),
            email: SEED_STUDENT_EMAIL.to_string(),
            password_hash: hash(SEED_MEMBER_PASSWORD),
            employer_status: None,
            created_at: now,
        });

        self.jobs.push(JobRecord {
            id: job_id.clone(),
            employer_id,
            title: Some("Günlük Personel İhtiyacı".to_string()),
            city: "Ankara".to_string(),
            start_date: now,
            end_date: now + Duration::days(3),
            start_time: Some("10:00".to_string()),
            end_time: Some("18:00".to_string()),
            daily_wage: 700.0,
            description: "Kafe içi servis ve kasa desteği. Öğrenci vardiyası.".to_string(),
            image_url: None,
            image_urls: None,
            is_active: true,
            created_at: now,
        });

        self.applications.push(ApplicationRecord {
            id: Uuid::new_v4().to_string(),
            job_id,
            student_id,
            desired_wage: None,
            status: ApplicationStatus::Pending,
            employer_completed: false,
            student_completed: false,
            employer_rating: None,
            employer_comment: None,
            student_rating: None,
            student_comment: None,
            created_at: now,
        });

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_populates_once() {
        let mut snapshot = Snapshot::default();
        assert!(snapshot.seed_if_empty(|plain| format!("#{plain}")));
        assert_eq!(snapshot.users.len(), 3);
        assert_eq!(snapshot.jobs.len(), 1);
        assert_eq!(snapshot.applications.len(), 1);

        // A populated snapshot is never reseeded.
        assert!(!snapshot.seed_if_empty(|plain| format!("#{plain}")));
        assert_eq!(snapshot.users.len(), 3);
    }

    #[test]
    fn test_seed_wires_references_and_statuses() {
        let mut snapshot = Snapshot::default();
        snapshot.seed_if_empty(|_| "digest".to_string());

        let employer = snapshot
            .users
            .iter()
            .find(|user| user.role == Role::Employer)
            .unwrap();
        let student = snapshot
            .users
            .iter()
            .find(|user| user.role == Role::Student)
            .unwrap();
        assert!(employer.is_approved_employer());

        let job = &snapshot.jobs[0];
        assert_eq!(job.employer_id, employer.id);
        assert!(job.is_active);

        let application = &snapshot.applications[0];
        assert_eq!(application.job_id, job.id);
        assert_eq!(application.student_id, student.id);
        assert_eq!(application.status, ApplicationStatus::Pending);
    }

    #[test]
    fn test_absent_arrays_default_empty() {
        let snapshot: Snapshot = serde_json::from_str(r#"{"users": []}"#).unwrap();
        assert!(snapshot.jobs.is_empty());
        assert!(snapshot.applications.is_empty());
    }
}
