//! Query & Aggregation - Joins Across Collections and Rating Maps
//!
//! Joins are computed in application code against one snapshot.
//! A dangling reference (the referenced record was deleted) shows up
//! as `None` in its tuple slot; records are never silently dropped.

use std::collections::HashMap;

use super::store::{StoreError, WorkflowStore};
use crate::domain::application::ApplicationRecord;
use crate::domain::job::JobRecord;
use crate::domain::rating::rating_means;
use crate::domain::user::UserRecord;
use crate::ports::snapshot_store::SnapshotStore;

/// A student's application joined with its job and the job's employer.
#[derive(Debug, Clone)]
pub struct StudentApplicationView {
    pub application: ApplicationRecord,
    /// `None` when the job was deleted out from under the application.
    pub job: Option<JobRecord>,
    /// `None` whenever the job is, or when the employer was deleted.
    pub employer: Option<UserRecord>,
}

impl<S: SnapshotStore> WorkflowStore<S> {
    /// All jobs joined with their owning employer, newest job first.
    pub async fn list_jobs_with_employer(
        &self,
    ) -> Result<Vec<(JobRecord, Option<UserRecord>)>, StoreError> {
        let snapshot = self.load().await?;
        let mut rows: Vec<(JobRecord, Option<UserRecord>)> = snapshot
            .jobs
            .iter()
            .map(|job| {
                let employer = snapshot
                    .users
                    .iter()
                    .find(|user| user.id == job.employer_id)
                    .cloned();
                (job.clone(), employer)
            })
            .collect();
        rows.sort_by(|a, b| b.0.created_at.cmp(&a.0.created_at));
        Ok(rows)
    }

    /// A job's applications joined with the applying students,
    /// newest application first.
    pub async fn list_applications_with_students(
        &self,
        job_id: &str,
    ) -> Result<Vec<(ApplicationRecord, Option<UserRecord>)>, StoreError> {
        let snapshot = self.load().await?;
        let mut rows: Vec<(ApplicationRecord, Option<UserRecord>)> = snapshot
            .applications
            .iter()
            .filter(|app| app.job_id == job_id)
            .map(|app| {
                let student = snapshot
                    .users
                    .iter()
                    .find(|user| user.id == app.student_id)
                    .cloned();
                (app.clone(), student)
            })
            .collect();
        rows.sort_by(|a, b| b.0.created_at.cmp(&a.0.created_at));
        Ok(rows)
    }

    /// A student's applications joined with job and employer,
    /// newest application first.
    pub async fn list_applications_for_student(
        &self,
        student_id: &str,
    ) -> Result<Vec<StudentApplicationView>, StoreError> {
        let snapshot = self.load().await?;
        let mut rows: Vec<StudentApplicationView> = snapshot
            .applications
            .iter()
            .filter(|app| app.student_id == student_id)
            .map(|app| {
                let job = snapshot
                    .jobs
                    .iter()
                    .find(|job| job.id == app.job_id)
                    .cloned();
                let employer = job.as_ref().and_then(|job| {
                    snapshot
                        .users
                        .iter()
                        .find(|user| user.id == job.employer_id)
                        .cloned()
                });
                StudentApplicationView {
                    application: app.clone(),
                    job,
                    employer,
                }
            })
            .collect();
        rows.sort_by(|a, b| b.application.created_at.cmp(&a.application.created_at));
        Ok(rows)
    }

    /// Mean employer-given rating per student, one decimal place.
    ///
    /// Students nobody has rated yet are absent from the map — not
    /// zero, not null.
    pub async fn student_rating_map(
        &self,
        student_ids: &[String],
    ) -> Result<HashMap<String, f64>, StoreError> {
        let snapshot = self.load().await?;
        let samples = snapshot
            .applications
            .iter()
            .map(|app| (app.student_id.as_str(), app.employer_rating));
        Ok(rating_means(student_ids, samples))
    }

    /// Mean student-given rating per employer, one decimal place.
    ///
    /// The rating sits on the application but targets the employer, so
    /// each sample routes through the application's job. Applications
    /// whose job is gone contribute nothing.
    pub async fn employer_rating_map(
        &self,
        employer_ids: &[String],
    ) -> Result<HashMap<String, f64>, StoreError> {
        let snapshot = self.load().await?;
        let jobs_by_id: HashMap<&str, &str> = snapshot
            .jobs
            .iter()
            .map(|job| (job.id.as_str(), job.employer_id.as_str()))
            .collect();
        let samples = snapshot.applications.iter().filter_map(|app| {
            jobs_by_id
                .get(app.job_id.as_str())
                .map(|employer_id| (*employer_id, app.student_rating))
        });
        Ok(rating_means(employer_ids, samples))
    }
}
