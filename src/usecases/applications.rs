//! Application Repository - Submissions, Decisions, Completion
//!
//! `(job_id, student_id)` is a natural key: a second submission for
//! the same pair returns the stored record untouched instead of
//! creating a duplicate. Completion is the gated path for ratings —
//! each side writes its rating exactly once.

use chrono::Utc;
use tracing::{info, instrument};
use uuid::Uuid;

use super::store::{StoreError, WorkflowStore};
use crate::domain::application::{
    ApplicationPatch, ApplicationRecord, ApplicationStatus,
};
use crate::ports::snapshot_store::SnapshotStore;

impl<S: SnapshotStore> WorkflowStore<S> {
    /// Submit an application, idempotently per (job, student) pair.
    ///
    /// Returns the existing record unchanged when the pair already
    /// applied — including its original `desired_wage`.
    #[instrument(skip(self))]
    pub async fn create_application(
        &self,
        job_id: &str,
        student_id: &str,
        desired_wage: Option<f64>,
    ) -> Result<ApplicationRecord, StoreError> {
        let _guard = self.write_guard().await;
        let mut snapshot = self.load_locked().await?;

        if let Some(existing) = snapshot
            .applications
            .iter()
            .find(|app| app.job_id == job_id && app.student_id == student_id)
        {
            return Ok(existing.clone());
        }

        let created = ApplicationRecord {
            id: Uuid::new_v4().to_string(),
            job_id: job_id.to_string(),
            student_id: student_id.to_string(),
            desired_wage,
            status: ApplicationStatus::Pending,
            employer_completed: false,
            student_completed: false,
            employer_rating: None,
            employer_comment: None,
            student_rating: None,
            student_comment: None,
            created_at: Utc::now(),
        };
        snapshot.applications.push(created.clone());
        self.persist(&snapshot).await?;

        info!(application_id = %created.id, job_id, "Application created");
        Ok(created)
    }

    /// Look an application up by exact id.
    pub async fn get_application(
        &self,
        id: &str,
    ) -> Result<Option<ApplicationRecord>, StoreError> {
        let snapshot = self.load().await?;
        Ok(snapshot.applications.into_iter().find(|app| app.id == id))
    }

    /// Shallow-merge a patch over an application. `Ok(None)` if unknown.
    #[instrument(skip(self, patch))]
    pub async fn update_application(
        &self,
        id: &str,
        patch: ApplicationPatch,
    ) -> Result<Option<ApplicationRecord>, StoreError> {
        let _guard = self.write_guard().await;
        let mut snapshot = self.load_locked().await?;

        let Some(app) = snapshot.applications.iter_mut().find(|app| app.id == id)
        else {
            return Ok(None);
        };
        app.apply(patch);
        let updated = app.clone();
        self.persist(&snapshot).await?;
        Ok(Some(updated))
    }

    /// Move an application to a new lifecycle state.
    pub async fn update_application_status(
        &self,
        id: &str,
        status: ApplicationStatus,
    ) -> Result<Option<ApplicationRecord>, StoreError> {
        self.update_application(
            id,
            ApplicationPatch {
                status: Some(status),
                ..ApplicationPatch::default()
            },
        )
        .await
    }

    /// List applications for a job, insertion order.
    pub async fn list_applications_for_job(
        &self,
        job_id: &str,
    ) -> Result<Vec<ApplicationRecord>, StoreError> {
        let snapshot = self.load().await?;
        Ok(snapshot
            .applications
            .into_iter()
            .filter(|app| app.job_id == job_id)
            .collect())
    }

    /// Student marks the work done and rates the employer, once.
    ///
    /// `Ok(None)` if the id is unknown. Rejects ratings outside 1–5
    /// and a second completion from the same side.
    #[instrument(skip(self, comment))]
    pub async fn complete_by_student(
        &self,
        id: &str,
        rating: u8,
        comment: Option<String>,
    ) -> Result<Option<ApplicationRecord>, StoreError> {
        self.complete(id, rating, comment, Side::Student).await
    }

    /// Employer marks the work done and rates the student, once.
    #[instrument(skip(self, comment))]
    pub async fn complete_by_employer(
        &self,
        id: &str,
        rating: u8,
        comment: Option<String>,
    ) -> Result<Option<ApplicationRecord>, StoreError> {
        self.complete(id, rating, comment, Side::Employer).await
    }

    async fn complete(
        &self,
        id: &str,
        rating: u8,
        comment: Option<String>,
        side: Side,
    ) -> Result<Option<ApplicationRecord>, StoreError> {
        if !(1..=5).contains(&rating) {
            return Err(StoreError::InvalidRating(rating));
        }

        let _guard = self.write_guard().await;
        let mut snapshot = self.load_locked().await?;

        let Some(app) = snapshot.applications.iter_mut().find(|app| app.id == id)
        else {
            return Ok(None);
        };

        match side {
            Side::Student => {
                if app.student_completed {
                    return Err(StoreError::RatingAlreadyRecorded {
                        side: "student",
                        application_id: id.to_string(),
                    });
                }
                app.student_completed = true;
                app.student_rating = Some(rating);
                app.student_comment = comment;
            }
            Side::Employer => {
                if app.employer_completed {
                    return Err(StoreError::RatingAlreadyRecorded {
                        side: "employer",
                        application_id: id.to_string(),
                    });
                }
                app.employer_completed = true;
                app.employer_rating = Some(rating);
                app.employer_comment = comment;
            }
        }

        let updated = app.clone();
        self.persist(&snapshot).await?;
        Ok(Some(updated))
    }
}

/// Which party of an application is acting.
#[derive(Debug, Clone, Copy)]
enum Side {
    Student,
    Employer,
}
