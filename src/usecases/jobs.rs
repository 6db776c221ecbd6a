//! Job Repository - Postings, Filtered Listings, Fuzzy Lookup
//!
//! `get_job` is the fuzzy one: ids arrive through shared links and
//! lose hyphens or leading characters on the way, so lookup degrades
//! gracefully through compact and partial matching. Updates and
//! deletes require the exact id.

use std::collections::HashSet;

use chrono::Utc;
use tracing::{info, instrument};
use uuid::Uuid;

use super::store::{StoreError, WorkflowStore};
use crate::domain::job::{JobFilter, JobPatch, JobRecord, NewJob};
use crate::domain::resolve::resolve_id;
use crate::ports::snapshot_store::SnapshotStore;

impl<S: SnapshotStore> WorkflowStore<S> {
    /// Publish a job.
    #[instrument(skip(self, new), fields(employer_id = %new.employer_id))]
    pub async fn create_job(&self, new: NewJob) -> Result<JobRecord, StoreError> {
        let _guard = self.write_guard().await;
        let mut snapshot = self.load_locked().await?;

        let created = JobRecord {
            id: Uuid::new_v4().to_string(),
            employer_id: new.employer_id,
            title: new.title,
            city: new.city,
            start_date: new.start_date,
            end_date: new.end_date,
            start_time: new.start_time,
            end_time: new.end_time,
            daily_wage: new.daily_wage,
            description: new.description,
            image_url: new.image_url,
            image_urls: new.image_urls,
            is_active: new.is_active,
            created_at: Utc::now(),
        };
        snapshot.jobs.push(created.clone());
        self.persist(&snapshot).await?;

        info!(job_id = %created.id, city = %created.city, "Job created");
        Ok(created)
    }

    /// Resolve a possibly-mistyped job id.
    ///
    /// Tries exact, hyphen-stripped, suffix, then substring matching,
    /// in that order. `Ok(None)` when nothing matches.
    pub async fn get_job(&self, id: &str) -> Result<Option<JobRecord>, StoreError> {
        let snapshot = self.load().await?;
        let ids: Vec<&str> = snapshot.jobs.iter().map(|job| job.id.as_str()).collect();
        Ok(resolve_id(id, &ids).map(|index| snapshot.jobs[index].clone()))
    }

    /// Shallow-merge a patch over a job. Exact id only; `Ok(None)` if unknown.
    #[instrument(skip(self, patch))]
    pub async fn update_job(
        &self,
        id: &str,
        patch: JobPatch,
    ) -> Result<Option<JobRecord>, StoreError> {
        let _guard = self.write_guard().await;
        let mut snapshot = self.load_locked().await?;

        let Some(job) = snapshot.jobs.iter_mut().find(|job| job.id == id) else {
            return Ok(None);
        };
        job.apply(patch);
        let updated = job.clone();
        self.persist(&snapshot).await?;
        Ok(Some(updated))
    }

    /// Delete a job and every application that referenced it.
    #[instrument(skip(self))]
    pub async fn delete_job(&self, id: &str) -> Result<(), StoreError> {
        let _guard = self.write_guard().await;
        let mut snapshot = self.load_locked().await?;

        snapshot.jobs.retain(|job| job.id != id);
        snapshot
            .applications
            .retain(|application| application.job_id != id);

        self.persist(&snapshot).await?;
        info!(job_id = %id, "Job deleted with cascade");
        Ok(())
    }

    /// List jobs matching a filter, newest first.
    ///
    /// Filters compose as a logical AND. `approved_only` evaluates the
    /// owner's moderation state at query time — it is never stored on
    /// the job.
    pub async fn list_jobs(&self, filter: &JobFilter) -> Result<Vec<JobRecord>, StoreError> {
        let snapshot = self.load().await?;

        let approved: HashSet<&str> = if filter.approved_only {
            snapshot
                .users
                .iter()
                .filter(|user| user.is_approved_employer())
                .map(|user| user.id.as_str())
                .collect()
        } else {
            HashSet::new()
        };

        let mut jobs: Vec<JobRecord> = snapshot
            .jobs
            .iter()
            .filter(|job| {
                filter
                    .city
                    .as_ref()
                    .is_none_or(|city| &job.city == city)
            })
            .filter(|job| {
                filter
                    .employer_id
                    .as_ref()
                    .is_none_or(|employer| &job.employer_id == employer)
            })
            .filter(|job| !filter.active_only || job.is_active)
            .filter(|job| !filter.approved_only || approved.contains(job.employer_id.as_str()))
            .cloned()
            .collect();

        jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(jobs)
    }
}
