//! User Repository - Accounts and the Employer Moderation Flow
//!
//! CRUD over users plus the role/status listings the admin screens
//! need. Deleting a user cascades to their jobs and applications in
//! the same save.

use chrono::Utc;
use tracing::{info, instrument};
use uuid::Uuid;

use super::store::{StoreError, WorkflowStore};
use crate::domain::user::{EmployerStatus, NewUser, Role, UserPatch, UserRecord};
use crate::ports::snapshot_store::SnapshotStore;

impl<S: SnapshotStore> WorkflowStore<S> {
    /// Register a user. Fails if the email is already taken.
    #[instrument(skip(self, new), fields(role = %new.role))]
    pub async fn create_user(&self, new: NewUser) -> Result<UserRecord, StoreError> {
        let _guard = self.write_guard().await;
        let mut snapshot = self.load_locked().await?;

        if snapshot.users.iter().any(|user| user.email == new.email) {
            return Err(StoreError::DuplicateEmail(new.email));
        }

        let created = UserRecord {
            id: Uuid::new_v4().to_string(),
            role: new.role,
            name: new.name,
            company_name: new.company_name,
            avatar_url: None,
            company_logo_url: None,
            age: None,
            city: new.city,
            phone: new.phone,
            email: new.email,
            password_hash: new.password_hash,
            employer_status: new.employer_status,
            created_at: Utc::now(),
        };
        snapshot.users.push(created.clone());
        self.persist(&snapshot).await?;

        info!(user_id = %created.id, role = %created.role, "User created");
        Ok(created)
    }

    /// Look a user up by exact id.
    pub async fn get_user(&self, id: &str) -> Result<Option<UserRecord>, StoreError> {
        let snapshot = self.load().await?;
        Ok(snapshot.users.into_iter().find(|user| user.id == id))
    }

    /// Look a user up by exact email (callers lowercase beforehand).
    pub async fn find_user_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserRecord>, StoreError> {
        let snapshot = self.load().await?;
        Ok(snapshot.users.into_iter().find(|user| user.email == email))
    }

    /// Shallow-merge a patch over a user. `Ok(None)` if the id is unknown.
    #[instrument(skip(self, patch))]
    pub async fn update_user(
        &self,
        id: &str,
        patch: UserPatch,
    ) -> Result<Option<UserRecord>, StoreError> {
        let _guard = self.write_guard().await;
        let mut snapshot = self.load_locked().await?;

        let Some(user) = snapshot.users.iter_mut().find(|user| user.id == id) else {
            return Ok(None);
        };
        user.apply(patch);
        let updated = user.clone();
        self.persist(&snapshot).await?;
        Ok(Some(updated))
    }

    /// Mark an employer account approved. `Ok(None)` if the id is unknown.
    pub async fn approve_employer(
        &self,
        id: &str,
    ) -> Result<Option<UserRecord>, StoreError> {
        self.update_user(
            id,
            UserPatch {
                employer_status: Some(EmployerStatus::Approved),
                ..UserPatch::default()
            },
        )
        .await
    }

    /// Delete a user and cascade to everything they own.
    ///
    /// Removes every job with `employer_id == id` and every application
    /// with `student_id == id`. Deleting an unknown id is a no-op save.
    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: &str) -> Result<(), StoreError> {
        let _guard = self.write_guard().await;
        let mut snapshot = self.load_locked().await?;

        let users_before = snapshot.users.len();
        snapshot.users.retain(|user| user.id != id);
        snapshot.jobs.retain(|job| job.employer_id != id);
        snapshot
            .applications
            .retain(|application| application.student_id != id);

        self.persist(&snapshot).await?;
        info!(
            user_id = %id,
            removed = users_before - snapshot.users.len(),
            "User deleted with cascade"
        );
        Ok(())
    }

    /// List users holding any of the given roles, newest first.
    pub async fn list_users_by_role(
        &self,
        roles: &[Role],
    ) -> Result<Vec<UserRecord>, StoreError> {
        let snapshot = self.load().await?;
        let mut users: Vec<UserRecord> = snapshot
            .users
            .into_iter()
            .filter(|user| roles.contains(&user.role))
            .collect();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(users)
    }

    /// List employers in a given moderation state, newest first.
    pub async fn list_employers_by_status(
        &self,
        status: EmployerStatus,
    ) -> Result<Vec<UserRecord>, StoreError> {
        let snapshot = self.load().await?;
        let mut users: Vec<UserRecord> = snapshot
            .users
            .into_iter()
            .filter(|user| {
                user.role == Role::Employer && user.employer_status == Some(status)
            })
            .collect();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(users)
    }
}
