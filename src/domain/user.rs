//! User entity — admins, employers, and students.
//!
//! One record shape serves all three roles; role-specific fields
//! (`company_name`, `employer_status`, `age`) are optional and simply
//! absent where they do not apply. The store persists `password_hash`
//! opaquely — hashing and verification live behind the
//! `PasswordHasher` port.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account role. Exactly one per user, fixed at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Employer,
    Student,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "ADMIN"),
            Self::Employer => write!(f, "EMPLOYER"),
            Self::Student => write!(f, "STUDENT"),
        }
    }
}

/// Moderation state of an employer account.
///
/// Only meaningful when `role == Role::Employer`; absent on other roles.
/// Jobs of a `Pending` employer are hidden from student-facing listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmployerStatus {
    Pending,
    Approved,
}

/// A stored user document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    /// Unique record ID (UUID v4), assigned on create.
    pub id: String,
    /// Account role.
    pub role: Role,
    /// Personal name. Students always have one; employers may rely on
    /// `company_name` instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Company display name (employers).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    /// Profile picture URL, as returned by the blob store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Company logo URL (employers).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_logo_url: Option<String>,
    /// Student age in years.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// City of residence / operation.
    pub city: String,
    /// Contact phone, free-form.
    pub phone: String,
    /// Login email. Unique across all users; the store rejects duplicates.
    pub email: String,
    /// One-way password digest produced by the `PasswordHasher` port.
    pub password_hash: String,
    /// Moderation state, employers only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employer_status: Option<EmployerStatus>,
    /// Creation timestamp, immutable.
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    /// Whether this user is an employer cleared to publish jobs.
    pub fn is_approved_employer(&self) -> bool {
        self.role == Role::Employer
            && self.employer_status == Some(EmployerStatus::Approved)
    }
}

/// Fields supplied by the caller when registering a user.
///
/// `id` and `created_at` are always assigned by the store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub role: Role,
    pub name: Option<String>,
    pub company_name: Option<String>,
    pub city: String,
    pub phone: String,
    pub email: String,
    pub password_hash: String,
    pub employer_status: Option<EmployerStatus>,
}

/// Shallow-merge patch for `update_user`.
///
/// `None` means "leave unchanged" — there is no way to clear a field
/// through a patch, by contract with the form layer.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub company_name: Option<String>,
    pub avatar_url: Option<String>,
    pub company_logo_url: Option<String>,
    pub age: Option<u32>,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub employer_status: Option<EmployerStatus>,
}

impl UserRecord {
    /// Apply a patch in place. Absent patch fields leave the record as is.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = Some(name);
        }
        if let Some(company_name) = patch.company_name {
            self.company_name = Some(company_name);
        }
        if let Some(avatar_url) = patch.avatar_url {
            self.avatar_url = Some(avatar_url);
        }
        if let Some(company_logo_url) = patch.company_logo_url {
            self.company_logo_url = Some(company_logo_url);
        }
        if let Some(age) = patch.age {
            self.age = Some(age);
        }
        if let Some(city) = patch.city {
            self.city = city;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(status) = patch.employer_status {
            self.employer_status = Some(status);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student() -> UserRecord {
        UserRecord {
            id: "u-1".to_string(),
            role: Role::Student,
            name: Some("Ece".to_string()),
            company_name: None,
            avatar_url: None,
            company_logo_url: None,
            age: Some(21),
            city: "Ankara".to_string(),
            phone: "0500 111 11 11".to_string(),
            email: "ece@example.com".to_string(),
            password_hash: "digest".to_string(),
            employer_status: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_patch_leaves_absent_fields_untouched() {
        let mut user = student();
        user.apply(UserPatch {
            city: Some("İzmir".to_string()),
            ..UserPatch::default()
        });
        assert_eq!(user.city, "İzmir");
        assert_eq!(user.name.as_deref(), Some("Ece"));
        assert_eq!(user.age, Some(21));
    }

    #[test]
    fn test_approved_employer_requires_both_role_and_status() {
        let mut user = student();
        assert!(!user.is_approved_employer());
        user.employer_status = Some(EmployerStatus::Approved);
        assert!(!user.is_approved_employer());
        user.role = Role::Employer;
        assert!(user.is_approved_employer());
    }

    #[test]
    fn test_role_serializes_screaming_snake() {
        assert_eq!(serde_json::to_string(&Role::Employer).unwrap(), "\"EMPLOYER\"");
        assert_eq!(format!("{}", Role::Student), "STUDENT");
    }
}
