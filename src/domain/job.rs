//! Job entity — a short-term posting published by an employer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored job document.
///
/// `employer_id` references a `UserRecord`; user deletion cascades to
/// owned jobs, but joins still treat the reference as possibly dangling
/// rather than assuming referential integrity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecord {
    /// Unique record ID (UUID v4), assigned on create.
    pub id: String,
    /// Owning employer's user ID.
    pub employer_id: String,
    /// Listing title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// City where the work takes place.
    pub city: String,
    /// First working day.
    pub start_date: DateTime<Utc>,
    /// Last working day. Expected `>= start_date`; not enforced here.
    pub end_date: DateTime<Utc>,
    /// Shift start, free-form ("10:00").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// Shift end, free-form ("18:00").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    /// Posted wage per day.
    pub daily_wage: f64,
    /// Free-text description.
    pub description: String,
    /// Legacy single cover image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Ordered gallery; the first entry is the cover.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_urls: Option<Vec<String>>,
    /// Whether the employer is still taking applications.
    pub is_active: bool,
    /// Creation timestamp, immutable.
    pub created_at: DateTime<Utc>,
}

impl JobRecord {
    /// Cover image, preferring the gallery over the legacy field.
    pub fn cover_image(&self) -> Option<&str> {
        self.image_urls
            .as_ref()
            .and_then(|urls| urls.first())
            .or(self.image_url.as_ref())
            .map(String::as_str)
    }
}

/// Fields supplied by the caller when publishing a job.
#[derive(Debug, Clone)]
pub struct NewJob {
    pub employer_id: String,
    pub title: Option<String>,
    pub city: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub daily_wage: f64,
    pub description: String,
    pub image_url: Option<String>,
    pub image_urls: Option<Vec<String>>,
    pub is_active: bool,
}

/// Shallow-merge patch for `update_job`. `None` = unchanged.
#[derive(Debug, Clone, Default)]
pub struct JobPatch {
    pub title: Option<String>,
    pub city: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub daily_wage: Option<f64>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub image_urls: Option<Vec<String>>,
    pub is_active: Option<bool>,
}

impl JobRecord {
    /// Apply a patch in place. Absent patch fields leave the record as is.
    pub fn apply(&mut self, patch: JobPatch) {
        if let Some(title) = patch.title {
            self.title = Some(title);
        }
        if let Some(city) = patch.city {
            self.city = city;
        }
        if let Some(start_date) = patch.start_date {
            self.start_date = start_date;
        }
        if let Some(end_date) = patch.end_date {
            self.end_date = end_date;
        }
        if let Some(start_time) = patch.start_time {
            self.start_time = Some(start_time);
        }
        if let Some(end_time) = patch.end_time {
            self.end_time = Some(end_time);
        }
        if let Some(daily_wage) = patch.daily_wage {
            self.daily_wage = daily_wage;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = Some(image_url);
        }
        if let Some(image_urls) = patch.image_urls {
            self.image_urls = Some(image_urls);
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
    }
}

/// AND-composed filter for job listings.
#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    /// Keep jobs in this exact city.
    pub city: Option<String>,
    /// Keep jobs owned by this employer.
    pub employer_id: Option<String>,
    /// Keep only active jobs.
    pub active_only: bool,
    /// Keep only jobs whose owner is an approved employer.
    pub approved_only: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job() -> JobRecord {
        JobRecord {
            id: "j-1".to_string(),
            employer_id: "u-2".to_string(),
            title: Some("Barista".to_string()),
            city: "Ankara".to_string(),
            start_date: Utc::now(),
            end_date: Utc::now(),
            start_time: None,
            end_time: None,
            daily_wage: 700.0,
            description: "Counter shift".to_string(),
            image_url: Some("/uploads/legacy.jpg".to_string()),
            image_urls: None,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_cover_prefers_gallery_over_legacy() {
        let mut record = job();
        assert_eq!(record.cover_image(), Some("/uploads/legacy.jpg"));
        record.image_urls =
            Some(vec!["/uploads/a.jpg".to_string(), "/uploads/b.jpg".to_string()]);
        assert_eq!(record.cover_image(), Some("/uploads/a.jpg"));
    }

    #[test]
    fn test_patch_merges_shallowly() {
        let mut record = job();
        record.apply(JobPatch {
            daily_wage: Some(900.0),
            is_active: Some(false),
            ..JobPatch::default()
        });
        assert_eq!(record.daily_wage, 900.0);
        assert!(!record.is_active);
        assert_eq!(record.title.as_deref(), Some("Barista"));
    }
}
