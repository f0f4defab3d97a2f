//! Reconciled profile types
//!
//! `Profile` is the normalized, UI-facing record produced by the session
//! reconciler. Remote-native field names live on [`ProfileRow`], never here;
//! the translation happens in the core mapper.
//!
//! [`ProfileRow`]: crate::types::row::ProfileRow

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role tag attached to a profile.
///
/// Deliberately an open string rather than a closed enum: the remote table
/// may carry tags outside the known set, and those must be accepted and
/// round-tripped unchanged. The three known tags are exposed as constants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(String);

impl Role {
    pub const WORKER: &'static str = "worker";
    pub const EMPLOYER: &'static str = "employer";
    pub const ADMIN: &'static str = "admin";

    /// Create a role from an arbitrary tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// The default role assigned when the remote row carries no tag.
    #[must_use]
    pub fn worker() -> Self {
        Self(Self::WORKER.to_string())
    }

    #[must_use]
    pub fn employer() -> Self {
        Self(Self::EMPLOYER.to_string())
    }

    #[must_use]
    pub fn admin() -> Self {
        Self(Self::ADMIN.to_string())
    }

    /// Whether the tag is one of the well-known roles.
    #[must_use]
    pub fn is_known(&self) -> bool {
        matches!(self.0.as_str(), Self::WORKER | Self::EMPLOYER | Self::ADMIN)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Role {
    fn default() -> Self {
        Self::worker()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Role {
    fn from(tag: &str) -> Self {
        Self(tag.to_string())
    }
}

impl From<String> for Role {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}

/// Daily availability window (times as "HH:MM" strings, provider-defined)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub start: String,
    pub end: String,
}

/// Worker availability with an optional per-day schedule
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Availability {
    pub is_available: bool,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub schedule: BTreeMap<String, DaySchedule>,
}

/// Normalized in-memory profile consumed by the UI layer
///
/// Role-specific fields are optional at the type level. Accessors degrade to
/// zero/empty defaults when a field is absent so a role-tag match never
/// turns into an error downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub email: String,
    pub role: Role,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    /// Always true in observed flows; no approval workflow exists.
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    // Employer-shaped fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<String>>,

    // Worker-shaped fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_jobs: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<Availability>,

    // General fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

impl Profile {
    /// Minimal profile for a principal with no stored row
    #[must_use]
    pub fn minimal(
        id: impl Into<String>,
        email: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            role: Role::worker(),
            first_name: String::new(),
            last_name: String::new(),
            phone_number: String::new(),
            is_approved: true,
            created_at,
            updated_at: created_at,
            company_name: None,
            company_type: None,
            company_size: None,
            industry: None,
            location: None,
            projects: None,
            skills: None,
            experience: None,
            rating: None,
            completed_jobs: None,
            availability: None,
            bio: None,
            profile_image: None,
        }
    }

    /// Skills, or an empty list when absent
    #[must_use]
    pub fn skills(&self) -> &[String] {
        self.skills.as_deref().unwrap_or(&[])
    }

    /// Years of experience, zero when absent
    #[must_use]
    pub fn experience(&self) -> u32 {
        self.experience.unwrap_or(0)
    }

    /// Rating, zero when absent
    #[must_use]
    pub fn rating(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }

    /// Completed-job count, zero when absent
    #[must_use]
    pub fn completed_jobs(&self) -> u32 {
        self.completed_jobs.unwrap_or(0)
    }

    /// Availability, defaulting to not-available with no schedule
    #[must_use]
    pub fn availability(&self) -> Availability {
        self.availability.clone().unwrap_or_default()
    }
}

/// Caller-supplied partial data accepted at registration
///
/// Only the fields the registration short-circuit consumes; everything else
/// comes from the remote row on a later lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistrationData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}
