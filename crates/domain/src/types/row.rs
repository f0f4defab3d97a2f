//! Remote-native records
//!
//! `ProfileRow` keeps the profile table's own field naming (`full_name`,
//! `mobile`, `type`, `profile_photo`). The core mapper owns the translation
//! into [`Profile`]; nothing else should read these fields directly.
//!
//! [`Profile`]: crate::types::profile::Profile

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity-provider account handle, distinct from the application profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Principal {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), email: None, created_at: None }
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }
}

/// Row from the remote profile table, keyed by the owning principal's id
///
/// `role_tag` serializes as `type`, the column name the table actually uses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileRow {
    pub user_id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(rename = "type", default)]
    pub role_tag: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub profile_photo: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub experience: Option<u32>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl ProfileRow {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self { user_id: user_id.into(), ..Self::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_tag_maps_to_type_column() {
        let row = ProfileRow {
            role_tag: Some("employer".into()),
            ..ProfileRow::new("uid-1")
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["type"], "employer");

        let back: ProfileRow = serde_json::from_value(json).unwrap();
        assert_eq!(back.role_tag.as_deref(), Some("employer"));
    }

    #[test]
    fn sparse_rows_deserialize() {
        let row: ProfileRow = serde_json::from_str(r#"{"user_id":"uid-2"}"#).unwrap();
        assert_eq!(row.user_id, "uid-2");
        assert!(row.full_name.is_none());
        assert!(row.created_at.is_none());
    }
}
