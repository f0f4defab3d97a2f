//! Local profile store records
//!
//! Independent of the remote table: its own integer ids, date-only stamps,
//! and no synchronization or migration against remote rows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// User record kept by the local fallback store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalUser {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub role_tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profession: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    pub registered_date: NaiveDate,
    pub last_active: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jobs_posted: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hiring_volume: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gstin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
}

/// Registration input: a [`LocalUser`] minus id and date stamps
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewLocalUser {
    pub name: String,
    pub email: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub role_tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profession: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hiring_volume: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gstin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
}

/// Partial update merged over an existing [`LocalUser`]
///
/// `None` fields leave the stored value untouched; `last_active` is always
/// restamped by the store, never by the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocalUserUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub role_tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profession: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jobs_posted: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hiring_volume: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gstin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
}

impl LocalUser {
    /// Build a stored record from registration input
    #[must_use]
    pub fn from_new(new: NewLocalUser, id: u64, today: NaiveDate) -> Self {
        Self {
            id,
            name: new.name,
            email: new.email,
            role_tag: new.role_tag,
            profession: new.profession,
            location: new.location,
            rating: new.rating,
            verified: new.verified,
            registered_date: today,
            last_active: today,
            status: None,
            jobs_posted: None,
            company_name: new.company_name,
            company_type: new.company_type,
            profile_photo: new.profile_photo,
            hiring_volume: new.hiring_volume,
            preferred_skills: new.preferred_skills,
            gstin: new.gstin,
            mobile: new.mobile,
        }
    }

    /// Merge a partial update over this record, in place
    pub fn apply(&mut self, updates: LocalUserUpdate) {
        if let Some(name) = updates.name {
            self.name = name;
        }
        if let Some(email) = updates.email {
            self.email = email;
        }
        if let Some(role_tag) = updates.role_tag {
            self.role_tag = Some(role_tag);
        }
        if let Some(profession) = updates.profession {
            self.profession = Some(profession);
        }
        if let Some(location) = updates.location {
            self.location = Some(location);
        }
        if let Some(rating) = updates.rating {
            self.rating = Some(rating);
        }
        if let Some(verified) = updates.verified {
            self.verified = Some(verified);
        }
        if let Some(status) = updates.status {
            self.status = Some(status);
        }
        if let Some(jobs_posted) = updates.jobs_posted {
            self.jobs_posted = Some(jobs_posted);
        }
        if let Some(company_name) = updates.company_name {
            self.company_name = Some(company_name);
        }
        if let Some(company_type) = updates.company_type {
            self.company_type = Some(company_type);
        }
        if let Some(profile_photo) = updates.profile_photo {
            self.profile_photo = Some(profile_photo);
        }
        if let Some(hiring_volume) = updates.hiring_volume {
            self.hiring_volume = Some(hiring_volume);
        }
        if let Some(preferred_skills) = updates.preferred_skills {
            self.preferred_skills = Some(preferred_skills);
        }
        if let Some(gstin) = updates.gstin {
            self.gstin = Some(gstin);
        }
        if let Some(mobile) = updates.mobile {
            self.mobile = Some(mobile);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 28).unwrap()
    }

    #[test]
    fn from_new_stamps_both_dates() {
        let user = LocalUser::from_new(
            NewLocalUser {
                name: "Asha".into(),
                email: "asha@example.com".into(),
                ..NewLocalUser::default()
            },
            7,
            today(),
        );
        assert_eq!(user.id, 7);
        assert_eq!(user.registered_date, today());
        assert_eq!(user.last_active, today());
    }

    #[test]
    fn apply_merges_only_present_fields() {
        let mut user = LocalUser::from_new(
            NewLocalUser {
                name: "Asha".into(),
                email: "asha@example.com".into(),
                location: Some("Mumbai".into()),
                ..NewLocalUser::default()
            },
            1,
            today(),
        );

        user.apply(LocalUserUpdate { location: Some("Pune".into()), ..LocalUserUpdate::default() });

        assert_eq!(user.location.as_deref(), Some("Pune"));
        assert_eq!(user.name, "Asha");
        assert_eq!(user.email, "asha@example.com");
    }
}
