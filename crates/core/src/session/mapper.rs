//! Row-to-profile translation
//!
//! The remote table and the in-memory profile disagree on field names; this
//! module owns the fixed fallback table between them. The row side wins only
//! when a value is present, otherwise the documented default applies.
//!
//! Known information loss: the row has no last-name column, so `last_name`
//! is always emptied. That is the stored schema's shape, not a bug here.

use blueforce_domain::{Principal, Profile, ProfileRow, RegistrationData, Role};
use chrono::Utc;

/// Build a profile from a stored row
///
/// Fallback table:
/// - `id` ← `row.user_id`
/// - `email` ← `row.email`, else the principal's email, else empty
/// - `role` ← `row.type`, default `worker`
/// - `first_name` ← `row.full_name`, default empty
/// - `last_name` ← empty, always
/// - `phone_number` ← `row.mobile`, default empty
/// - `is_approved` ← always true
/// - both timestamps ← `row.created_at`, else now
/// - optional fields pass through unchanged when present
#[must_use]
pub fn profile_from_row(row: &ProfileRow, principal: &Principal) -> Profile {
    let created = row.created_at.unwrap_or_else(Utc::now);
    Profile {
        id: row.user_id.clone(),
        email: row
            .email
            .clone()
            .or_else(|| principal.email.clone())
            .unwrap_or_default(),
        role: row.role_tag.as_deref().map_or_else(Role::worker, Role::from),
        first_name: row.full_name.clone().unwrap_or_default(),
        last_name: String::new(),
        phone_number: row.mobile.clone().unwrap_or_default(),
        is_approved: true,
        created_at: created,
        updated_at: created,
        company_name: row.company_name.clone(),
        company_type: None,
        company_size: None,
        industry: None,
        location: row.location.clone(),
        projects: None,
        skills: row.skills.clone(),
        experience: row.experience,
        rating: row.rating,
        completed_jobs: None,
        availability: None,
        bio: row.bio.clone(),
        profile_image: row.profile_photo.clone(),
    }
}

/// Minimal profile for a principal that has no stored row yet
#[must_use]
pub fn profile_from_principal(principal: &Principal) -> Profile {
    Profile::minimal(
        principal.id.clone(),
        principal.email.clone().unwrap_or_default(),
        principal.created_at.unwrap_or_else(Utc::now),
    )
}

/// Profile synthesized at registration time
///
/// A freshly registered principal has no stored row, so the caller-supplied
/// partial data fills the gaps and no lookup is performed.
#[must_use]
pub fn profile_from_registration(
    principal: &Principal,
    email: &str,
    role: Role,
    data: &RegistrationData,
) -> Profile {
    let created = principal.created_at.unwrap_or_else(Utc::now);
    let mut profile = Profile::minimal(
        principal.id.clone(),
        principal.email.clone().unwrap_or_else(|| email.to_string()),
        created,
    );
    profile.role = role;
    profile.first_name = data.first_name.clone().unwrap_or_default();
    profile.last_name = data.last_name.clone().unwrap_or_default();
    profile.phone_number = data.phone_number.clone().unwrap_or_default();
    profile
}
