//! Local profile store
//!
//! CRUD over a client-persisted sequence of [`LocalUser`] records, used
//! independently of (and unsynchronized with) the session reconciler. The
//! store never returns errors: storage failures degrade to a process-wide
//! in-memory fallback and are logged, lookups against missing ids come back
//! as `None`.

use blueforce_domain::constants::{
    CURRENT_USER_KEY, DEMO_USER_EMAIL, DEMO_USER_ID, DEMO_USER_LOCATION, DEMO_USER_NAME,
    DEMO_USER_PROFESSION, DEMO_USER_RATING, USERS_KEY,
};
use blueforce_domain::{LocalUser, LocalUserUpdate, NewLocalUser, Role};
use chrono::{NaiveDate, Utc};
use once_cell::sync::Lazy;
use tracing::warn;

use super::storage::{KeyValueStorage, MemoryStorage};

/// Process-wide fallback sequence, reached for when persistent storage
/// cannot be accessed. Lives for the whole process by design.
static FALLBACK: Lazy<MemoryStorage> = Lazy::new(MemoryStorage::new);

/// Client-persisted user store with a demo seed and lookup-or-create login
pub struct LocalProfileStore {
    storage: Box<dyn KeyValueStorage>,
}

impl LocalProfileStore {
    pub fn new(storage: Box<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// Seed the demo record when no stored sequence exists
    ///
    /// Never overwrites an existing sequence, even an empty one. Storage
    /// failure seeds the in-memory fallback instead of propagating.
    pub fn initialize(&self) {
        match self.storage.get(USERS_KEY) {
            Ok(Some(_)) => {}
            Ok(None) => self.write_users(&[demo_user()]),
            Err(err) => {
                warn!(error = %err, "storage unavailable; seeding in-memory fallback");
                if FALLBACK.get(USERS_KEY).ok().flatten().is_none() {
                    let _ = FALLBACK.set(USERS_KEY, &encode(&[demo_user()]));
                }
            }
        }
    }

    /// The full stored sequence, or the fallback sequence, or empty
    #[must_use]
    pub fn list(&self) -> Vec<LocalUser> {
        let raw = match self.storage.get(USERS_KEY) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(error = %err, "could not read users; using in-memory fallback");
                FALLBACK.get(USERS_KEY).ok().flatten()
            }
        };
        raw.and_then(|json| {
            serde_json::from_str(&json)
                .map_err(|err| warn!(error = %err, "stored user sequence unparsable"))
                .ok()
        })
        .unwrap_or_default()
    }

    /// Append a new record with the next id and today's date stamps
    ///
    /// Not idempotent: identical input registered twice yields two records
    /// with distinct sequential ids.
    pub fn register(&self, new: NewLocalUser) -> LocalUser {
        let mut users = self.list();
        let user = LocalUser::from_new(new, next_id(&users), today());
        users.push(user.clone());
        self.write_users(&users);
        user
    }

    /// Look a user up by exact email, creating one on the fly if absent
    ///
    /// Either way the record becomes the current user; every call rewrites
    /// the current-user slot.
    pub fn login_by_email(&self, email: &str) -> LocalUser {
        let mut users = self.list();
        let user = match users.iter().find(|user| user.email == email) {
            Some(user) => user.clone(),
            None => {
                let name = email.split('@').next().unwrap_or(email).to_string();
                let user = LocalUser::from_new(
                    NewLocalUser { name, email: email.to_string(), ..NewLocalUser::default() },
                    next_id(&users),
                    today(),
                );
                users.push(user.clone());
                self.write_users(&users);
                user
            }
        };
        self.write_current(&user);
        user
    }

    /// Clear the current-user pointer; the sequence is untouched
    pub fn logout(&self) {
        if let Err(err) = self.storage.remove(CURRENT_USER_KEY) {
            warn!(error = %err, "could not clear current user in storage");
        }
        let _ = FALLBACK.remove(CURRENT_USER_KEY);
    }

    /// The current user, or `None` when the pointer is absent or unparsable
    #[must_use]
    pub fn current(&self) -> Option<LocalUser> {
        let raw = match self.storage.get(CURRENT_USER_KEY) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(error = %err, "could not read current user; using in-memory fallback");
                FALLBACK.get(CURRENT_USER_KEY).ok().flatten()
            }
        };
        raw.and_then(|json| serde_json::from_str(&json).ok())
    }

    /// Merge updates over the record with the given id
    ///
    /// Missing id → `None` and the stored sequence is left untouched.
    /// Otherwise the record is restamped and written back; when it is also
    /// the current user, the pointer copy is updated too so the two
    /// persisted copies never diverge.
    pub fn update_profile(&self, id: u64, updates: LocalUserUpdate) -> Option<LocalUser> {
        let mut users = self.list();
        let user = users.iter_mut().find(|user| user.id == id)?;
        user.apply(updates);
        user.last_active = today();
        let updated = user.clone();
        self.write_users(&users);

        if self.current().is_some_and(|current| current.id == id) {
            self.write_current(&updated);
        }
        Some(updated)
    }

    fn write_users(&self, users: &[LocalUser]) {
        let json = encode(users);
        if let Err(err) = self.storage.set(USERS_KEY, &json) {
            warn!(error = %err, "could not persist users; writing in-memory fallback");
            let _ = FALLBACK.set(USERS_KEY, &json);
        }
    }

    fn write_current(&self, user: &LocalUser) {
        let json = serde_json::to_string(user).unwrap_or_default();
        if let Err(err) = self.storage.set(CURRENT_USER_KEY, &json) {
            warn!(error = %err, "could not persist current user; writing in-memory fallback");
            let _ = FALLBACK.set(CURRENT_USER_KEY, &json);
        }
    }
}

fn encode(users: &[LocalUser]) -> String {
    serde_json::to_string(users).unwrap_or_else(|_| "[]".to_string())
}

fn next_id(users: &[LocalUser]) -> u64 {
    users.iter().map(|user| user.id).max().map_or(1, |max| max + 1)
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

fn demo_user() -> LocalUser {
    LocalUser::from_new(
        NewLocalUser {
            name: DEMO_USER_NAME.to_string(),
            email: DEMO_USER_EMAIL.to_string(),
            role_tag: Some(Role::WORKER.to_string()),
            profession: Some(DEMO_USER_PROFESSION.to_string()),
            location: Some(DEMO_USER_LOCATION.to_string()),
            rating: Some(DEMO_USER_RATING),
            verified: Some(true),
            ..NewLocalUser::default()
        },
        DEMO_USER_ID,
        today(),
    )
}
