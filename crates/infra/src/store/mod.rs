//! Local fallback store
//!
//! Two string-keyed slots in client storage: a JSON array of user records
//! and a JSON-encoded current-user pointer.

pub mod local_users;
pub mod storage;
pub mod strategy;

pub use local_users::LocalProfileStore;
