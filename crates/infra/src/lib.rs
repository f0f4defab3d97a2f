//! # BlueForce Infra
//!
//! Infrastructure adapters behind the core ports:
//! - JSON key/value storage (file-backed, with a process-wide in-memory
//!   fallback) and the local profile store built on it
//! - reqwest-based clients for the remote identity provider and profile
//!   table
//! - configuration loading (environment first, file fallback)
//!
//! ## Strategy selection
//! `Config::session_backend` picks which
//! [`SessionStrategy`](blueforce_core::SessionStrategy) an application wires
//! in: `remote` pairs the HTTP adapters with the core
//! [`SessionReconciler`](blueforce_core::SessionReconciler); `local` uses
//! [`LocalProfileStore`](store::LocalProfileStore) on its own. The two keep
//! their divergent user models and are never merged.

pub mod config;
pub mod remote;
pub mod store;

pub use remote::identity::HttpIdentityProvider;
pub use remote::profiles::HttpProfileTable;
pub use store::storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::LocalProfileStore;
