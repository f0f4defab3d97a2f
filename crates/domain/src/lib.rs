//! # BlueForce Domain
//!
//! Business domain types and models for the BlueForce session core.
//!
//! This crate contains:
//! - Profile, row, and local-store record types
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other BlueForce crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use errors::{BlueForceError, Result};
pub use types::config::{Config, RemoteConfig, SessionBackend, StoreConfig};
pub use types::local::{LocalUser, LocalUserUpdate, NewLocalUser};
pub use types::profile::{Availability, DaySchedule, Profile, RegistrationData, Role};
pub use types::row::{Principal, ProfileRow};
