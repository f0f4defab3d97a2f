//! # BlueForce Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The session reconciler and its state machine
//! - Port/adapter interfaces (traits) for the identity provider and the
//!   remote profile table
//! - The row-to-profile mapping with its fixed fallback table
//!
//! ## Architecture Principles
//! - Only depends on `blueforce-domain`
//! - No HTTP or storage code
//! - All external dependencies via traits

pub mod session;

// Re-export specific items to avoid ambiguity
pub use session::mapper::{profile_from_principal, profile_from_registration, profile_from_row};
pub use session::ports::{IdentityProvider, ProfileTable};
pub use session::service::{SessionPhase, SessionReconciler};
pub use session::strategy::SessionStrategy;
pub use session::token::LivenessToken;
