//! Remote service adapters
//!
//! reqwest-backed implementations of the core ports against the
//! backend-as-a-service: GoTrue-style auth endpoints for the identity
//! provider, PostgREST-style table endpoints for the profile table.

pub mod identity;
pub mod profiles;

pub(crate) mod http;
