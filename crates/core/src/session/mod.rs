//! Session reconciliation
//!
//! Produces exactly one normalized [`Profile`](blueforce_domain::Profile)
//! (or none) representing "who is logged in right now" and keeps it
//! consistent across resolve-on-start, login, registration, and logout.

pub mod mapper;
pub mod ports;
pub mod service;
pub mod strategy;
pub mod token;
