//! Domain types and models

pub mod config;
pub mod local;
pub mod profile;
pub mod row;
