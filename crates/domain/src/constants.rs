//! Application constants
//!
//! Centralized location for domain-level constants shared by the session
//! reconciler and the local profile store.

// Local key/value storage slots
pub const USERS_KEY: &str = "blueforce_users";
pub const CURRENT_USER_KEY: &str = "blueforce_current_user";

// Seed record written on first store initialization
pub const DEMO_USER_ID: u64 = 1;
pub const DEMO_USER_NAME: &str = "Demo User";
pub const DEMO_USER_EMAIL: &str = "user@example.com";
pub const DEMO_USER_PROFESSION: &str = "Electrician";
pub const DEMO_USER_LOCATION: &str = "Mumbai";
pub const DEMO_USER_RATING: f64 = 4.8;

// Remote endpoints (relative to the configured base URL)
pub const AUTH_SIGNUP_PATH: &str = "/auth/v1/signup";
pub const AUTH_TOKEN_PATH: &str = "/auth/v1/token";
pub const AUTH_LOGOUT_PATH: &str = "/auth/v1/logout";
pub const AUTH_USER_PATH: &str = "/auth/v1/user";
pub const PROFILES_TABLE_PATH: &str = "/rest/v1/profiles";
