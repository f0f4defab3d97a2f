//! Port interfaces for session reconciliation
//!
//! These traits define the boundaries between core business logic and the
//! infrastructure implementations backed by the remote service. Credential
//! verification, persistence, and query execution all live behind them.

use async_trait::async_trait;
use blueforce_domain::{Principal, ProfileRow, Result};

/// Trait for the external identity provider
///
/// Failures carry the provider's message verbatim in
/// [`BlueForceError::Auth`](blueforce_domain::BlueForceError::Auth).
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolve the current principal from provider-held session state,
    /// with no credentials supplied. `None` when nobody is signed in.
    async fn get_current_principal(&self) -> Result<Option<Principal>>;

    /// Verify credentials and sign the principal in
    async fn sign_in(&self, email: &str, password: &str) -> Result<Principal>;

    /// Create an account and sign the new principal in
    async fn sign_up(&self, email: &str, password: &str) -> Result<Principal>;

    /// End the provider-held session
    async fn sign_out(&self) -> Result<()>;
}

/// Trait for the remote profile table
#[async_trait]
pub trait ProfileTable: Send + Sync {
    /// Fetch the row owned by a principal id, expecting at most one
    async fn query_by_owner_id(&self, owner_id: &str) -> Result<Option<ProfileRow>>;

    /// Fetch every row registered under an email address
    ///
    /// One signed-in identity may own multiple rows differentiated by role
    /// tag; this is how the reconciler discovers them.
    async fn query_by_email(&self, email: &str) -> Result<Vec<ProfileRow>>;

    /// Insert a new row, returning it as stored
    async fn insert(&self, row: ProfileRow) -> Result<ProfileRow>;
}
