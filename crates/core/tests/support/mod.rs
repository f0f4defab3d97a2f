//! Shared test helpers for `blueforce-core` integration tests.
//!
//! In-memory mocks for the identity provider and profile table ports, with
//! injectable failures and completion delays so the reconciler tests can
//! exercise out-of-order completions deterministically.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use blueforce_core::{IdentityProvider, ProfileTable};
use blueforce_domain::{BlueForceError, Principal, ProfileRow, Result};
use parking_lot::Mutex;

/// Configurable in-memory mock for `IdentityProvider`.
#[derive(Default)]
pub struct MockIdentityProvider {
    current: Mutex<Option<Principal>>,
    sign_in_error: Mutex<Option<String>>,
    sign_out_error: Mutex<Option<String>>,
}

impl MockIdentityProvider {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Seed the provider-held session used by `get_current_principal`
    /// and returned from successful `sign_in`/`sign_up` calls.
    pub fn with_principal(self: Arc<Self>, principal: Principal) -> Arc<Self> {
        *self.current.lock() = Some(principal);
        self
    }

    /// Make `sign_in` fail with the given provider message.
    pub fn with_sign_in_error(self: Arc<Self>, message: &str) -> Arc<Self> {
        *self.sign_in_error.lock() = Some(message.to_string());
        self
    }

    /// Make `sign_out` fail with the given provider message.
    pub fn with_sign_out_error(self: Arc<Self>, message: &str) -> Arc<Self> {
        *self.sign_out_error.lock() = Some(message.to_string());
        self
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn get_current_principal(&self) -> Result<Option<Principal>> {
        Ok(self.current.lock().clone())
    }

    async fn sign_in(&self, email: &str, _password: &str) -> Result<Principal> {
        if let Some(message) = self.sign_in_error.lock().clone() {
            return Err(BlueForceError::Auth(message));
        }
        let principal = self
            .current
            .lock()
            .clone()
            .unwrap_or_else(|| Principal::new("uid-signed-in").with_email(email));
        Ok(principal)
    }

    async fn sign_up(&self, email: &str, _password: &str) -> Result<Principal> {
        Ok(Principal::new("uid-registered").with_email(email))
    }

    async fn sign_out(&self) -> Result<()> {
        match self.sign_out_error.lock().clone() {
            Some(message) => Err(BlueForceError::Auth(message)),
            None => Ok(()),
        }
    }
}

/// Configurable in-memory mock for `ProfileTable`.
///
/// `with_lookup_delay` holds `query_by_owner_id` open so tests can trigger
/// another operation before the lookup resolves.
#[derive(Default)]
pub struct MockProfileTable {
    rows: Mutex<Vec<ProfileRow>>,
    lookup_delay: Mutex<Option<Duration>>,
    lookups: AtomicUsize,
}

impl MockProfileTable {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_row(self: Arc<Self>, row: ProfileRow) -> Arc<Self> {
        self.rows.lock().push(row);
        self
    }

    pub fn with_lookup_delay(self: Arc<Self>, delay: Duration) -> Arc<Self> {
        *self.lookup_delay.lock() = Some(delay);
        self
    }

    /// Number of `query_by_owner_id` calls observed.
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProfileTable for MockProfileTable {
    async fn query_by_owner_id(&self, owner_id: &str) -> Result<Option<ProfileRow>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        let delay = *self.lookup_delay.lock();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        Ok(self.rows.lock().iter().find(|row| row.user_id == owner_id).cloned())
    }

    async fn query_by_email(&self, email: &str) -> Result<Vec<ProfileRow>> {
        Ok(self
            .rows
            .lock()
            .iter()
            .filter(|row| row.email.as_deref() == Some(email))
            .cloned()
            .collect())
    }

    async fn insert(&self, row: ProfileRow) -> Result<ProfileRow> {
        self.rows.lock().push(row.clone());
        Ok(row)
    }
}
