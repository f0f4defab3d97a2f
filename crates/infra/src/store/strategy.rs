//! Local session strategy
//!
//! The local store's take on the session capability interface. Its user
//! model is [`LocalUser`], deliberately distinct from the remote
//! reconciler's `Profile`; the two are never reconciled.

use async_trait::async_trait;
use blueforce_core::SessionStrategy;
use blueforce_domain::{LocalUser, Result};

use super::local_users::LocalProfileStore;

#[async_trait]
impl SessionStrategy for LocalProfileStore {
    type User = LocalUser;

    async fn resolve_session(&self) -> Result<Option<LocalUser>> {
        Ok(self.current())
    }

    /// The local path does no credential verification; login is the
    /// lookup-or-create by email.
    async fn login(&self, email: &str, _password: &str) -> Result<LocalUser> {
        Ok(self.login_by_email(email))
    }

    async fn logout(&self) -> Result<()> {
        Self::logout(self);
        Ok(())
    }
}
