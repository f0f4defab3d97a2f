//! Session strategy capability interface
//!
//! The provider-backed reconciler and the local profile store are two
//! independent "current user" sources. They share this capability trait and
//! nothing else: their user models stay divergent by design and are never
//! merged. Configuration picks which strategy an application wires in.

use async_trait::async_trait;
use blueforce_domain::{BlueForceError, Profile, Result};

use super::service::SessionReconciler;

/// Capability interface over a "current user" source
#[async_trait]
pub trait SessionStrategy: Send + Sync {
    /// The strategy's own user model; deliberately not unified
    type User;

    /// Resolve the current user without credentials, if one exists
    async fn resolve_session(&self) -> Result<Option<Self::User>>;

    /// Authenticate and return the resulting user
    async fn login(&self, email: &str, password: &str) -> Result<Self::User>;

    /// End the session
    async fn logout(&self) -> Result<()>;
}

#[async_trait]
impl SessionStrategy for SessionReconciler {
    type User = Profile;

    async fn resolve_session(&self) -> Result<Option<Profile>> {
        self.resolve_on_start().await?;
        Ok(self.current_profile())
    }

    async fn login(&self, email: &str, password: &str) -> Result<Profile> {
        Self::login(self, email, password).await?;
        self.current_profile().ok_or_else(|| {
            BlueForceError::Internal("session closed before login completed".to_string())
        })
    }

    async fn logout(&self) -> Result<()> {
        Self::logout(self).await
    }
}
