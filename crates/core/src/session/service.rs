//! Session reconciler - core business logic
//!
//! State machine: `Unauthenticated` → `Resolving` → `Authenticated` |
//! `Unauthenticated`. Reaching `Authenticated` clears the error slot; any
//! provider failure records its message and lands back in `Unauthenticated`.
//!
//! Error policy is dual-channel: failures are recorded in readable state for
//! declarative consumers and returned as `Err` for imperative callers.

use std::sync::Arc;

use blueforce_domain::{
    BlueForceError, Principal, Profile, ProfileRow, RegistrationData, Result, Role,
};
use parking_lot::Mutex;
use tracing::{debug, error};

use super::mapper;
use super::ports::{IdentityProvider, ProfileTable};
use super::token::LivenessToken;

/// Observable phase of the session state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Unauthenticated,
    Resolving,
    Authenticated,
}

#[derive(Debug)]
struct SessionState {
    phase: SessionPhase,
    profile: Option<Profile>,
    error: Option<String>,
}

impl SessionState {
    fn new() -> Self {
        Self { phase: SessionPhase::Unauthenticated, profile: None, error: None }
    }
}

/// Session reconciler
///
/// Owns the current [`Profile`] for its lifetime. All state writes are plain
/// last-writer-wins assignments guarded by a [`LivenessToken`]: operations
/// capture the token current at entry, and a write whose token has been
/// revoked is silently suppressed. [`logout`](Self::logout) revokes the
/// in-flight token and installs a fresh one, so a delayed login lookup can
/// never overwrite the post-logout null profile. [`shutdown`](Self::shutdown)
/// revokes permanently.
pub struct SessionReconciler {
    identity: Arc<dyn IdentityProvider>,
    profiles: Arc<dyn ProfileTable>,
    state: Mutex<SessionState>,
    token: Mutex<LivenessToken>,
}

impl SessionReconciler {
    /// Create a new reconciler in the `Unauthenticated` phase
    pub fn new(identity: Arc<dyn IdentityProvider>, profiles: Arc<dyn ProfileTable>) -> Self {
        Self {
            identity,
            profiles,
            state: Mutex::new(SessionState::new()),
            token: Mutex::new(LivenessToken::new()),
        }
    }

    /// The profile of whoever is logged in right now, if anyone
    #[must_use]
    pub fn current_profile(&self) -> Option<Profile> {
        self.state.lock().profile.clone()
    }

    /// Current state-machine phase
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.state.lock().phase
    }

    /// Message of the most recent provider failure, if any
    #[must_use]
    pub fn last_error(&self) -> Option<String> {
        self.state.lock().error.clone()
    }

    /// Tear the session owner down; all pending completions are suppressed
    pub fn shutdown(&self) {
        self.token.lock().revoke();
        debug!("session reconciler shut down");
    }

    /// Resolve "who is logged in" from provider-held session state
    ///
    /// Called on startup with no credentials. An absent principal is not an
    /// error: it simply leaves the session unauthenticated.
    pub async fn resolve_on_start(&self) -> Result<()> {
        let token = self.current_token();
        self.publish(&token, |state| {
            state.phase = SessionPhase::Resolving;
        });

        match self.identity.get_current_principal().await {
            Ok(Some(principal)) => self.lookup_and_publish(&token, &principal).await,
            Ok(None) => {
                self.publish(&token, |state| {
                    state.phase = SessionPhase::Unauthenticated;
                    state.profile = None;
                });
                Ok(())
            }
            Err(err) => self.fail(&token, err),
        }
    }

    /// Delegate credential verification to the provider and reconcile
    ///
    /// On failure the profile is left unchanged (not nulled); the error is
    /// recorded and re-thrown for the caller to handle.
    pub async fn login(&self, email: &str, password: &str) -> Result<()> {
        let token = self.current_token();
        self.publish(&token, |state| {
            state.error = None;
            state.phase = SessionPhase::Resolving;
        });

        match self.identity.sign_in(email, password).await {
            Ok(principal) => self.lookup_and_publish(&token, &principal).await,
            Err(err) => self.fail(&token, err),
        }
    }

    /// Create an account and synthesize the profile from registration input
    ///
    /// Deliberate short-circuit: a freshly registered principal has no
    /// stored row yet, so no lookup is performed and defaults fill the gaps.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        role: Role,
        data: RegistrationData,
    ) -> Result<()> {
        let token = self.current_token();
        self.publish(&token, |state| {
            state.error = None;
            state.phase = SessionPhase::Resolving;
        });

        match self.identity.sign_up(email, password).await {
            Ok(principal) => {
                let profile = mapper::profile_from_registration(&principal, email, role, &data);
                self.publish(&token, |state| {
                    state.profile = Some(profile);
                    state.phase = SessionPhase::Authenticated;
                    state.error = None;
                });
                Ok(())
            }
            Err(err) => self.fail(&token, err),
        }
    }

    /// End the session
    ///
    /// The profile is cleared unconditionally, even when the provider call
    /// fails, so the UI never shows a stale authenticated profile after
    /// logout. A provider failure is still recorded and returned.
    pub async fn logout(&self) -> Result<()> {
        // Revoke whatever in-flight operations captured, then start a fresh
        // session generation for this and subsequent operations.
        let token = self.rotate_token();
        self.publish(&token, |state| {
            state.error = None;
            state.phase = SessionPhase::Resolving;
        });

        let result = self.identity.sign_out().await;

        // Guaranteed cleanup step: runs on both outcomes.
        self.publish(&token, |state| {
            state.profile = None;
            state.phase = SessionPhase::Unauthenticated;
            if let Err(err) = &result {
                state.error = Some(err.message().to_string());
            }
        });

        if let Err(err) = &result {
            error!(error = %err, "provider sign-out failed; session cleared anyway");
        }
        result
    }

    /// Every stored row registered under the signed-in identity's email
    ///
    /// A single identity may own multiple rows differentiated by role tag.
    /// Returns an empty list when nobody is signed in.
    pub async fn profiles_for_current(&self) -> Result<Vec<ProfileRow>> {
        let Some(email) = self.state.lock().profile.as_ref().map(|p| p.email.clone()) else {
            return Ok(Vec::new());
        };
        self.profiles.query_by_email(&email).await
    }

    /// Switch the active profile to the row carrying the given role tag
    ///
    /// Missing tag → `NotFound`, session state unchanged.
    pub async fn switch_active(&self, role: &Role) -> Result<Profile> {
        let token = self.current_token();
        let Some(current) = self.current_profile() else {
            return Err(BlueForceError::Auth("no active session".to_string()));
        };

        let rows = self.profiles.query_by_email(&current.email).await?;
        let row = rows
            .into_iter()
            .find(|row| row.role_tag.as_deref() == Some(role.as_str()))
            .ok_or_else(|| {
                BlueForceError::NotFound(format!(
                    "no {role} profile registered for {}",
                    current.email
                ))
            })?;

        let principal = Principal::new(row.user_id.clone()).with_email(current.email);
        let profile = mapper::profile_from_row(&row, &principal);
        self.publish(&token, |state| {
            state.profile = Some(profile.clone());
            state.phase = SessionPhase::Authenticated;
            state.error = None;
        });
        Ok(profile)
    }

    /// Insert a profile row into the remote table, forwarding errors
    pub async fn save_profile(&self, row: ProfileRow) -> Result<ProfileRow> {
        self.profiles.insert(row).await
    }

    /// Shared lookup path for start and login: at most one row per owner
    async fn lookup_and_publish(&self, token: &LivenessToken, principal: &Principal) -> Result<()> {
        match self.profiles.query_by_owner_id(&principal.id).await {
            Ok(Some(row)) => {
                let profile = mapper::profile_from_row(&row, principal);
                self.publish(token, |state| {
                    state.profile = Some(profile);
                    state.phase = SessionPhase::Authenticated;
                    state.error = None;
                });
                Ok(())
            }
            Ok(None) => {
                let profile = mapper::profile_from_principal(principal);
                self.publish(token, |state| {
                    state.profile = Some(profile);
                    state.phase = SessionPhase::Authenticated;
                    state.error = None;
                });
                Ok(())
            }
            Err(err) => self.fail(token, err),
        }
    }

    /// Record a provider failure and re-throw it
    fn fail(&self, token: &LivenessToken, err: BlueForceError) -> Result<()> {
        self.publish(token, |state| {
            state.error = Some(err.message().to_string());
            state.phase = SessionPhase::Unauthenticated;
        });
        Err(err)
    }

    /// Apply a state write unless the operation's token has been revoked
    fn publish<F>(&self, token: &LivenessToken, write: F)
    where
        F: FnOnce(&mut SessionState),
    {
        if !token.is_live() {
            debug!("state write suppressed: liveness token revoked");
            return;
        }
        write(&mut self.state.lock());
    }

    fn current_token(&self) -> LivenessToken {
        self.token.lock().clone()
    }

    fn rotate_token(&self) -> LivenessToken {
        let mut slot = self.token.lock();
        slot.revoke();
        *slot = LivenessToken::new();
        slot.clone()
    }
}
