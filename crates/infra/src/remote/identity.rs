//! HTTP identity provider
//!
//! GoTrue-style auth endpoints: password grant for sign-in, `/signup` for
//! account creation, `/user` for resolving the provider-held session,
//! `/logout` for sign-out. Provider error messages are forwarded verbatim
//! into [`BlueForceError::Auth`].

use async_trait::async_trait;
use blueforce_core::IdentityProvider;
use blueforce_domain::constants::{
    AUTH_LOGOUT_PATH, AUTH_SIGNUP_PATH, AUTH_TOKEN_PATH, AUTH_USER_PATH,
};
use blueforce_domain::{BlueForceError, Principal, RemoteConfig, Result};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::http::provider_message;

/// reqwest-backed implementation of `IdentityProvider`
///
/// Holds the access token issued at sign-in/sign-up so `/user` and
/// `/logout` can authenticate with it; the anon key rides along as the
/// `apikey` header on every request.
pub struct HttpIdentityProvider {
    client: reqwest::Client,
    base_url: String,
    anon_key: Option<String>,
    access_token: Mutex<Option<String>>,
}

#[derive(Debug, Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct AuthUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct SessionResponse {
    #[serde(default)]
    access_token: Option<String>,
    user: AuthUser,
}

/// `/signup` answers with a session when auto-confirm is on, otherwise with
/// the bare user record
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SignUpResponse {
    Session(SessionResponse),
    User(AuthUser),
}

impl From<AuthUser> for Principal {
    fn from(user: AuthUser) -> Self {
        Self { id: user.id, email: user.email, created_at: user.created_at }
    }
}

impl HttpIdentityProvider {
    pub fn new(config: &RemoteConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            anon_key: config.anon_key.clone(),
            access_token: Mutex::new(None),
        }
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let mut builder = self.client.request(method, format!("{}{path}", self.base_url));
        if let Some(key) = &self.anon_key {
            builder = builder.header("apikey", key);
        }
        if let Some(token) = self.access_token.lock().clone() {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    async fn auth_error(response: reqwest::Response) -> BlueForceError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        BlueForceError::Auth(provider_message(status, &body))
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentityProvider {
    async fn get_current_principal(&self) -> Result<Option<Principal>> {
        if self.access_token.lock().is_none() {
            return Ok(None);
        }

        let response = self
            .request(reqwest::Method::GET, AUTH_USER_PATH)
            .send()
            .await
            .map_err(|err| BlueForceError::Auth(err.to_string()))?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            debug!("provider session expired or absent");
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(Self::auth_error(response).await);
        }

        let user: AuthUser =
            response.json().await.map_err(|err| BlueForceError::Auth(err.to_string()))?;
        Ok(Some(user.into()))
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Principal> {
        let response = self
            .request(reqwest::Method::POST, AUTH_TOKEN_PATH)
            .query(&[("grant_type", "password")])
            .json(&Credentials { email, password })
            .send()
            .await
            .map_err(|err| BlueForceError::Auth(err.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::auth_error(response).await);
        }

        let session: SessionResponse =
            response.json().await.map_err(|err| BlueForceError::Auth(err.to_string()))?;
        *self.access_token.lock() = session.access_token;
        Ok(session.user.into())
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<Principal> {
        let response = self
            .request(reqwest::Method::POST, AUTH_SIGNUP_PATH)
            .json(&Credentials { email, password })
            .send()
            .await
            .map_err(|err| BlueForceError::Auth(err.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::auth_error(response).await);
        }

        let signup: SignUpResponse =
            response.json().await.map_err(|err| BlueForceError::Auth(err.to_string()))?;
        let user = match signup {
            SignUpResponse::Session(session) => {
                *self.access_token.lock() = session.access_token;
                session.user
            }
            SignUpResponse::User(user) => user,
        };
        Ok(user.into())
    }

    async fn sign_out(&self) -> Result<()> {
        if self.access_token.lock().is_none() {
            return Ok(());
        }

        let response = self
            .request(reqwest::Method::POST, AUTH_LOGOUT_PATH)
            .send()
            .await
            .map_err(|err| BlueForceError::Auth(err.to_string()));

        // The locally held token is dropped on both outcomes; a failed
        // revocation upstream must not pin the client to a stale session.
        *self.access_token.lock() = None;

        let response = response?;
        if !response.status().is_success() {
            return Err(Self::auth_error(response).await);
        }
        Ok(())
    }
}
