//! HTTP profile table client
//!
//! PostgREST-style access to the `profiles` table: equality filters on
//! `user_id` and `email`, inserts with `Prefer: return=representation`.
//! Transport and decoding failures map to [`BlueForceError::Api`].

use async_trait::async_trait;
use blueforce_core::ProfileTable;
use blueforce_domain::constants::PROFILES_TABLE_PATH;
use blueforce_domain::{BlueForceError, ProfileRow, RemoteConfig, Result};
use tracing::warn;

use super::http::provider_message;

/// reqwest-backed implementation of `ProfileTable`
pub struct HttpProfileTable {
    client: reqwest::Client,
    base_url: String,
    anon_key: Option<String>,
}

impl HttpProfileTable {
    pub fn new(config: &RemoteConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            anon_key: config.anon_key.clone(),
        }
    }

    fn request(&self, method: reqwest::Method) -> reqwest::RequestBuilder {
        let mut builder =
            self.client.request(method, format!("{}{PROFILES_TABLE_PATH}", self.base_url));
        if let Some(key) = &self.anon_key {
            builder = builder.header("apikey", key).bearer_auth(key);
        }
        builder
    }

    async fn rows_from(response: reqwest::Response) -> Result<Vec<ProfileRow>> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(BlueForceError::Api(provider_message(status, &body)));
        }
        response.json().await.map_err(|err| BlueForceError::Api(err.to_string()))
    }
}

#[async_trait]
impl ProfileTable for HttpProfileTable {
    async fn query_by_owner_id(&self, owner_id: &str) -> Result<Option<ProfileRow>> {
        // reqwest percent-encodes query values itself
        let filter = format!("eq.{owner_id}");
        let response = self
            .request(reqwest::Method::GET)
            .query(&[("user_id", filter.as_str()), ("select", "*")])
            .send()
            .await
            .map_err(|err| BlueForceError::Api(err.to_string()))?;

        let mut rows = Self::rows_from(response).await?;
        if rows.len() > 1 {
            warn!(owner_id, count = rows.len(), "expected at most one profile row per owner");
        }
        Ok(if rows.is_empty() { None } else { Some(rows.remove(0)) })
    }

    async fn query_by_email(&self, email: &str) -> Result<Vec<ProfileRow>> {
        let filter = format!("eq.{email}");
        let response = self
            .request(reqwest::Method::GET)
            .query(&[("email", filter.as_str()), ("select", "*")])
            .send()
            .await
            .map_err(|err| BlueForceError::Api(err.to_string()))?;

        Self::rows_from(response).await
    }

    async fn insert(&self, row: ProfileRow) -> Result<ProfileRow> {
        let response = self
            .request(reqwest::Method::POST)
            .header("Prefer", "return=representation")
            .json(&[&row])
            .send()
            .await
            .map_err(|err| BlueForceError::Api(err.to_string()))?;

        let mut rows = Self::rows_from(response).await?;
        Ok(if rows.is_empty() { row } else { rows.remove(0) })
    }
}
