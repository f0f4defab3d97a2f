//! Configuration management

use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub session_backend: SessionBackend,
    pub remote: RemoteConfig,
    pub store: StoreConfig,
}

/// Which session strategy the application wires in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionBackend {
    /// Provider-backed reconciler against the remote service
    Remote,
    /// Client-persisted local profile store
    Local,
}

/// Remote backend-as-a-service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    pub base_url: String,
    #[serde(default, skip_serializing)]
    pub anon_key: Option<String>,
}

/// Local key/value store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            session_backend: SessionBackend::Remote,
            remote: RemoteConfig {
                base_url: "http://localhost:54321".to_string(),
                anon_key: None,
            },
            store: StoreConfig { path: "blueforce_store.json".to_string() },
        }
    }
}
