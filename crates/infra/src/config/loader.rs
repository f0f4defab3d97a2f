//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `BLUEFORCE_SESSION_BACKEND`: `remote` or `local`
//! - `BLUEFORCE_REMOTE_URL`: base URL of the backend-as-a-service
//! - `BLUEFORCE_ANON_KEY`: anon/service key sent as the `apikey` header
//! - `BLUEFORCE_STORE_PATH`: local slot-file path
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml`
//! 2. `./blueforce.json` or `./blueforce.toml`
//! 3. `../config.json` or `../config.toml`

use std::path::{Path, PathBuf};

use blueforce_domain::{BlueForceError, Config, RemoteConfig, Result, SessionBackend, StoreConfig};

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `BlueForceError::Config` if neither source yields a valid
/// configuration.
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// `BLUEFORCE_SESSION_BACKEND`, `BLUEFORCE_REMOTE_URL`, and
/// `BLUEFORCE_STORE_PATH` must all be present; the anon key is optional.
pub fn load_from_env() -> Result<Config> {
    let backend = require_env("BLUEFORCE_SESSION_BACKEND")?;
    let session_backend = parse_backend(&backend)?;
    let base_url = require_env("BLUEFORCE_REMOTE_URL")?;
    let path = require_env("BLUEFORCE_STORE_PATH")?;
    let anon_key = std::env::var("BLUEFORCE_ANON_KEY").ok();

    Ok(Config {
        session_backend,
        remote: RemoteConfig { base_url, anon_key },
        store: StoreConfig { path },
    })
}

/// Load configuration from a file
///
/// When `path` is `None`, probes the default locations in order.
pub fn load_from_file(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => probe_default_paths().ok_or_else(|| {
            BlueForceError::Config("no configuration file found in default locations".to_string())
        })?,
    };

    let contents = std::fs::read_to_string(&path)
        .map_err(|err| BlueForceError::Config(format!("cannot read {}: {err}", path.display())))?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&contents)
            .map_err(|err| BlueForceError::Config(format!("invalid JSON config: {err}"))),
        Some("toml") => toml::from_str(&contents)
            .map_err(|err| BlueForceError::Config(format!("invalid TOML config: {err}"))),
        other => Err(BlueForceError::Config(format!(
            "unsupported config extension: {}",
            other.unwrap_or("<none>")
        ))),
    }
}

fn require_env(name: &str) -> Result<String> {
    std::env::var(name)
        .map_err(|_| BlueForceError::Config(format!("missing environment variable {name}")))
}

fn parse_backend(value: &str) -> Result<SessionBackend> {
    match value {
        "remote" => Ok(SessionBackend::Remote),
        "local" => Ok(SessionBackend::Local),
        other => Err(BlueForceError::Config(format!("unknown session backend: {other}"))),
    }
}

fn probe_default_paths() -> Option<PathBuf> {
    const CANDIDATES: [&str; 6] = [
        "config.json",
        "config.toml",
        "blueforce.json",
        "blueforce.toml",
        "../config.json",
        "../config.toml",
    ];
    CANDIDATES.iter().map(PathBuf::from).find(|candidate| candidate.exists())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_config_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{
                "session_backend": "local",
                "remote": { "base_url": "http://localhost:54321" },
                "store": { "path": "store.json" }
            }"#,
        )
        .unwrap();

        let config = load_from_file(Some(&path)).unwrap();
        assert_eq!(config.session_backend, SessionBackend::Local);
        assert_eq!(config.store.path, "store.json");
        assert!(config.remote.anon_key.is_none());
    }

    #[test]
    fn toml_config_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "session_backend = \"remote\"\n\
             [remote]\n\
             base_url = \"http://localhost:54321\"\n\
             anon_key = \"anon\"\n\
             [store]\n\
             path = \"store.json\"\n",
        )
        .unwrap();

        let config = load_from_file(Some(&path)).unwrap();
        assert_eq!(config.session_backend, SessionBackend::Remote);
        assert_eq!(config.remote.anon_key.as_deref(), Some("anon"));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "x: 1").unwrap();
        assert!(matches!(
            load_from_file(Some(&path)),
            Err(BlueForceError::Config(_))
        ));
    }

    #[test]
    fn unknown_backend_is_rejected() {
        assert!(parse_backend("hybrid").is_err());
    }
}
