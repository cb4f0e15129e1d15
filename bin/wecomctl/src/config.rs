//! Client-side configuration.
//!
//! Reads/writes `~/.wecom/config.toml`: the backend server URL plus
//! the single persisted credential slot. The file doubles as the
//! durable [`CredentialStore`] behind the session.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use wecom_client::{Credential, CredentialStore, StoreError};

/// Client configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Backend server URL (e.g. "http://localhost:8000").
    #[serde(default)]
    pub server: String,

    /// Bearer token (set by `wecomctl login`).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub token: String,

    /// Token kind reported at login, typically "bearer".
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub token_type: String,
}

impl ClientConfig {
    /// Default config file path: ~/.wecom/config.toml.
    pub fn default_path() -> PathBuf {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".wecom").join("config.toml")
    }

    /// Load config from disk, or return default if the file is absent.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| StoreError::Format(e.to_string()))
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).map_err(|e| StoreError::Format(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Credential store backed by the config file. Token updates rewrite
/// only the credential fields; the server URL stays untouched.
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl CredentialStore for FileCredentialStore {
    fn load(&self) -> Result<Option<Credential>, StoreError> {
        let config = ClientConfig::load(&self.path)?;
        if config.token.is_empty() {
            return Ok(None);
        }
        Ok(Some(Credential {
            access_token: config.token,
            token_type: if config.token_type.is_empty() {
                "bearer".to_string()
            } else {
                config.token_type
            },
        }))
    }

    fn save(&self, credential: &Credential) -> Result<(), StoreError> {
        let mut config = ClientConfig::load(&self.path)?;
        config.token = credential.access_token.clone();
        config.token_type = credential.token_type.clone();
        config.save(&self.path)
    }

    fn clear(&self) -> Result<(), StoreError> {
        let mut config = ClientConfig::load(&self.path)?;
        config.token = String::new();
        config.token_type = String::new();
        config.save(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = ClientConfig::load(&dir.path().join("absent.toml")).unwrap();
        assert!(config.server.is_empty());
        assert!(config.token.is_empty());
    }

    #[test]
    fn toml_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = ClientConfig {
            server: "http://localhost:8000".into(),
            token: "tok-1".into(),
            token_type: "bearer".into(),
        };
        config.save(&path).unwrap();

        let back = ClientConfig::load(&path).unwrap();
        assert_eq!(back.server, "http://localhost:8000");
        assert_eq!(back.token, "tok-1");
        assert_eq!(back.token_type, "bearer");
    }

    #[test]
    fn store_keeps_server_across_token_changes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        ClientConfig {
            server: "http://localhost:8000".into(),
            ..Default::default()
        }
        .save(&path)
        .unwrap();

        let store = FileCredentialStore::new(path.clone());
        assert!(store.load().unwrap().is_none());

        store
            .save(&Credential {
                access_token: "tok-2".into(),
                token_type: "bearer".into(),
            })
            .unwrap();
        assert_eq!(
            store.load().unwrap().map(|c| c.access_token).as_deref(),
            Some("tok-2")
        );

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());

        let config = ClientConfig::load(&path).unwrap();
        assert_eq!(config.server, "http://localhost:8000", "server must survive");
    }
}
