//! Subcommand implementations.

pub mod command;
pub mod login;
pub mod message;
pub mod status;
pub mod wechat;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use wecom_client::{ApiClient, NoopNavigator, Session};

use crate::config::{ClientConfig, FileCredentialStore};

/// A connected client plus its session, built from the config file.
pub struct Ctx {
    pub client: ApiClient,
    pub session: Session,
    pub config_path: PathBuf,
}

/// Build a client for the configured server. The session is backed by
/// the config file, so a token stored by `login` is picked up here.
pub fn connect(config_path: &Path) -> Result<Ctx> {
    let config = ClientConfig::load(config_path)?;
    tracing::debug!("using client config at {}", config_path.display());
    if config.server.is_empty() {
        anyhow::bail!("No server URL set. Run `wecomctl server <url>` first.");
    }

    let store = Arc::new(FileCredentialStore::new(config_path.to_path_buf()));
    let session = Session::new(store);
    let client = ApiClient::new(config.server, session.clone(), Arc::new(NoopNavigator))?;

    Ok(Ctx {
        client,
        session,
        config_path: config_path.to_path_buf(),
    })
}

/// Set or show the backend server URL.
pub fn server(url: Option<&str>, config_path: &Path) -> Result<()> {
    let mut config = ClientConfig::load(config_path)?;
    match url {
        Some(url) => {
            config.server = url.trim_end_matches('/').to_string();
            config.save(config_path)?;
            println!("Server set to {}.", config.server);
        }
        None => {
            if config.server.is_empty() {
                println!("No server configured.");
            } else {
                println!("{}", config.server);
            }
        }
    }
    Ok(())
}
