//! Login / logout / whoami commands.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use wecom_client::{LoginRequest, Session};

use crate::commands::connect;
use crate::config::FileCredentialStore;

/// Login to the configured server and persist the token.
pub async fn login(username: &str, password: &str, config_path: &Path) -> Result<()> {
    let ctx = connect(config_path)?;

    let token = ctx
        .client
        .login(&LoginRequest::new(username, password))
        .await
        .map_err(|e| anyhow::anyhow!("Login failed: {e}"))?;
    ctx.session.set(token.into_credential())?;

    println!("Logged in as {username}.");
    println!("Token saved to {}.", ctx.config_path.display());
    Ok(())
}

/// Logout — clears the stored token. Local only, no network call.
pub fn logout(config_path: &Path) -> Result<()> {
    let session = Session::new(Arc::new(FileCredentialStore::new(config_path.to_path_buf())));
    if !session.is_authenticated() {
        println!("Not logged in.");
        return Ok(());
    }
    session.clear()?;
    println!("Logged out.");
    Ok(())
}

/// Print the authenticated username.
pub async fn whoami(config_path: &Path) -> Result<()> {
    let ctx = connect(config_path)?;
    let user = ctx.client.current_user().await?;
    println!("{}", user.username);
    Ok(())
}
