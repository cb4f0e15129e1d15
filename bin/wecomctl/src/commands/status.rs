//! STATUS — server and session overview.

use std::path::Path;

use anyhow::Result;

use crate::commands::connect;
use crate::config::ClientConfig;

pub async fn status(config_path: &Path) -> Result<()> {
    let config = ClientConfig::load(config_path)?;

    println!(
        "Server:    {}",
        if config.server.is_empty() { "-" } else { &config.server }
    );

    if config.server.is_empty() {
        println!("Status:    no server configured");
        return Ok(());
    }

    let ctx = connect(config_path)?;
    println!(
        "Auth:      {}",
        if ctx.session.is_authenticated() { "logged in" } else { "not logged in" }
    );

    match ctx.client.health_check().await {
        Ok(health) => println!("Status:    {}", health.status),
        Err(e) => println!("Status:    disconnected ({e})"),
    }
    Ok(())
}
