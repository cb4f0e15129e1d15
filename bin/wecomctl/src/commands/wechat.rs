//! WeChat-Work configuration commands.
//!
//! `wecomctl config get | set -f file.json | test -f file.json`

use std::path::Path;

use anyhow::Result;
use wecom_client::WeChatConfigUpdate;

use crate::commands::connect;

/// Show the current server-side config (secrets omitted by server).
pub async fn get(config_path: &Path) -> Result<()> {
    let ctx = connect(config_path)?;
    let config = ctx.client.get_config().await?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

/// Replace the server-side config from a JSON body.
pub async fn set(json_body: &str, config_path: &Path) -> Result<()> {
    let update: WeChatConfigUpdate =
        serde_json::from_str(json_body).map_err(|e| anyhow::anyhow!("Invalid JSON: {e}"))?;

    let ctx = connect(config_path)?;
    let view = ctx.client.update_config(&update).await?;

    println!("Config updated.");
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}

/// Probe a config against the WeChat API without persisting it.
pub async fn test(json_body: &str, config_path: &Path) -> Result<()> {
    let update: WeChatConfigUpdate =
        serde_json::from_str(json_body).map_err(|e| anyhow::anyhow!("Invalid JSON: {e}"))?;

    let ctx = connect(config_path)?;
    let result = ctx.client.test_config(&update).await?;

    if result.success {
        println!("OK: {}", result.message);
    } else {
        println!("FAILED: {}", result.message);
    }
    if let Some(details) = result.details {
        println!("{}", serde_json::to_string_pretty(&details)?);
    }
    if !result.success {
        anyhow::bail!("Config test failed.");
    }
    Ok(())
}
