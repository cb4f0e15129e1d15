//! Bot command management: list, enable/disable, menu sync.

use std::path::Path;

use anyhow::Result;
use wecom_client::CommandUpdate;

use crate::commands::connect;

/// List bot commands in server order.
pub async fn list(json_output: bool, config_path: &Path) -> Result<()> {
    let ctx = connect(config_path)?;
    let commands = ctx.client.list_commands().await?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&commands)?);
        return Ok(());
    }

    println!(
        "{:<14} {:<8} {:<6} {:<10} {:<16} {}",
        "COMMAND", "ENABLED", "ADMIN", "CATEGORY", "NAME", "DESCRIPTION"
    );
    for cmd in &commands {
        println!(
            "{:<14} {:<8} {:<6} {:<10} {:<16} {}",
            cmd.command_id,
            if cmd.enabled { "yes" } else { "no" },
            if cmd.admin_only { "yes" } else { "no" },
            cmd.category,
            cmd.name,
            cmd.description
        );
    }
    Ok(())
}

/// Toggle `enabled` and/or `sort_order` on a command.
pub async fn update(
    command_id: &str,
    enabled: Option<bool>,
    sort_order: Option<i32>,
    config_path: &Path,
) -> Result<()> {
    if enabled.is_none() && sort_order.is_none() {
        anyhow::bail!("Nothing to update. Pass --enabled and/or --sort-order.");
    }

    let ctx = connect(config_path)?;
    let result = ctx
        .client
        .update_command(command_id, &CommandUpdate { enabled, sort_order })
        .await?;

    if result.success {
        println!("Command {command_id} updated: {}", result.message);
        Ok(())
    } else {
        anyhow::bail!("Update failed: {}", result.message);
    }
}

/// Trigger server-side menu regeneration.
pub async fn sync_menu(config_path: &Path) -> Result<()> {
    let ctx = connect(config_path)?;
    let result = ctx.client.sync_menu().await?;

    if result.success {
        match result.menu_count {
            Some(count) => println!("Menu synced ({count} items)."),
            None => println!("Menu synced."),
        }
        Ok(())
    } else {
        anyhow::bail!("Menu sync failed: {}", result.message);
    }
}
