//! Message commands: history listing and sending.

use std::path::Path;

use anyhow::Result;
use wecom_client::{Direction, MessageQuery, MessageSend, NewsArticle};

use crate::commands::connect;

fn parse_direction(value: &str) -> Result<Direction> {
    match value {
        "in" => Ok(Direction::In),
        "out" => Ok(Direction::Out),
        other => anyhow::bail!("Invalid direction \"{other}\" (expected in|out)."),
    }
}

/// List message history with optional filters.
#[allow(clippy::too_many_arguments)]
pub async fn list(
    page: Option<u32>,
    page_size: Option<u32>,
    direction: Option<&str>,
    from_user: Option<&str>,
    start_time: Option<i64>,
    end_time: Option<i64>,
    json_output: bool,
    config_path: &Path,
) -> Result<()> {
    let query = MessageQuery {
        page,
        page_size,
        direction: direction.map(parse_direction).transpose()?,
        from_user: from_user.map(str::to_string),
        start_time,
        end_time,
    };

    let ctx = connect(config_path)?;
    let result = ctx.client.list_messages(&query).await?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!(
        "{} messages (page {}, {} per page)",
        result.total, result.page, result.page_size
    );
    for msg in &result.items {
        let arrow = match msg.direction {
            Direction::In => "<-",
            Direction::Out => "->",
        };
        println!(
            "{:>6}  {}  {:<10} {} {:<10} {}",
            msg.id, msg.created_at, msg.from_user, arrow, msg.to_user, msg.content
        );
    }
    Ok(())
}

/// Send a text message.
pub async fn send_text(to_user: &str, content: &str, config_path: &Path) -> Result<()> {
    send(MessageSend::text(to_user, content), config_path).await
}

/// Send a news-card message; articles come from a JSON file.
pub async fn send_news(to_user: &str, articles_file: &str, config_path: &Path) -> Result<()> {
    let raw = std::fs::read_to_string(articles_file)?;
    let articles: Vec<NewsArticle> =
        serde_json::from_str(&raw).map_err(|e| anyhow::anyhow!("Invalid articles JSON: {e}"))?;
    if articles.is_empty() {
        anyhow::bail!("Articles file contains no articles.");
    }
    send(MessageSend::news(to_user, articles), config_path).await
}

async fn send(message: MessageSend, config_path: &Path) -> Result<()> {
    let ctx = connect(config_path)?;
    let result = ctx.client.send_message(&message).await?;

    if result.success {
        match result.msg_id {
            Some(msg_id) => println!("Message sent ({msg_id})."),
            None => println!("Message sent."),
        }
        Ok(())
    } else {
        anyhow::bail!(
            "Send failed: {}",
            result.message.unwrap_or_else(|| "unknown error".into())
        );
    }
}
