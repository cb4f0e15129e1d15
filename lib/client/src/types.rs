//! Wire types for the wecom-cmder REST API.
//!
//! Mirrors the backend DTOs field-for-field. All records are plain data;
//! the client adds no derived state on top of them.

use serde::{Deserialize, Serialize};

use crate::session::Credential;

// ── Auth ────────────────────────────────────────────────────────────

/// Login request body. The password is never logged or persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Successful login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    /// Token kind, typically "bearer".
    pub token_type: String,
}

impl TokenResponse {
    /// Convert into a [`Credential`] for storing in the session.
    pub fn into_credential(self) -> Credential {
        Credential {
            access_token: self.access_token,
            token_type: self.token_type,
        }
    }
}

/// "Who am I" response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub username: String,
}

// ── WeChat-Work configuration ───────────────────────────────────────

/// Server view of the WeChat-Work integration config. Secret fields
/// (app secret) are omitted by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeChatConfig {
    pub corp_id: String,
    pub agent_id: String,
    /// WeChat API proxy base URL.
    pub proxy: String,
    /// Admin user whitelist, order preserved.
    #[serde(default)]
    pub admin_users: Vec<String>,
    /// Callback verification token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Callback AES key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding_aes_key: Option<String>,
}

/// Config update. Full-replace semantics: every non-optional field is
/// required, and the server's resulting view is returned (secrets
/// stripped).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeChatConfigUpdate {
    pub corp_id: String,
    pub app_secret: String,
    pub agent_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding_aes_key: Option<String>,
    #[serde(default)]
    pub admin_users: Vec<String>,
}

/// Result of the side-effect-free config validation probe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeChatConfigTestResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

// ── Messages ────────────────────────────────────────────────────────

/// Message direction relative to the bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    In,
    Out,
}

/// A stored message. Created server-side; read-only for this client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub msg_id: String,
    pub msg_type: String,
    pub from_user: String,
    pub to_user: String,
    pub content: String,
    /// Epoch seconds.
    pub create_time: i64,
    pub direction: Direction,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

/// An article of a news-card message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsArticle {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picurl: Option<String>,
}

/// Outgoing message. Text and news messages have disjoint required
/// fields, so the shape is a tagged union rather than one bag of
/// optionals: a news message without articles is unrepresentable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MessageSend {
    Text { to_user: String, content: String },
    News { to_user: String, articles: Vec<NewsArticle> },
}

impl MessageSend {
    /// Text message to a user ("@all" broadcasts).
    pub fn text(to_user: impl Into<String>, content: impl Into<String>) -> Self {
        Self::Text {
            to_user: to_user.into(),
            content: content.into(),
        }
    }

    pub fn news(to_user: impl Into<String>, articles: Vec<NewsArticle>) -> Self {
        Self::News {
            to_user: to_user.into(),
            articles,
        }
    }
}

/// Send result. Success is explicit in the payload, not just the HTTP
/// status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessageResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Message list filter. Absent fields mean "no constraint".
#[derive(Debug, Clone, Default, Serialize)]
pub struct MessageQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_user: Option<String>,
    /// Epoch seconds, inclusive lower bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,
    /// Epoch seconds, inclusive upper bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<i64>,
}

/// Paginated message page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageListResponse {
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub items: Vec<Message>,
}

// ── Commands ────────────────────────────────────────────────────────

/// A bot command. Server-owned; the client may only toggle `enabled`
/// and `sort_order` through [`CommandUpdate`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Command {
    pub id: i64,
    pub command_id: String,
    pub name: String,
    pub description: String,
    /// Menu grouping category.
    pub category: String,
    /// Handler path on the server.
    pub handler: String,
    pub admin_only: bool,
    pub enabled: bool,
    pub sort_order: i32,
}

/// Partial command update — only supplied fields change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommandUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandListResponse {
    pub commands: Vec<Command>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandUpdateResponse {
    pub success: bool,
    pub message: String,
}

/// Result of a server-side menu regeneration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncMenuResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_count: Option<u32>,
}

// ── Health ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
