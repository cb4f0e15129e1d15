//! HTTP gateway client.
//!
//! One method per backend operation, all forwarding to
//! `{base}/api/v1/...` with a fixed 10-second timeout and JSON bodies.
//! The session's bearer token is attached to every request that holds
//! one; a 401 response clears the session and forces navigation to the
//! login page (once per failing call, no retry). Other failures are
//! logged and propagated unmodified.

use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

use crate::routes::{Navigator, LOGIN_PATH};
use crate::session::Session;
use crate::types::*;

/// Fixed prefix for every endpoint except `/health`.
const API_PREFIX: &str = "/api/v1";

/// Fixed per-request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client-side API error.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx, non-401 response, body passed through verbatim.
    #[error("HTTP {status}: {message}")]
    Server { status: u16, message: String },

    /// Transport failure or timeout.
    #[error("network: {0}")]
    Network(#[from] reqwest::Error),

    /// 401 — the credential was cleared and navigation to the login
    /// page was requested before this error surfaced.
    #[error("unauthorized")]
    Unauthorized,

    /// 2xx response with an undecodable body.
    #[error("decode: {0}")]
    Decode(String),
}

/// Typed facade over the wecom-cmder REST backend.
///
/// Construction is static: base URL, session, and navigator are set
/// once, there is no runtime reconfiguration.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Session,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        session: Session,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
            navigator,
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_PREFIX, path)
    }

    /// Attach the bearer token when the session holds one.
    fn authed(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn dispatch<R: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<R, ApiError> {
        let resp = builder.send().await.map_err(|e| {
            error!("request failed: {e}");
            ApiError::Network(e)
        })?;
        self.parse(resp).await
    }

    /// Map a settled response to a typed result. 401 side effects run
    /// here, after the response is fully resolved, so an in-flight
    /// login cannot interleave with the clear.
    async fn parse<R: DeserializeOwned>(&self, resp: reqwest::Response) -> Result<R, ApiError> {
        let status = resp.status();

        if status == StatusCode::UNAUTHORIZED {
            error!("unauthorized response, clearing credential");
            self.handle_unauthorized();
            return Err(ApiError::Unauthorized);
        }

        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            error!("server error {}: {}", status.as_u16(), message);
            return Err(ApiError::Server {
                status: status.as_u16(),
                message,
            });
        }

        resp.json::<R>().await.map_err(|e| {
            error!("undecodable response body: {e}");
            ApiError::Decode(e.to_string())
        })
    }

    fn handle_unauthorized(&self) {
        if let Err(e) = self.session.clear() {
            warn!("failed to clear stored credential: {e}");
        }
        // No duplicate navigation when already on the login page.
        if self.navigator.current_path() != LOGIN_PATH {
            self.navigator.navigate(LOGIN_PATH);
        }
    }

    // ── Auth ────────────────────────────────────────────────────────

    /// POST /auth/login. Does not store the returned credential — the
    /// caller persists it into the session.
    pub async fn login(&self, request: &LoginRequest) -> Result<TokenResponse, ApiError> {
        debug!("login as {}", request.username);
        let req = self.http.post(self.api_url("/auth/login")).json(request);
        self.dispatch(self.authed(req)).await
    }

    /// GET /auth/me.
    pub async fn current_user(&self) -> Result<UserInfo, ApiError> {
        let req = self.http.get(self.api_url("/auth/me"));
        self.dispatch(self.authed(req)).await
    }

    /// Local-only logout: clears the credential and navigates to the
    /// login page. Issues no network call.
    pub fn logout(&self) {
        if let Err(e) = self.session.clear() {
            warn!("failed to clear stored credential: {e}");
        }
        self.navigator.navigate(LOGIN_PATH);
    }

    // ── WeChat-Work configuration ───────────────────────────────────

    /// GET /config/wechat.
    pub async fn get_config(&self) -> Result<WeChatConfig, ApiError> {
        let req = self.http.get(self.api_url("/config/wechat"));
        self.dispatch(self.authed(req)).await
    }

    /// PUT /config/wechat — full replace. Returns the server's
    /// resulting view (secrets stripped).
    pub async fn update_config(
        &self,
        update: &WeChatConfigUpdate,
    ) -> Result<WeChatConfig, ApiError> {
        let req = self.http.put(self.api_url("/config/wechat")).json(update);
        self.dispatch(self.authed(req)).await
    }

    /// POST /config/wechat/test — validation probe, never persists.
    pub async fn test_config(
        &self,
        update: &WeChatConfigUpdate,
    ) -> Result<WeChatConfigTestResponse, ApiError> {
        let req = self
            .http
            .post(self.api_url("/config/wechat/test"))
            .json(update);
        self.dispatch(self.authed(req)).await
    }

    // ── Messages ────────────────────────────────────────────────────

    /// POST /messages/send.
    pub async fn send_message(
        &self,
        message: &MessageSend,
    ) -> Result<SendMessageResponse, ApiError> {
        let req = self.http.post(self.api_url("/messages/send")).json(message);
        self.dispatch(self.authed(req)).await
    }

    /// GET /messages with the filter rendered as query parameters.
    pub async fn list_messages(
        &self,
        query: &MessageQuery,
    ) -> Result<MessageListResponse, ApiError> {
        let req = self.http.get(self.api_url("/messages")).query(query);
        self.dispatch(self.authed(req)).await
    }

    // ── Commands ────────────────────────────────────────────────────

    /// GET /commands. Server order preserved.
    pub async fn list_commands(&self) -> Result<Vec<Command>, ApiError> {
        let req = self.http.get(self.api_url("/commands"));
        let resp: CommandListResponse = self.dispatch(self.authed(req)).await?;
        Ok(resp.commands)
    }

    /// PUT /commands/{command_id} — partial update.
    pub async fn update_command(
        &self,
        command_id: &str,
        update: &CommandUpdate,
    ) -> Result<CommandUpdateResponse, ApiError> {
        let req = self
            .http
            .put(self.api_url(&format!("/commands/{command_id}")))
            .json(update);
        self.dispatch(self.authed(req)).await
    }

    /// POST /commands/sync-menu — idempotent from the client's view.
    pub async fn sync_menu(&self) -> Result<SyncMenuResponse, ApiError> {
        let req = self.http.post(self.api_url("/commands/sync-menu"));
        self.dispatch(self.authed(req)).await
    }

    // ── Health ──────────────────────────────────────────────────────

    /// GET /health — bypasses the API prefix so it works through a
    /// reverse proxy that does not route `/api/v1`.
    pub async fn health_check(&self) -> Result<HealthResponse, ApiError> {
        let req = self.http.get(format!("{}/health", self.base_url));
        self.dispatch(self.authed(req)).await
    }
}
