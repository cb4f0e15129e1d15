//! wecom-cmder HTTP client.
//!
//! Typed gateway to the wecom-cmder admin backend (WeChat-Work bot
//! platform). The [`ApiClient`] maps one method per REST operation,
//! attaches the session's bearer token to every outgoing request, and
//! centralizes 401 recovery (clear credential, redirect to login).
//!
//! The credential lives in a [`Session`] cell shared between the client
//! and the [`RouteTable`] navigation guard, so both stay testable in
//! isolation. Navigation itself is behind the [`Navigator`] trait —
//! the hosting application decides what "go to /login" means.
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use wecom_client::{ApiClient, LoginRequest, MemoryStore, NoopNavigator, Session};
//!
//! let session = Session::new(Arc::new(MemoryStore::new()));
//! let client = ApiClient::new("http://localhost:8000", session.clone(), Arc::new(NoopNavigator))?;
//!
//! let token = client.login(&LoginRequest::new("admin", "secret")).await?;
//! session.set(token.into_credential())?;
//! let commands = client.list_commands().await?;
//! ```

mod client;
mod routes;
mod session;
mod types;

pub use client::{ApiClient, ApiError};
pub use routes::{GuardDecision, Navigator, NoopNavigator, Route, RouteTable, HOME_PATH, LOGIN_PATH};
pub use session::{Credential, CredentialStore, MemoryStore, Session, StoreError};
pub use types::*;
