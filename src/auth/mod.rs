//! Identity provider — email/password accounts and the identity change stream.
//!
//! [`AuthClient`] talks to the hosted auth endpoints; a successful sign-in or
//! sign-up yields a [`Session`] (identity plus bearer token) which is cached
//! on disk so the CLI stays signed in between runs. [`IdentityProvider`]
//! carries the current identity (or `None`) over a `tokio::sync::watch`
//! channel: at most one value at a time, emitted at startup with the
//! restored session and on every sign-in/out.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::sync::watch;

/// A signed-in identity. Transient — supplied by the provider, never
/// persisted by the record stores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub uid: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(rename = "photoURL", skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

/// An authenticated session: who is signed in, and the token that proves it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub identity: Identity,
    pub token: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthResponse {
    uid: String,
    email: String,
    display_name: Option<String>,
    #[serde(rename = "photoURL")]
    photo_url: Option<String>,
    token: String,
}

/// HTTP client for the hosted auth endpoints.
pub struct AuthClient {
    http: reqwest::Client,
    base_url: String,
}

impl AuthClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create an account with email and password, optionally setting the
    /// profile display name, and return the new session.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: Option<&str>,
    ) -> Result<Session> {
        let mut session = self
            .auth_request("signup", email, password)
            .await
            .context("sign-up failed")?;

        if let Some(name) = display_name {
            self.update_display_name(&session.token, name)
                .await
                .context("failed to set display name")?;
            session.identity.display_name = Some(name.to_string());
        }

        Ok(session)
    }

    /// Sign in with email and password.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session> {
        self.auth_request("signin", email, password)
            .await
            .context("sign-in failed")
    }

    async fn auth_request(&self, endpoint: &str, email: &str, password: &str) -> Result<Session> {
        let url = format!("{}/auth/{endpoint}", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .with_context(|| format!("HTTP request failed for {url}"))?;

        anyhow::ensure!(
            response.status().is_success(),
            "auth request failed with HTTP {}",
            response.status()
        );

        let auth: AuthResponse = response
            .json()
            .await
            .context("failed to parse auth response")?;

        Ok(Session {
            identity: Identity {
                uid: auth.uid,
                email: auth.email,
                display_name: auth.display_name,
                photo_url: auth.photo_url,
            },
            token: auth.token,
        })
    }

    async fn update_display_name(&self, token: &str, display_name: &str) -> Result<()> {
        let url = format!("{}/auth/profile", self.base_url);
        let response = self
            .http
            .patch(&url)
            .bearer_auth(token)
            .json(&serde_json::json!({ "displayName": display_name }))
            .send()
            .await
            .with_context(|| format!("HTTP request failed for {url}"))?;

        anyhow::ensure!(
            response.status().is_success(),
            "profile update failed with HTTP {}",
            response.status()
        );
        Ok(())
    }
}

/// Read the cached session, if any. A missing file means signed out.
pub fn load_session(path: impl AsRef<Path>) -> Result<Option<Session>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read session file: {}", path.display()))?;
    let session = serde_json::from_str(&json).context("failed to parse session file")?;
    Ok(Some(session))
}

/// Cache a session on disk, creating the parent directory if needed.
pub fn save_session(path: impl AsRef<Path>, session: &Session) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(session)?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write session file: {}", path.display()))?;
    Ok(())
}

/// Remove the cached session. A missing file is not an error.
pub fn clear_session(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if path.exists() {
        std::fs::remove_file(path)
            .with_context(|| format!("failed to remove session file: {}", path.display()))?;
    }
    Ok(())
}

/// Async stream of the current signed-in identity (or `None`).
///
/// Owns the sending side of a watch channel; consumers subscribe and react
/// to each emission. The channel always holds exactly one value.
pub struct IdentityProvider {
    tx: watch::Sender<Option<Identity>>,
}

impl IdentityProvider {
    /// Create a provider, emitting `initial` immediately — the restored
    /// session at startup, or `None`.
    pub fn new(initial: Option<Identity>) -> Self {
        let (tx, _) = watch::channel(initial);
        Self { tx }
    }

    /// Subscribe to identity changes.
    pub fn subscribe(&self) -> watch::Receiver<Option<Identity>> {
        self.tx.subscribe()
    }

    /// The identity currently signed in, if any.
    pub fn current(&self) -> Option<Identity> {
        self.tx.borrow().clone()
    }

    /// Emit a new identity state (sign-in or sign-out).
    pub fn set(&self, identity: Option<Identity>) {
        self.tx.send_replace(identity);
    }
}
