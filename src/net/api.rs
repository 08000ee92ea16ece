//! HTTP operations against the remote identity service.
//!
//! ERROR HANDLING
//! ==============
//! Every failure maps into [`AuthError`]: non-success statuses on the
//! credential endpoints become `Rejected` carrying the server message,
//! deadline expiry becomes `Timeout`, and everything else (connect, decode)
//! becomes `Transport`. The orchestration layer decides what the user sees.

use async_trait::async_trait;

use super::types::{CredentialPayload, IdentityResponse, InstituteListResponse, InstituteRef, MessageResponse};
use crate::config::GatewayConfig;
use crate::error::AuthError;

/// Remote identity service operations used by the orchestration layer.
///
/// Abstracted behind a trait so tests can substitute an in-memory fake.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// `POST /api/signup`; returns the server confirmation message.
    async fn signup(&self, payload: &CredentialPayload) -> Result<String, AuthError>;
    /// `POST /api/login`; returns the server confirmation message.
    async fn login(&self, payload: &CredentialPayload) -> Result<String, AuthError>;
    /// `POST /api/logout`.
    async fn logout(&self) -> Result<(), AuthError>;
    /// `GET /api/me`.
    async fn current_user(&self) -> Result<IdentityResponse, AuthError>;
    /// `GET /api/institutes`.
    async fn list_institutes(&self) -> Result<Vec<InstituteRef>, AuthError>;
}

/// `reqwest`-backed [`AuthApi`].
///
/// The client keeps a cookie jar so the server session credential rides
/// along on every call, matching the cookie-based API contract.
pub struct HttpAuthApi {
    config: GatewayConfig,
    client: reqwest::Client,
}

impl HttpAuthApi {
    /// Build a client with the configured request timeout and a cookie jar.
    pub fn new(config: GatewayConfig) -> Result<Self, AuthError> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(config.timeout)
            .build()
            .map_err(|e| AuthError::Transport(e.to_string()))?;
        Ok(Self { config, client })
    }

    /// Shared signup/login flow: POST the draft, pull `{message}` from the
    /// body on both success and rejection.
    async fn credential_post(
        &self,
        path: &str,
        payload: &CredentialPayload,
        default_ok: &str,
        default_rejected: &str,
    ) -> Result<String, AuthError> {
        let resp = self.client.post(self.config.endpoint(path)).json(payload).send().await?;
        let status = resp.status();
        let body: MessageResponse = resp.json().await.unwrap_or_default();
        if status.is_success() {
            Ok(body.message.unwrap_or_else(|| default_ok.to_owned()))
        } else {
            Err(AuthError::Rejected(body.message.unwrap_or_else(|| default_rejected.to_owned())))
        }
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn signup(&self, payload: &CredentialPayload) -> Result<String, AuthError> {
        self.credential_post("/api/signup", payload, "Signup successful", "Signup failed")
            .await
    }

    async fn login(&self, payload: &CredentialPayload) -> Result<String, AuthError> {
        self.credential_post("/api/login", payload, "Login successful", "Invalid Credentials")
            .await
    }

    async fn logout(&self) -> Result<(), AuthError> {
        let resp = self.client.post(self.config.endpoint("/api/logout")).send().await?;
        if resp.status().is_success() {
            Ok(())
        } else {
            Err(AuthError::Rejected("Failed to log out".into()))
        }
    }

    async fn current_user(&self) -> Result<IdentityResponse, AuthError> {
        let resp = self.client.get(self.config.endpoint("/api/me")).send().await?;
        if !resp.status().is_success() {
            return Err(AuthError::IdentityUnconfirmed);
        }
        Ok(resp.json::<IdentityResponse>().await?)
    }

    async fn list_institutes(&self) -> Result<Vec<InstituteRef>, AuthError> {
        let resp = self.client.get(self.config.endpoint("/api/institutes")).send().await?;
        if !resp.status().is_success() {
            return Err(AuthError::Transport(format!("institute list failed: {}", resp.status())));
        }
        let body: InstituteListResponse = resp.json().await?;
        if body.success {
            Ok(body.institutes)
        } else {
            Err(AuthError::Transport("institute list unavailable".into()))
        }
    }
}
