//! Error taxonomy for auth gateway operations.
//!
//! ERROR HANDLING
//! ==============
//! Orchestration operations absorb every variant locally: `Rejected`
//! surfaces its server message verbatim, `Transport` and `Timeout` surface
//! a generic internal-error notice, `TenantNotSelected` resolves into a
//! redirect to the selection screen, and `IdentityUnconfirmed` means
//! "not logged in". Nothing here propagates to the embedding application
//! as an unhandled fault.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failures produced by auth API calls and orchestration guards.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// A credential operation was attempted before an institute was chosen.
    #[error("no institute selected")]
    TenantNotSelected,
    /// The server returned a non-success status with a user-facing message.
    #[error("{0}")]
    Rejected(String),
    /// Network or decode failure between client and server.
    #[error("transport failure: {0}")]
    Transport(String),
    /// The request exceeded the configured deadline.
    #[error("request timed out")]
    Timeout,
    /// The identity endpoint answered without a positive confirmation.
    #[error("identity not confirmed")]
    IdentityUnconfirmed,
}

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Transport(err.to_string())
        }
    }
}
