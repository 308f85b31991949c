//! Identity service connector
//!
//! Sessions are owned by a hosted identity service. This crate only exchanges OAuth codes
//! for session tokens and resolves tokens to users.

use crate::connectors::errors::ConnectorError;
use crate::models;
use async_trait::async_trait;

pub mod client;
mod init;
#[cfg(test)]
pub mod mock;

pub use client::IdentityServiceClient;
pub use init::init;
#[cfg(test)]
pub use mock::MockIdentityConnector;

#[async_trait]
pub trait IdentityConnector: Send + Sync {
    /// Provider login URL the browser is sent to.
    async fn redirect_url(&self, provider: &str) -> Result<String, ConnectorError>;

    /// Trade the OAuth callback code for a session token.
    async fn exchange_code(&self, code: &str) -> Result<String, ConnectorError>;

    /// Resolve a session token to its user. Unknown or expired tokens yield `Unauthorized`.
    async fn fetch_user(&self, session_token: &str) -> Result<models::User, ConnectorError>;

    async fn end_session(&self, session_token: &str) -> Result<(), ConnectorError>;
}
