//! Completion service connector
//!
//! Streams assistant tokens from an OpenAI-compatible `/chat/completions` endpoint.

use crate::connectors::errors::ConnectorError;
use crate::models::ChatTurn;
use async_trait::async_trait;
use futures::stream::BoxStream;

pub mod client;
mod init;
#[cfg(test)]
pub mod mock;

pub use client::CompletionServiceClient;
pub use init::init;
#[cfg(test)]
pub use mock::MockCompletionConnector;

/// Ordered assistant text fragments. The stream ends after the upstream signals completion;
/// an `Err` item means the upstream broke off mid-reply.
pub type TokenStream = BoxStream<'static, Result<String, ConnectorError>>;

#[async_trait]
pub trait CompletionConnector: Send + Sync {
    /// Open a streaming completion for `turns`.
    ///
    /// Errors returned here happen before any token was produced (connection refused,
    /// rejected key, upstream 5xx).
    async fn stream_chat(&self, turns: Vec<ChatTurn>) -> Result<TokenStream, ConnectorError>;
}
