use super::{CompletionConnector, TokenStream};
use crate::connectors::errors::ConnectorError;
use crate::models::ChatTurn;
use async_trait::async_trait;
use std::sync::Mutex;

/// Scripted completion connector for tests.
pub struct MockCompletionConnector {
    tokens: Vec<String>,
    fail_after: Option<usize>,
    unavailable: bool,
    received: Mutex<Vec<Vec<ChatTurn>>>,
}

impl MockCompletionConnector {
    /// Replies with `tokens` and then completes.
    pub fn replying(tokens: &[&str]) -> Self {
        Self {
            tokens: tokens.iter().map(|t| t.to_string()).collect(),
            fail_after: None,
            unavailable: false,
            received: Mutex::new(Vec::new()),
        }
    }

    /// Emits the first `n` tokens, then breaks off with an error.
    pub fn failing_after(tokens: &[&str], n: usize) -> Self {
        Self {
            fail_after: Some(n),
            ..Self::replying(tokens)
        }
    }

    /// Refuses the call before any token.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::replying(&[])
        }
    }

    /// Every conversation sent upstream so far.
    pub fn received(&self) -> Vec<Vec<ChatTurn>> {
        self.received.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl CompletionConnector for MockCompletionConnector {
    async fn stream_chat(&self, turns: Vec<ChatTurn>) -> Result<TokenStream, ConnectorError> {
        if let Ok(mut received) = self.received.lock() {
            received.push(turns);
        }

        if self.unavailable {
            return Err(ConnectorError::ServiceUnavailable(
                "Connection failed: mock".to_string(),
            ));
        }

        let mut items: Vec<Result<String, ConnectorError>> = self
            .tokens
            .iter()
            .take(self.fail_after.unwrap_or(usize::MAX))
            .cloned()
            .map(Ok)
            .collect();
        if self.fail_after.is_some() {
            items.push(Err(ConnectorError::StreamInterrupted(
                "connection reset".to_string(),
            )));
        }

        Ok(Box::pin(futures::stream::iter(items)))
    }
}
