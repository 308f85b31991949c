use crate::connectors::config::CompletionServiceConfig;
use crate::connectors::errors::ConnectorError;
use crate::helpers::sse;
use crate::models::ChatTurn;

use futures::StreamExt;
use reqwest_eventsource::{retry, Error as EventSourceError, Event, EventSource};
use serde::Deserialize;
use std::time::Duration;
use tracing::Instrument;

use super::{CompletionConnector, TokenStream};

/// HTTP client for an OpenAI-compatible completion endpoint
pub struct CompletionServiceClient {
    pub(crate) base_url: String,
    pub(crate) model: String,
    pub(crate) http_client: reqwest::Client,
    pub(crate) api_key: Option<String>,
    /// Longest silence tolerated between two upstream events
    pub(crate) idle_timeout: Duration,
}

impl CompletionServiceClient {
    pub fn new(config: CompletionServiceConfig) -> Self {
        // no whole-request timeout: a long reply may stream for minutes
        let http_client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .unwrap_or_else(|err| {
                tracing::error!("Failed to configure completion HTTP client: {:?}", err);
                reqwest::Client::new()
            });

        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model,
            http_client,
            api_key: config.api_key,
            idle_timeout: Duration::from_secs(config.idle_timeout_secs),
        }
    }

    fn auth_header(&self) -> Option<String> {
        self.api_key.as_ref().map(|key| format!("Bearer {}", key))
    }
}

#[derive(Debug, Deserialize)]
struct ChunkDelta {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChunkChoice {
    delta: ChunkDelta,
}

#[derive(Debug, Deserialize)]
struct ChunkError {
    message: String,
}

/// One `data:` payload of the upstream stream.
#[derive(Debug, Deserialize)]
struct CompletionChunk {
    #[serde(default)]
    choices: Vec<ChunkChoice>,
    error: Option<ChunkError>,
}

/// Turn one upstream payload into a token, `Ok(None)` when it carries no text.
fn chunk_token(data: &str) -> Result<Option<String>, ConnectorError> {
    let chunk = match serde_json::from_str::<CompletionChunk>(data) {
        Ok(chunk) => chunk,
        Err(err) => {
            tracing::debug!("Skipping malformed completion chunk: {}", err);
            return Ok(None);
        }
    };

    if let Some(error) = chunk.error {
        return Err(ConnectorError::StreamInterrupted(error.message));
    }

    Ok(chunk
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.delta.content))
}

/// Map a failure to open the event stream onto the connector error kinds.
async fn open_error(err: EventSourceError) -> ConnectorError {
    match err {
        EventSourceError::InvalidStatusCode(status, resp) => {
            let text = resp.text().await.unwrap_or_default();
            ConnectorError::from_status(status, text)
        }
        EventSourceError::Transport(err) => ConnectorError::from(err),
        EventSourceError::InvalidContentType(content_type, _) => ConnectorError::InvalidResponse(
            format!("unexpected content type {:?}", content_type),
        ),
        other => ConnectorError::InvalidResponse(other.to_string()),
    }
}

#[async_trait::async_trait]
impl CompletionConnector for CompletionServiceClient {
    async fn stream_chat(&self, turns: Vec<ChatTurn>) -> Result<TokenStream, ConnectorError> {
        let span = tracing::info_span!(
            "completion_service_stream_chat",
            model = %self.model,
            turns = turns.len()
        );

        let url = format!("{}/chat/completions", self.base_url);
        let body = serde_json::json!({
            "model": self.model,
            "stream": true,
            "messages": turns,
        });

        let mut req = self.http_client.post(&url).json(&body);
        if let Some(auth) = self.auth_header() {
            req = req.header("Authorization", auth);
        }

        let mut events = EventSource::new(req)
            .map_err(|err| ConnectorError::HttpError(err.to_string()))?;
        events.set_retry_policy(Box::new(retry::Never));

        // wait for the response head so a rejected call fails before any token is relayed
        let opened = tokio::time::timeout(self.idle_timeout, events.next())
            .instrument(span)
            .await;
        match opened {
            Ok(Some(Ok(Event::Open))) => {}
            Ok(Some(Ok(Event::Message(_)))) => {
                events.close();
                return Err(ConnectorError::InvalidResponse(
                    "event before stream was opened".to_string(),
                ));
            }
            Ok(Some(Err(err))) => {
                events.close();
                let err = open_error(err).await;
                tracing::error!("completion service rejected request: {}", err);
                return Err(err);
            }
            Ok(None) => {
                return Err(ConnectorError::ServiceUnavailable(
                    "stream closed before opening".to_string(),
                ));
            }
            Err(_) => {
                events.close();
                tracing::error!("completion service did not answer in time");
                return Err(ConnectorError::ServiceUnavailable(
                    "timed out waiting for the completion stream".to_string(),
                ));
            }
        }

        let idle_timeout = self.idle_timeout;
        let tokens = async_stream::stream! {
            loop {
                let event = match tokio::time::timeout(idle_timeout, events.next()).await {
                    Ok(Some(event)) => event,
                    Ok(None) => break,
                    Err(_) => {
                        events.close();
                        yield Err(ConnectorError::StreamInterrupted(format!(
                            "no data for {}s",
                            idle_timeout.as_secs()
                        )));
                        return;
                    }
                };

                match event {
                    Ok(Event::Open) => {}
                    Ok(Event::Message(message)) => {
                        if sse::is_done(&message.data) {
                            break;
                        }
                        match chunk_token(&message.data) {
                            Ok(Some(token)) => yield Ok(token),
                            Ok(None) => {}
                            Err(err) => {
                                events.close();
                                yield Err(err);
                                return;
                            }
                        }
                    }
                    Err(EventSourceError::StreamEnded) => break,
                    Err(err) => {
                        events.close();
                        yield Err(ConnectorError::StreamInterrupted(err.to_string()));
                        return;
                    }
                }
            }
            events.close();
        };

        Ok(Box::pin(tokens))
    }
}
