//! Server-Sent Events framing.
//!
//! Outbound frames are `data: <json>\n\n`; the stream ends with `data: [DONE]\n\n`.
//! Inbound streams are read with `reqwest_eventsource`; the payload helpers here apply
//! the same rules to both directions.

use actix_web::web::Bytes;
use serde::{Deserialize, Serialize};

pub const DATA_PREFIX: &str = "data: ";
pub const DONE_SIGNAL: &str = "[DONE]";
pub const CONTENT_TYPE: &str = "text/event-stream";

/// Payload of a single forwarded token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub content: String,
}

impl TokenEvent {
    pub fn token(content: impl Into<String>) -> Self {
        Self {
            role: None,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Some("assistant".to_string()),
            content: content.into(),
        }
    }

    pub fn to_frame(&self) -> Bytes {
        let payload = serde_json::to_string(self).unwrap_or_default();
        frame(&payload)
    }
}

fn frame(payload: &str) -> Bytes {
    Bytes::from(format!("{DATA_PREFIX}{payload}\n\n"))
}

pub fn token_frame(content: &str) -> Bytes {
    TokenEvent::token(content).to_frame()
}

pub fn done_frame() -> Bytes {
    frame(DONE_SIGNAL)
}

/// Whether an event payload is the terminal `[DONE]` marker.
pub fn is_done(data: &str) -> bool {
    data.trim() == DONE_SIGNAL
}

/// Decode a relay payload, skipping fragments that are not valid token JSON.
pub fn parse_token(data: &str) -> Option<TokenEvent> {
    match serde_json::from_str::<TokenEvent>(data) {
        Ok(event) => Some(event),
        Err(err) => {
            tracing::debug!("Skipping unparseable event payload: {}", err);
            None
        }
    }
}
