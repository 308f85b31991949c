//! Stream relay between the completion service and the browser.
//!
//! Upstream tokens are forwarded as event-stream frames the moment they arrive and
//! concatenated on the side. For a stored conversation the assembled reply is written as a
//! single assistant message once the upstream stream ends; the `[DONE]` frame is only sent
//! after that write. Guest chats never touch the store.
//!
//! Dropping the returned stream (client disconnect) drops the upstream stream and the
//! buffer with it, so no assistant message is written.

use crate::connectors::{CompletionConnector, ConnectorError};
use crate::db::Store;
use crate::helpers::sse::{self, TokenEvent};
use crate::models;
use crate::services::prompt;
use actix_web::http::header::{self, ContentEncoding};
use actix_web::web::Bytes;
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use futures::stream::BoxStream;
use futures::StreamExt;
use serde_json::json;
use std::sync::Arc;

pub const GUEST_FALLBACK: &str = "Sorry, I encountered an error. Please try again.";

pub type FrameStream = BoxStream<'static, Result<Bytes, RelayError>>;

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("store failure: {0}")]
    Store(String),
    #[error(transparent)]
    Upstream(#[from] ConnectorError),
}

impl ResponseError for RelayError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            Self::Store(_) => "Internal error",
            Self::Upstream(_) => "Completion service unavailable",
        };
        HttpResponse::build(self.status_code()).json(json!({ "message": message }))
    }
}

/// Relay a new user message in `conversation`.
///
/// The user message is stored and the completion call is opened before this returns, so
/// failures up to that point surface as a plain error response. The caller is expected to
/// have checked ownership already.
#[tracing::instrument(name = "Relay conversation message", skip(store, completion, content))]
pub async fn relay_conversation(
    store: Arc<dyn Store>,
    completion: Arc<dyn CompletionConnector>,
    conversation_id: i32,
    content: String,
) -> Result<FrameStream, RelayError> {
    store
        .insert_message(conversation_id, models::MessageRole::User, &content)
        .await
        .map_err(RelayError::Store)?;

    let history = store
        .list_messages(conversation_id)
        .await
        .map_err(RelayError::Store)?;

    let mut tokens = completion
        .stream_chat(prompt::conversation_turns(&history))
        .await
        .map_err(|err| {
            tracing::error!("Failed to open completion stream: {}", err);
            RelayError::Upstream(err)
        })?;

    let frames = async_stream::stream! {
        let mut reply = String::new();

        while let Some(item) = tokens.next().await {
            match item {
                Ok(token) if token.is_empty() => {}
                Ok(token) => {
                    reply.push_str(&token);
                    yield Ok(sse::token_frame(&token));
                }
                Err(err) => {
                    tracing::error!(
                        "Completion stream for conversation {} failed after {} bytes: {}",
                        conversation_id,
                        reply.len(),
                        err
                    );
                    yield Err(RelayError::Upstream(err));
                    return;
                }
            }
        }

        if let Err(err) = store.insert_reply(conversation_id, &reply).await {
            yield Err(RelayError::Store(err));
            return;
        }

        tracing::info!(
            "Stored assistant reply for conversation {} ({} bytes)",
            conversation_id,
            reply.len()
        );
        yield Ok(sse::done_frame());
    };

    Ok(Box::pin(frames))
}

/// Relay a one-off guest message. Always ends with `[DONE]`; upstream failures are turned
/// into a single apology event.
#[tracing::instrument(name = "Relay guest message", skip(completion, message))]
pub async fn relay_guest(completion: Arc<dyn CompletionConnector>, message: String) -> FrameStream {
    let opened = completion.stream_chat(prompt::guest_turns(&message)).await;

    let frames = async_stream::stream! {
        match opened {
            Ok(mut tokens) => {
                while let Some(item) = tokens.next().await {
                    match item {
                        Ok(token) if token.is_empty() => {}
                        Ok(token) => yield Ok(sse::token_frame(&token)),
                        Err(err) => {
                            tracing::warn!("Guest completion stream failed: {}", err);
                            yield Ok(TokenEvent::assistant(GUEST_FALLBACK).to_frame());
                            break;
                        }
                    }
                }
            }
            Err(err) => {
                tracing::warn!("Failed to open guest completion stream: {}", err);
                yield Ok(TokenEvent::assistant(GUEST_FALLBACK).to_frame());
            }
        }
        yield Ok::<_, RelayError>(sse::done_frame());
    };

    Box::pin(frames)
}

/// Wrap frames in an uncompressed, unbuffered event-stream response.
pub fn event_stream(frames: FrameStream) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, sse::CONTENT_TYPE))
        .insert_header((header::CACHE_CONTROL, "no-cache"))
        .insert_header(("X-Accel-Buffering", "no"))
        .insert_header(ContentEncoding::Identity)
        .streaming(frames)
}
