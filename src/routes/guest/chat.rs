use crate::connectors::CompletionConnector;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::services;
use actix_web::{post, web, HttpResponse, Result};
use serde_valid::Validate;
use std::sync::Arc;

/// Single-turn chat for visitors without a session. Nothing is stored.
#[tracing::instrument(name = "Guest chat.", skip(completion))]
#[post("/chat")]
pub async fn chat_handler(
    form: web::Json<forms::GuestChatForm>,
    completion: web::Data<Arc<dyn CompletionConnector>>,
) -> Result<HttpResponse> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::build().form_error(errors.to_string()));
    }

    let frames = services::relay_guest(completion.get_ref().clone(), form.into_inner().message).await;

    Ok(services::event_stream(frames))
}
