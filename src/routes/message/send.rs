use crate::connectors::CompletionConnector;
use crate::db::Store;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use crate::services::{self, fetch_owned};
use actix_web::{post, web, HttpResponse, Result};
use serde_valid::Validate;
use std::sync::Arc;

/// Stores the user message and streams the assistant reply back as an event stream.
#[tracing::instrument(name = "Send conversation message.", skip(store, completion))]
#[post("/{id}/messages")]
pub async fn send_handler(
    path: web::Path<(i32,)>,
    user: web::ReqData<Arc<models::User>>,
    form: web::Json<forms::MessageForm>,
    store: web::Data<Arc<dyn Store>>,
    completion: web::Data<Arc<dyn CompletionConnector>>,
) -> Result<HttpResponse> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::build().form_error(errors.to_string()));
    }

    let conversation: models::Conversation =
        fetch_owned(store.get_ref().as_ref(), path.0, &user).await?;

    let frames = services::relay_conversation(
        store.get_ref().clone(),
        completion.get_ref().clone(),
        conversation.id,
        form.into_inner().content,
    )
    .await?;

    Ok(services::event_stream(frames))
}
