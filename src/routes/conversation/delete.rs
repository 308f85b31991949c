use crate::db::Store;
use crate::helpers::{success, JsonResponse};
use crate::models;
use crate::services::fetch_owned;
use actix_web::{delete, web, Responder, Result};
use std::sync::Arc;

/// Deletes the conversation and every message in it.
#[tracing::instrument(name = "Delete conversation.", skip(store))]
#[delete("/{id}")]
pub async fn delete_handler(
    path: web::Path<(i32,)>,
    user: web::ReqData<Arc<models::User>>,
    store: web::Data<Arc<dyn Store>>,
) -> Result<impl Responder> {
    let id = path.0;
    let conversation: models::Conversation =
        fetch_owned(store.get_ref().as_ref(), id, &user).await?;

    store
        .delete_conversation(conversation.id)
        .await
        .map_err(|_err| JsonResponse::build().internal_server_error(""))
        .map(|_| success())
}
