use crate::db::Store;
use crate::helpers::JsonResponse;
use crate::models;
use crate::services::fetch_owned;
use actix_web::{get, web, Responder, Result};
use std::sync::Arc;

/// Conversation history, oldest first.
#[tracing::instrument(name = "Get conversation messages.", skip(store))]
#[get("/{id}/messages")]
pub async fn list_handler(
    path: web::Path<(i32,)>,
    user: web::ReqData<Arc<models::User>>,
    store: web::Data<Arc<dyn Store>>,
) -> Result<impl Responder> {
    let conversation: models::Conversation =
        fetch_owned(store.get_ref().as_ref(), path.0, &user).await?;

    store
        .list_messages(conversation.id)
        .await
        .map_err(|_err| JsonResponse::build().internal_server_error(""))
        .map(web::Json)
}
