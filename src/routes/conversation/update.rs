use crate::db::Store;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use crate::services::fetch_owned;
use actix_web::{put, web, Responder, Result};
use serde_valid::Validate;
use std::sync::Arc;

#[tracing::instrument(name = "Update conversation.", skip(store))]
#[put("/{id}")]
pub async fn update_handler(
    path: web::Path<(i32,)>,
    user: web::ReqData<Arc<models::User>>,
    form: web::Json<forms::ConversationUpdate>,
    store: web::Data<Arc<dyn Store>>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::build().form_error(errors.to_string()));
    }

    let id = path.0;
    let mut conversation: models::Conversation =
        fetch_owned(store.get_ref().as_ref(), id, &user).await?;
    form.into_inner().update(&mut conversation);

    store
        .update_conversation(conversation)
        .await
        .map_err(|_err| JsonResponse::build().internal_server_error(""))
        .map(web::Json)
}
