use crate::db::Store;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use std::sync::Arc;

#[tracing::instrument(name = "Add note.", skip(store))]
#[post("")]
pub async fn add_handler(
    user: web::ReqData<Arc<models::User>>,
    form: web::Json<forms::NoteForm>,
    store: web::Data<Arc<dyn Store>>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::build().form_error(errors.to_string()));
    }

    let note = form.into_inner().into_model(user.id.clone());
    store
        .insert_note(note)
        .await
        .map_err(|_err| JsonResponse::build().internal_server_error(""))
        .map(web::Json)
}
