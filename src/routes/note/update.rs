use crate::db::Store;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use crate::services::fetch_owned;
use actix_web::{put, web, Responder, Result};
use serde_valid::Validate;
use std::sync::Arc;

/// Partial update; absent fields keep their stored value.
#[tracing::instrument(name = "Update note.", skip(store))]
#[put("/{id}")]
pub async fn update_handler(
    path: web::Path<(i32,)>,
    user: web::ReqData<Arc<models::User>>,
    form: web::Json<forms::NoteUpdate>,
    store: web::Data<Arc<dyn Store>>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::build().form_error(errors.to_string()));
    }

    let mut note: models::Note = fetch_owned(store.get_ref().as_ref(), path.0, &user).await?;
    form.into_inner().update(&mut note);

    store
        .update_note(note)
        .await
        .map_err(|_err| JsonResponse::build().internal_server_error(""))
        .map(web::Json)
}
