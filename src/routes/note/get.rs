use crate::db::Store;
use crate::helpers::JsonResponse;
use crate::models;
use crate::services::fetch_owned;
use actix_web::{get, web, Responder, Result};
use std::sync::Arc;

#[tracing::instrument(name = "Get note list.", skip(store))]
#[get("")]
pub async fn list_handler(
    user: web::ReqData<Arc<models::User>>,
    store: web::Data<Arc<dyn Store>>,
) -> Result<impl Responder> {
    store
        .list_notes(&user.id)
        .await
        .map_err(|_err| JsonResponse::build().internal_server_error(""))
        .map(web::Json)
}

#[tracing::instrument(name = "Get note.", skip(store))]
#[get("/{id}")]
pub async fn item_handler(
    path: web::Path<(i32,)>,
    user: web::ReqData<Arc<models::User>>,
    store: web::Data<Arc<dyn Store>>,
) -> Result<impl Responder> {
    let note: models::Note = fetch_owned(store.get_ref().as_ref(), path.0, &user).await?;

    Ok(web::Json(note))
}
