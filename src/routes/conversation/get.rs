use crate::db::Store;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{get, web, Responder, Result};
use std::sync::Arc;

#[tracing::instrument(name = "Get conversation list.", skip(store))]
#[get("")]
pub async fn list_handler(
    user: web::ReqData<Arc<models::User>>,
    store: web::Data<Arc<dyn Store>>,
) -> Result<impl Responder> {
    store
        .list_conversations(&user.id)
        .await
        .map_err(|_err| JsonResponse::build().internal_server_error(""))
        .map(web::Json)
}
