use crate::models;
use actix_web::{get, web, Responder, Result};
use std::sync::Arc;

#[tracing::instrument(name = "Get current user.")]
#[get("/me")]
pub async fn me_handler(user: web::ReqData<Arc<models::User>>) -> Result<impl Responder> {
    let user: models::User = (**user).clone();
    Ok(web::Json(user))
}
