use crate::connectors::IdentityConnector;
use crate::helpers::JsonResponse;
use actix_web::{get, web, Responder, Result};
use serde_json::json;
use std::sync::Arc;

#[tracing::instrument(name = "Get OAuth redirect url.", skip(identity))]
#[get("/oauth/{provider}/redirect_url")]
pub async fn redirect_url_handler(
    path: web::Path<(String,)>,
    identity: web::Data<Arc<dyn IdentityConnector>>,
) -> Result<impl Responder> {
    let provider = path.into_inner().0;
    let redirect_url = identity.redirect_url(&provider).await.map_err(|err| {
        tracing::error!("Failed to get redirect url for {}: {}", provider, err);
        JsonResponse::build().bad_gateway("Identity service unavailable")
    })?;

    Ok(web::Json(json!({ "redirectUrl": redirect_url })))
}
