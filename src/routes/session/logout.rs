use crate::configuration::Settings;
use crate::connectors::IdentityConnector;
use crate::helpers::success;
use crate::middleware::authentication::SessionCache;
use actix_web::{cookie::time::Duration, get, web, HttpRequest, HttpResponse, Result};
use std::sync::Arc;

/// Ends the identity session, if any, and always clears the cookie.
#[tracing::instrument(name = "Logout.", skip_all)]
#[get("/logout")]
pub async fn logout_handler(
    req: HttpRequest,
    identity: web::Data<Arc<dyn IdentityConnector>>,
    cache: web::Data<SessionCache>,
    settings: web::Data<Settings>,
) -> Result<HttpResponse> {
    if let Some(cookie) = req.cookie(&settings.session.cookie_name) {
        let token = cookie.value();
        cache.remove(token).await;
        if let Err(err) = identity.end_session(token).await {
            tracing::warn!("Failed to end session: {}", err);
        }
    }

    let cookie = super::session_cookie(&settings.session, String::new(), Duration::ZERO);

    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(success().into_inner()))
}
