use crate::configuration::Settings;
use crate::connectors::{ConnectorError, IdentityConnector};
use crate::forms;
use crate::helpers::{success, JsonResponse};
use actix_web::{cookie::time::Duration, post, web, HttpResponse, Result};
use serde_valid::Validate;
use std::sync::Arc;

/// Exchanges the OAuth callback code for a session and hands the token to the browser as a cookie.
#[tracing::instrument(name = "Create session.", skip(identity, settings))]
#[post("/sessions")]
pub async fn create_session_handler(
    form: web::Json<forms::SessionForm>,
    identity: web::Data<Arc<dyn IdentityConnector>>,
    settings: web::Data<Settings>,
) -> Result<HttpResponse> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::build().form_error(errors.to_string()));
    }

    let token = identity
        .exchange_code(&form.code)
        .await
        .map_err(|err| match err {
            ConnectorError::Unauthorized(_) => {
                JsonResponse::build().unauthorized("Invalid authorization code")
            }
            err => {
                tracing::error!("Session exchange failed: {}", err);
                JsonResponse::build().bad_gateway("Identity service unavailable")
            }
        })?;

    let max_age = Duration::days(settings.session.max_age_days);
    let cookie = super::session_cookie(&settings.session, token, max_age);

    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(success().into_inner()))
}
