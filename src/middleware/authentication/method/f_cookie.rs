use crate::configuration::Settings;
use actix_web::{dev::ServiceRequest, web};

#[tracing::instrument(name = "Authenticate with session cookie", skip(req))]
pub async fn try_cookie(req: &mut ServiceRequest) -> Result<bool, String> {
    let cookie_name = req
        .app_data::<web::Data<Settings>>()
        .ok_or("settings are not configured")?
        .session
        .cookie_name
        .clone();

    let token = match req.cookie(&cookie_name) {
        Some(cookie) if !cookie.value().is_empty() => cookie.value().to_string(),
        _ => return Ok(false),
    };

    tracing::debug!("Found session token in cookies");
    super::authenticate(req, token).await?;

    Ok(true)
}
