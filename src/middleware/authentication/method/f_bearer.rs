use crate::middleware::authentication::get_header;
use actix_web::dev::ServiceRequest;

fn try_extract_token(authorization: &str) -> Result<String, String> {
    let mut parts = authorization.splitn(2, ' ');
    match parts.next() {
        Some("Bearer") => {}
        _ => return Err("Bearer missing scheme".to_string()),
    }

    match parts.next().map(str::trim) {
        Some(token) if !token.is_empty() => Ok(token.to_string()),
        _ => {
            tracing::error!("Bearer token is missing");
            Err("Authentication required".to_string())
        }
    }
}

#[tracing::instrument(name = "Authenticate with bearer token", skip(req))]
pub async fn try_bearer(req: &mut ServiceRequest) -> Result<bool, String> {
    let authorization = match get_header::<String>(req, "authorization")? {
        Some(value) => value,
        None => return Ok(false),
    };

    let token = try_extract_token(&authorization)?;
    super::authenticate(req, token).await?;

    Ok(true)
}
