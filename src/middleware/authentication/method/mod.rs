mod f_bearer;
mod f_cookie;

pub use f_bearer::try_bearer;
pub use f_cookie::try_cookie;

use crate::connectors::IdentityConnector;
use crate::middleware::authentication::SessionCache;
use crate::models;
use actix_web::{dev::ServiceRequest, web, HttpMessage};
use std::sync::Arc;

/// Resolve `token` through the cache or the identity service and attach the user to the request.
async fn authenticate(req: &mut ServiceRequest, token: String) -> Result<(), String> {
    let identity = req
        .app_data::<web::Data<Arc<dyn IdentityConnector>>>()
        .ok_or("identity connector is not configured")?
        .clone();
    let cache = req
        .app_data::<web::Data<SessionCache>>()
        .ok_or("session cache is not configured")?
        .clone();

    let user: models::User = match cache.get(&token).await {
        Some(user) => user,
        None => {
            let user = identity.fetch_user(&token).await.map_err(|err| {
                tracing::info!("session rejected: {}", err);
                "Invalid or expired session".to_string()
            })?;
            cache.insert(token, user.clone()).await;
            user
        }
    };

    if req.extensions_mut().insert(Arc::new(user)).is_some() {
        return Err("user already logged".to_string());
    }

    Ok(())
}
