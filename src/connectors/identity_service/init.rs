use actix_web::web;
use std::sync::Arc;

use crate::connectors::config::ConnectorConfig;
use crate::connectors::identity_service::{IdentityConnector, IdentityServiceClient};

/// Build the identity connector for injection into the actix app.
pub fn init(connector_config: &ConnectorConfig) -> web::Data<Arc<dyn IdentityConnector>> {
    let config = connector_config.identity_service.clone();
    if config.api_key.is_none() {
        tracing::warn!("IDENTITY_SERVICE_API_KEY is not set");
    }
    tracing::info!("Initializing identity connector: {}", config.base_url);

    let connector: Arc<dyn IdentityConnector> = Arc::new(IdentityServiceClient::new(config));
    web::Data::new(connector)
}
