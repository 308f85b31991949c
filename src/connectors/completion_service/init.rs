use actix_web::web;
use std::sync::Arc;

use crate::connectors::completion_service::{CompletionConnector, CompletionServiceClient};
use crate::connectors::config::ConnectorConfig;

/// Build the completion connector for injection into the actix app.
pub fn init(connector_config: &ConnectorConfig) -> web::Data<Arc<dyn CompletionConnector>> {
    let config = connector_config.completion_service.clone();
    if config.api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY is not set, completion requests will be rejected upstream");
    }
    tracing::info!(
        "Initializing completion connector: {} ({})",
        config.base_url,
        config.model
    );

    let connector: Arc<dyn CompletionConnector> = Arc::new(CompletionServiceClient::new(config));
    web::Data::new(connector)
}
