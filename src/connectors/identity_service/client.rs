use crate::connectors::config::IdentityServiceConfig;
use crate::connectors::errors::ConnectorError;
use crate::forms;
use crate::models;

use serde::Deserialize;
use tracing::Instrument;

use super::IdentityConnector;

const API_KEY_HEADER: &str = "x-api-key";

/// HTTP client for the hosted identity service
pub struct IdentityServiceClient {
    pub(crate) base_url: String,
    pub(crate) http_client: reqwest::Client,
    pub(crate) api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RedirectUrlResponse {
    #[serde(alias = "redirectUrl")]
    redirect_url: String,
}

#[derive(Debug, Deserialize)]
struct SessionResponse {
    #[serde(alias = "sessionToken")]
    session_token: String,
}

impl IdentityServiceClient {
    pub fn new(config: IdentityServiceConfig) -> Self {
        let timeout = std::time::Duration::from_secs(config.timeout_secs);
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|err| {
                tracing::error!("Failed to configure identity HTTP client: {:?}", err);
                reqwest::Client::new()
            });

        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http_client,
            api_key: config.api_key,
        }
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let req = self.http_client.request(method, url);
        match self.api_key.as_ref() {
            Some(key) => req.header(API_KEY_HEADER, key),
            None => req,
        }
    }

    async fn send(
        &self,
        req: reqwest::RequestBuilder,
        span: tracing::Span,
    ) -> Result<reqwest::Response, ConnectorError> {
        let resp = req.send().instrument(span).await.map_err(|e| {
            tracing::error!("identity service request failed: {:?}", e);
            ConnectorError::from(e)
        })?;

        if resp.status().is_success() {
            Ok(resp)
        } else {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            Err(ConnectorError::from_status(status, text))
        }
    }
}

#[async_trait::async_trait]
impl IdentityConnector for IdentityServiceClient {
    async fn redirect_url(&self, provider: &str) -> Result<String, ConnectorError> {
        let span = tracing::info_span!("identity_service_redirect_url", provider = %provider);
        let req = self.request(
            reqwest::Method::GET,
            &format!("/oauth/{}/redirect_url", provider),
        );

        let body = self
            .send(req, span)
            .await?
            .json::<RedirectUrlResponse>()
            .await
            .map_err(|e| ConnectorError::InvalidResponse(e.to_string()))?;

        Ok(body.redirect_url)
    }

    async fn exchange_code(&self, code: &str) -> Result<String, ConnectorError> {
        let span = tracing::info_span!("identity_service_exchange_code");
        let req = self
            .request(reqwest::Method::POST, "/sessions")
            .json(&serde_json::json!({ "code": code }));

        let body = self
            .send(req, span)
            .await?
            .json::<SessionResponse>()
            .await
            .map_err(|e| ConnectorError::InvalidResponse(e.to_string()))?;

        Ok(body.session_token)
    }

    async fn fetch_user(&self, session_token: &str) -> Result<models::User, ConnectorError> {
        let span = tracing::info_span!("identity_service_fetch_user");
        let req = self
            .request(reqwest::Method::GET, "/users/me")
            .bearer_auth(session_token);

        self.send(req, span)
            .await?
            .json::<forms::UserForm>()
            .await
            .map_err(|e| ConnectorError::InvalidResponse(e.to_string()))?
            .try_into()
            .map_err(ConnectorError::InvalidResponse)
    }

    async fn end_session(&self, session_token: &str) -> Result<(), ConnectorError> {
        let span = tracing::info_span!("identity_service_end_session");
        let req = self
            .request(reqwest::Method::DELETE, "/sessions")
            .bearer_auth(session_token);

        self.send(req, span).await.map(|_| ())
    }
}
