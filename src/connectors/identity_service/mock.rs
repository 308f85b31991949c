use super::IdentityConnector;
use crate::connectors::errors::ConnectorError;
use crate::models;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// Identity connector backed by a fixed token table.
#[derive(Default)]
pub struct MockIdentityConnector {
    sessions: HashMap<String, models::User>,
    ended: Mutex<Vec<String>>,
}

impl MockIdentityConnector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(mut self, token: &str, user_id: &str) -> Self {
        let user = models::User {
            id: user_id.to_string(),
            email: format!("{}@example.com", user_id),
            name: None,
            picture: None,
        };
        self.sessions.insert(token.to_string(), user);
        self
    }

    pub fn ended_sessions(&self) -> Vec<String> {
        self.ended.lock().map(|e| e.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl IdentityConnector for MockIdentityConnector {
    async fn redirect_url(&self, provider: &str) -> Result<String, ConnectorError> {
        Ok(format!("https://identity.example.com/oauth/{}", provider))
    }

    async fn exchange_code(&self, code: &str) -> Result<String, ConnectorError> {
        if code == "invalid" {
            return Err(ConnectorError::Unauthorized("HTTP 401 - bad code".to_string()));
        }
        Ok(format!("session-{}", code))
    }

    async fn fetch_user(&self, session_token: &str) -> Result<models::User, ConnectorError> {
        self.sessions
            .get(session_token)
            .cloned()
            .ok_or_else(|| ConnectorError::Unauthorized("HTTP 401 - unknown session".to_string()))
    }

    async fn end_session(&self, session_token: &str) -> Result<(), ConnectorError> {
        if let Ok(mut ended) = self.ended.lock() {
            ended.push(session_token.to_string());
        }
        Ok(())
    }
}
