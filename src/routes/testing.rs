//! Wiring for handler tests: the full API against in-memory collaborators.

use crate::configuration::Settings;
use crate::connectors::completion_service::MockCompletionConnector;
use crate::connectors::identity_service::MockIdentityConnector;
use crate::connectors::{CompletionConnector, IdentityConnector};
use crate::db::{memory::MemoryStore, Store};
use crate::middleware::authentication::SessionCache;
use crate::startup;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{test, web};
use std::sync::Arc;
use std::time::Duration;

pub const ALICE: &str = "alice-token";
pub const BOB: &str = "bob-token";

pub struct TestContext {
    pub store: Arc<MemoryStore>,
    pub completion: Arc<MockCompletionConnector>,
    pub identity: Arc<MockIdentityConnector>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_completion(MockCompletionConnector::replying(&["A ", "derivative ", "is..."]))
    }

    pub fn with_completion(completion: MockCompletionConnector) -> Self {
        Self {
            store: Arc::new(MemoryStore::new()),
            completion: Arc::new(completion),
            identity: Arc::new(
                MockIdentityConnector::new()
                    .with_session(ALICE, "alice")
                    .with_session(BOB, "bob"),
            ),
        }
    }

    pub fn configure(&self) -> impl FnOnce(&mut web::ServiceConfig) {
        let store: Arc<dyn Store> = self.store.clone();
        let completion: Arc<dyn CompletionConnector> = self.completion.clone();
        let identity: Arc<dyn IdentityConnector> = self.identity.clone();
        let settings = Settings::for_tests();

        move |cfg: &mut web::ServiceConfig| {
            cfg.app_data(web::Data::new(settings))
                .app_data(web::Data::new(store))
                .app_data(web::Data::new(completion))
                .app_data(web::Data::new(identity))
                .app_data(web::Data::new(SessionCache::new(Duration::ZERO)));
            startup::api(cfg);
        }
    }
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}

/// Status the client would see, including errors raised by middleware.
pub async fn call_status<S>(app: &S, req: actix_http::Request) -> StatusCode
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    match test::try_call_service(app, req).await {
        Ok(resp) => resp.status(),
        Err(err) => err.as_response_error().status_code(),
    }
}
