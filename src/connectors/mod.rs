//! External service connectors
//!
//! Every outbound integration sits behind a trait so handlers never depend on HTTP details:
//!
//! 1. the trait lives in `{service}/mod.rs`;
//! 2. the reqwest implementation in `{service}/client.rs`;
//! 3. a scripted implementation in `{service}/mock.rs` for unit tests;
//! 4. `init` wraps the configured client as `web::Data<Arc<dyn Trait>>`.
//!
//! ```ignore
//! pub async fn handler(
//!     completion: web::Data<Arc<dyn CompletionConnector>>,
//! ) -> Result<impl Responder> {
//!     let tokens = completion.stream_chat(turns).await?;
//! }
//! ```

pub mod completion_service;
pub mod config;
pub mod errors;
pub mod identity_service;

pub use completion_service::{CompletionConnector, CompletionServiceClient, TokenStream};
pub use config::{CompletionServiceConfig, ConnectorConfig, IdentityServiceConfig};
pub use errors::ConnectorError;
pub use identity_service::{IdentityConnector, IdentityServiceClient};

pub use completion_service::init as init_completion_service;
pub use identity_service::init as init_identity_service;
