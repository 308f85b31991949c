//! Session authentication for the protected API scopes.
//!
//! A request is authenticated by a bearer header or by the session cookie. The resolved
//! `Arc<models::User>` is stored in the request extensions for handlers to pick up
//! through `web::ReqData`.

mod cache;
mod getheader;
mod manager;
mod manager_middleware;
mod method;

pub use cache::SessionCache;
pub use getheader::*;
pub use manager::*;
pub use manager_middleware::*;
