pub(crate) mod json;
pub mod sse;

pub use json::*;
