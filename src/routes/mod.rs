pub(crate) mod conversation;
pub(crate) mod guest;
pub mod health_checks;
pub(crate) mod message;
pub(crate) mod note;
pub(crate) mod session;
#[cfg(test)]
pub(crate) mod testing;

pub use health_checks::*;
