mod get;
mod send;

pub use get::*;
pub use send::*;
