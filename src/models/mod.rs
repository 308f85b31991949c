mod chat;
mod conversation;
mod message;
mod note;
pub mod user;

pub use chat::*;
pub use conversation::*;
pub use message::*;
pub use note::*;
pub use user::*;
