pub mod conversation;
pub mod message;
pub mod note;
pub mod session;
pub mod user;

pub use conversation::*;
pub use message::*;
pub use note::*;
pub use session::*;
pub use user::UserForm;
