mod callable;
pub mod guest_chat;
pub mod migrate;

pub use callable::*;
pub use guest_chat::GuestChatCommand;
pub use migrate::MigrateCommand;
