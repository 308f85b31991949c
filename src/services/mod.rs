pub mod ownership;
pub mod prompt;
pub mod relay;

pub use ownership::{fetch_owned, Owned, OwnershipError};
pub use relay::{event_stream, relay_conversation, relay_guest, FrameStream, RelayError};
