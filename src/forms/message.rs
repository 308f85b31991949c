use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MessageForm {
    #[validate(min_length = 1)]
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GuestChatForm {
    #[validate(min_length = 1)]
    pub message: String,
}
