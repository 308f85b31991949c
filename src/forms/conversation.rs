use crate::models;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ConversationForm {
    #[validate(min_length = 1)]
    #[validate(max_length = 255)]
    pub title: String,
}

impl ConversationForm {
    pub fn into_model(self, user_id: String) -> models::Conversation {
        models::Conversation::new(user_id, self.title)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ConversationUpdate {
    #[validate(min_length = 1)]
    #[validate(max_length = 255)]
    pub title: Option<String>,
}

impl ConversationUpdate {
    pub fn update(self, conversation: &mut models::Conversation) {
        if let Some(title) = self.title {
            conversation.title = title;
        }
    }
}
