use crate::models;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NoteForm {
    #[validate(min_length = 1)]
    #[validate(max_length = 255)]
    pub title: String,
    pub content: String,
    #[validate(max_length = 255)]
    pub subject: Option<String>,
    pub tags: Option<String>,
}

impl NoteForm {
    pub fn into_model(self, user_id: String) -> models::Note {
        let now = Utc::now();
        models::Note {
            id: 0,
            user_id,
            title: self.title,
            content: self.content,
            subject: non_empty(self.subject),
            tags: non_empty(self.tags),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial note update; fields left out keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct NoteUpdate {
    #[validate(min_length = 1)]
    #[validate(max_length = 255)]
    pub title: Option<String>,
    pub content: Option<String>,
    #[validate(max_length = 255)]
    pub subject: Option<String>,
    pub tags: Option<String>,
}

impl NoteUpdate {
    pub fn update(self, note: &mut models::Note) {
        if let Some(title) = self.title {
            note.title = title;
        }
        if let Some(content) = self.content {
            note.content = content;
        }
        // an empty string clears the optional fields
        if let Some(subject) = self.subject {
            note.subject = non_empty(Some(subject));
        }
        if let Some(tags) = self.tags {
            note.tags = non_empty(Some(tags));
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
