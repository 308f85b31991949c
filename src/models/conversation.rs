use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Conversation {
    pub id: i32,
    pub user_id: String, // external identity id
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Conversation {
    pub fn new(user_id: String, title: String) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            user_id,
            title,
            created_at: now,
            updated_at: now,
        }
    }
}
