use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Note {
    pub id: i32,
    pub user_id: String,
    pub title: String,
    pub content: String,
    pub subject: Option<String>,
    pub tags: Option<String>, // free text, not parsed
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
