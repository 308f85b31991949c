//! Persistence for conversations, messages and notes.
//!
//! Queries live in per-table modules as free functions over a `PgPool`. Handlers and the
//! relay talk to the [`Store`] trait so they can run against an in-memory store in tests.

pub mod conversation;
#[cfg(test)]
pub mod memory;
pub mod message;
pub mod note;

use crate::models;
use async_trait::async_trait;
use sqlx::PgPool;

#[async_trait]
pub trait Store: Send + Sync {
    async fn fetch_conversation(&self, id: i32) -> Result<Option<models::Conversation>, String>;
    async fn list_conversations(&self, user_id: &str) -> Result<Vec<models::Conversation>, String>;
    async fn insert_conversation(
        &self,
        conversation: models::Conversation,
    ) -> Result<models::Conversation, String>;
    async fn update_conversation(
        &self,
        conversation: models::Conversation,
    ) -> Result<models::Conversation, String>;
    /// Deletes the conversation together with its messages.
    async fn delete_conversation(&self, id: i32) -> Result<bool, String>;

    async fn list_messages(&self, conversation_id: i32) -> Result<Vec<models::Message>, String>;
    async fn insert_message(
        &self,
        conversation_id: i32,
        role: models::MessageRole,
        content: &str,
    ) -> Result<models::Message, String>;
    /// Stores the assistant reply and bumps the conversation's recency atomically.
    async fn insert_reply(
        &self,
        conversation_id: i32,
        content: &str,
    ) -> Result<models::Message, String>;

    async fn fetch_note(&self, id: i32) -> Result<Option<models::Note>, String>;
    async fn list_notes(&self, user_id: &str) -> Result<Vec<models::Note>, String>;
    async fn insert_note(&self, note: models::Note) -> Result<models::Note, String>;
    async fn update_note(&self, note: models::Note) -> Result<models::Note, String>;
    async fn delete_note(&self, id: i32) -> Result<bool, String>;
}

#[async_trait]
impl Store for PgPool {
    async fn fetch_conversation(&self, id: i32) -> Result<Option<models::Conversation>, String> {
        conversation::fetch(self, id).await
    }

    async fn list_conversations(&self, user_id: &str) -> Result<Vec<models::Conversation>, String> {
        conversation::fetch_by_user(self, user_id).await
    }

    async fn insert_conversation(
        &self,
        conversation: models::Conversation,
    ) -> Result<models::Conversation, String> {
        conversation::insert(self, conversation).await
    }

    async fn update_conversation(
        &self,
        conversation: models::Conversation,
    ) -> Result<models::Conversation, String> {
        conversation::update(self, conversation).await
    }

    async fn delete_conversation(&self, id: i32) -> Result<bool, String> {
        conversation::delete(self, id).await
    }

    async fn list_messages(&self, conversation_id: i32) -> Result<Vec<models::Message>, String> {
        message::fetch_by_conversation(self, conversation_id).await
    }

    async fn insert_message(
        &self,
        conversation_id: i32,
        role: models::MessageRole,
        content: &str,
    ) -> Result<models::Message, String> {
        message::insert(self, conversation_id, role, content).await
    }

    async fn insert_reply(
        &self,
        conversation_id: i32,
        content: &str,
    ) -> Result<models::Message, String> {
        message::insert_reply(self, conversation_id, content).await
    }

    async fn fetch_note(&self, id: i32) -> Result<Option<models::Note>, String> {
        note::fetch(self, id).await
    }

    async fn list_notes(&self, user_id: &str) -> Result<Vec<models::Note>, String> {
        note::fetch_by_user(self, user_id).await
    }

    async fn insert_note(&self, note: models::Note) -> Result<models::Note, String> {
        note::insert(self, note).await
    }

    async fn update_note(&self, note: models::Note) -> Result<models::Note, String> {
        note::update(self, note).await
    }

    async fn delete_note(&self, id: i32) -> Result<bool, String> {
        note::delete(self, id).await
    }
}
