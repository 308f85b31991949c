use super::Store;
use crate::models;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

/// In-memory store for unit tests. Timestamps advance by one millisecond per write so
/// ordering and recency checks are deterministic.
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
    fail_writes: AtomicBool,
}

#[derive(Default)]
struct State {
    next_id: i32,
    ticks: i64,
    conversations: Vec<models::Conversation>,
    messages: Vec<models::Message>,
    notes: Vec<models::Note>,
    writes: usize,
}

impl State {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }

    fn now(&mut self) -> chrono::DateTime<Utc> {
        self.ticks += 1;
        chrono::DateTime::<Utc>::UNIX_EPOCH + Duration::milliseconds(self.ticks)
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every later write fail like a broken database connection.
    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    /// Number of successful mutations so far.
    pub async fn writes(&self) -> usize {
        self.state.lock().await.writes
    }

    pub async fn messages(&self) -> Vec<models::Message> {
        self.state.lock().await.messages.clone()
    }

    pub async fn seed_conversation(&self, user_id: &str, title: &str) -> models::Conversation {
        self.insert_conversation(models::Conversation::new(user_id.into(), title.into()))
            .await
            .expect("seeding an in-memory conversation")
    }

    fn check_writable(&self) -> Result<(), String> {
        if self.fail_writes.load(Ordering::SeqCst) {
            Err("Failed to insert".to_string())
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn fetch_conversation(&self, id: i32) -> Result<Option<models::Conversation>, String> {
        let state = self.state.lock().await;
        Ok(state.conversations.iter().find(|c| c.id == id).cloned())
    }

    async fn list_conversations(&self, user_id: &str) -> Result<Vec<models::Conversation>, String> {
        let state = self.state.lock().await;
        let mut list: Vec<_> = state
            .conversations
            .iter()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect();
        list.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then(b.id.cmp(&a.id)));
        Ok(list)
    }

    async fn insert_conversation(
        &self,
        mut conversation: models::Conversation,
    ) -> Result<models::Conversation, String> {
        self.check_writable()?;
        let mut state = self.state.lock().await;
        conversation.id = state.next_id();
        conversation.created_at = state.now();
        conversation.updated_at = conversation.created_at;
        state.conversations.push(conversation.clone());
        state.writes += 1;
        Ok(conversation)
    }

    async fn update_conversation(
        &self,
        mut conversation: models::Conversation,
    ) -> Result<models::Conversation, String> {
        self.check_writable()?;
        let mut state = self.state.lock().await;
        conversation.updated_at = state.now();
        let stored = state
            .conversations
            .iter_mut()
            .find(|c| c.id == conversation.id)
            .ok_or_else(|| "Could not update".to_string())?;
        stored.title = conversation.title.clone();
        stored.updated_at = conversation.updated_at;
        let stored = stored.clone();
        state.writes += 1;
        Ok(stored)
    }

    async fn delete_conversation(&self, id: i32) -> Result<bool, String> {
        self.check_writable()?;
        let mut state = self.state.lock().await;
        state.messages.retain(|m| m.conversation_id != id);
        let before = state.conversations.len();
        state.conversations.retain(|c| c.id != id);
        state.writes += 1;
        Ok(state.conversations.len() < before)
    }

    async fn list_messages(&self, conversation_id: i32) -> Result<Vec<models::Message>, String> {
        let state = self.state.lock().await;
        Ok(state
            .messages
            .iter()
            .filter(|m| m.conversation_id == conversation_id)
            .cloned()
            .collect())
    }

    async fn insert_message(
        &self,
        conversation_id: i32,
        role: models::MessageRole,
        content: &str,
    ) -> Result<models::Message, String> {
        self.check_writable()?;
        let mut state = self.state.lock().await;
        let message = models::Message {
            id: state.next_id(),
            conversation_id,
            role,
            content: content.to_string(),
            created_at: state.now(),
        };
        state.messages.push(message.clone());
        state.writes += 1;
        Ok(message)
    }

    async fn insert_reply(
        &self,
        conversation_id: i32,
        content: &str,
    ) -> Result<models::Message, String> {
        self.check_writable()?;
        let mut state = self.state.lock().await;
        let now = state.now();
        let conversation = state
            .conversations
            .iter_mut()
            .find(|c| c.id == conversation_id)
            .ok_or_else(|| "Failed to insert".to_string())?;
        conversation.updated_at = now;

        let message = models::Message {
            id: state.next_id(),
            conversation_id,
            role: models::MessageRole::Assistant,
            content: content.to_string(),
            created_at: now,
        };
        state.messages.push(message.clone());
        state.writes += 1;
        Ok(message)
    }

    async fn fetch_note(&self, id: i32) -> Result<Option<models::Note>, String> {
        let state = self.state.lock().await;
        Ok(state.notes.iter().find(|n| n.id == id).cloned())
    }

    async fn list_notes(&self, user_id: &str) -> Result<Vec<models::Note>, String> {
        let state = self.state.lock().await;
        let mut list: Vec<_> = state
            .notes
            .iter()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect();
        list.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then(b.id.cmp(&a.id)));
        Ok(list)
    }

    async fn insert_note(&self, mut note: models::Note) -> Result<models::Note, String> {
        self.check_writable()?;
        let mut state = self.state.lock().await;
        note.id = state.next_id();
        note.created_at = state.now();
        note.updated_at = note.created_at;
        state.notes.push(note.clone());
        state.writes += 1;
        Ok(note)
    }

    async fn update_note(&self, mut note: models::Note) -> Result<models::Note, String> {
        self.check_writable()?;
        let mut state = self.state.lock().await;
        note.updated_at = state.now();
        let stored = state
            .notes
            .iter_mut()
            .find(|n| n.id == note.id)
            .ok_or_else(|| "Could not update".to_string())?;
        *stored = note.clone();
        state.writes += 1;
        Ok(note)
    }

    async fn delete_note(&self, id: i32) -> Result<bool, String> {
        self.check_writable()?;
        let mut state = self.state.lock().await;
        let before = state.notes.len();
        state.notes.retain(|n| n.id != id);
        state.writes += 1;
        Ok(state.notes.len() < before)
    }
}
