//! "Verify ownership, then act" for user-owned resources.
//!
//! A resource owned by someone else is reported exactly like a missing one, so callers
//! cannot probe for ids that belong to other users.

use crate::db::Store;
use crate::models;
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use async_trait::async_trait;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum OwnershipError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("store failure: {0}")]
    Store(String),
}

impl ResponseError for OwnershipError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            Self::NotFound(_) => self.to_string(),
            Self::Store(_) => "Internal error".to_string(),
        };
        HttpResponse::build(self.status_code()).json(json!({ "message": message }))
    }
}

#[async_trait]
pub trait Owned: Sized + Send {
    /// Resource name used in not-found messages.
    const KIND: &'static str;

    fn owner_id(&self) -> &str;

    async fn fetch(store: &dyn Store, id: i32) -> Result<Option<Self>, String>;
}

#[async_trait]
impl Owned for models::Conversation {
    const KIND: &'static str = "Conversation";

    fn owner_id(&self) -> &str {
        &self.user_id
    }

    async fn fetch(store: &dyn Store, id: i32) -> Result<Option<Self>, String> {
        store.fetch_conversation(id).await
    }
}

#[async_trait]
impl Owned for models::Note {
    const KIND: &'static str = "Note";

    fn owner_id(&self) -> &str {
        &self.user_id
    }

    async fn fetch(store: &dyn Store, id: i32) -> Result<Option<Self>, String> {
        store.fetch_note(id).await
    }
}

/// Load `id` and return it only if `user` owns it.
pub async fn fetch_owned<T: Owned>(
    store: &dyn Store,
    id: i32,
    user: &models::User,
) -> Result<T, OwnershipError> {
    match T::fetch(store, id).await {
        Ok(Some(resource)) if resource.owner_id() == user.id => Ok(resource),
        Ok(Some(_)) => {
            tracing::info!("user {} denied access to {} {}", user.id, T::KIND, id);
            Err(OwnershipError::NotFound(T::KIND))
        }
        Ok(None) => Err(OwnershipError::NotFound(T::KIND)),
        Err(err) => Err(OwnershipError::Store(err)),
    }
}
