use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn fetch(pool: &PgPool, id: i32) -> Result<Option<models::Conversation>, String> {
    tracing::info!("Fetch conversation {}", id);
    sqlx::query_as::<_, models::Conversation>(
        r#"SELECT id, user_id, title, created_at, updated_at FROM conversations WHERE id = $1 LIMIT 1"#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch conversation, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}

pub async fn fetch_by_user(
    pool: &PgPool,
    user_id: &str,
) -> Result<Vec<models::Conversation>, String> {
    let query_span = tracing::info_span!("Fetch conversations by user id.");
    sqlx::query_as::<_, models::Conversation>(
        r#"
        SELECT id, user_id, title, created_at, updated_at
        FROM conversations
        WHERE user_id = $1
        ORDER BY updated_at DESC, id DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch conversations, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}

pub async fn insert(
    pool: &PgPool,
    conversation: models::Conversation,
) -> Result<models::Conversation, String> {
    let query_span = tracing::info_span!("Saving new conversation into the database");
    sqlx::query_as::<_, models::Conversation>(
        r#"
        INSERT INTO conversations (user_id, title, created_at, updated_at)
        VALUES ($1, $2, NOW(), NOW())
        RETURNING id, user_id, title, created_at, updated_at
        "#,
    )
    .bind(&conversation.user_id)
    .bind(&conversation.title)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Failed to insert".to_string()
    })
}

pub async fn update(
    pool: &PgPool,
    conversation: models::Conversation,
) -> Result<models::Conversation, String> {
    let query_span = tracing::info_span!("Updating conversation");
    sqlx::query_as::<_, models::Conversation>(
        r#"
        UPDATE conversations
        SET
            title = $2,
            updated_at = NOW()
        WHERE id = $1
        RETURNING id, user_id, title, created_at, updated_at
        "#,
    )
    .bind(conversation.id)
    .bind(&conversation.title)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Could not update".to_string()
    })
}

/// Removes the messages and the conversation in one transaction.
#[tracing::instrument(name = "Delete conversation with messages.", skip(pool))]
pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, String> {
    let map_err = |err: sqlx::Error| {
        tracing::error!("Failed to delete conversation: {:?}", err);
        "Failed to delete conversation".to_string()
    };

    let mut tx = pool.begin().await.map_err(map_err)?;
    sqlx::query("DELETE FROM messages WHERE conversation_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(map_err)?;
    let result = sqlx::query("DELETE FROM conversations WHERE id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(map_err)?;
    tx.commit().await.map_err(map_err)?;

    Ok(result.rows_affected() > 0)
}
