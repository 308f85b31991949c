use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn fetch_by_conversation(
    pool: &PgPool,
    conversation_id: i32,
) -> Result<Vec<models::Message>, String> {
    let query_span = tracing::info_span!("Fetch conversation history.");
    sqlx::query_as::<_, models::Message>(
        r#"
        SELECT id, conversation_id, role, content, created_at
        FROM messages
        WHERE conversation_id = $1
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .bind(conversation_id)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch messages, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}

pub async fn insert(
    pool: &PgPool,
    conversation_id: i32,
    role: models::MessageRole,
    content: &str,
) -> Result<models::Message, String> {
    let query_span = tracing::info_span!("Saving message", %role, conversation_id);
    sqlx::query_as::<_, models::Message>(
        r#"
        INSERT INTO messages (conversation_id, role, content, created_at)
        VALUES ($1, $2, $3, clock_timestamp())
        RETURNING id, conversation_id, role, content, created_at
        "#,
    )
    .bind(conversation_id)
    .bind(role.as_str())
    .bind(content)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Failed to insert".to_string()
    })
}

/// Stores a completed assistant reply and bumps the conversation's `updated_at` in one
/// statement, so a stored reply always counts as recent activity.
pub async fn insert_reply(
    pool: &PgPool,
    conversation_id: i32,
    content: &str,
) -> Result<models::Message, String> {
    let query_span = tracing::info_span!("Saving assistant reply", conversation_id);
    sqlx::query_as::<_, models::Message>(
        r#"
        WITH touched AS (
            UPDATE conversations
            SET updated_at = NOW()
            WHERE id = $1
            RETURNING id
        )
        INSERT INTO messages (conversation_id, role, content, created_at)
        SELECT touched.id, $2, $3, clock_timestamp()
        FROM touched
        RETURNING id, conversation_id, role, content, created_at
        "#,
    )
    .bind(conversation_id)
    .bind(models::MessageRole::Assistant.as_str())
    .bind(content)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to store reply: {:?}", err);
        "Failed to insert".to_string()
    })
}
