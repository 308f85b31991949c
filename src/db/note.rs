use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn fetch(pool: &PgPool, id: i32) -> Result<Option<models::Note>, String> {
    tracing::info!("Fetch note {}", id);
    sqlx::query_as::<_, models::Note>(r#"SELECT * FROM notes WHERE id = $1 LIMIT 1"#)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch note, error: {:?}", err);
            "Could not fetch data".to_string()
        })
}

pub async fn fetch_by_user(pool: &PgPool, user_id: &str) -> Result<Vec<models::Note>, String> {
    let query_span = tracing::info_span!("Fetch notes by user id.");
    sqlx::query_as::<_, models::Note>(
        r#"
        SELECT *
        FROM notes
        WHERE user_id = $1
        ORDER BY updated_at DESC, id DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch notes, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}

pub async fn insert(pool: &PgPool, note: models::Note) -> Result<models::Note, String> {
    let query_span = tracing::info_span!("Saving user's note into the database");
    sqlx::query_as::<_, models::Note>(
        r#"
        INSERT INTO notes (user_id, title, content, subject, tags, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, NOW(), NOW())
        RETURNING *
        "#,
    )
    .bind(&note.user_id)
    .bind(&note.title)
    .bind(&note.content)
    .bind(&note.subject)
    .bind(&note.tags)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Failed to insert".to_string()
    })
}

pub async fn update(pool: &PgPool, note: models::Note) -> Result<models::Note, String> {
    let query_span = tracing::info_span!("Updating user note");
    sqlx::query_as::<_, models::Note>(
        r#"
        UPDATE notes
        SET
            title = $2,
            content = $3,
            subject = $4,
            tags = $5,
            updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(note.id)
    .bind(&note.title)
    .bind(&note.content)
    .bind(&note.subject)
    .bind(&note.tags)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map(|note| {
        tracing::info!("Note {} has been saved", note.id);
        note
    })
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Could not update".to_string()
    })
}

#[tracing::instrument(name = "Delete note of a user.", skip(pool))]
pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, String> {
    sqlx::query("DELETE FROM notes WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!("Failed to delete note: {:?}", err);
            "Failed to delete note".to_string()
        })
}
