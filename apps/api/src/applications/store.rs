use sqlx::PgPool;
use uuid::Uuid;

use crate::models::application::ApplicationRow;

pub async fn insert(db: &PgPool, row: &ApplicationRow) -> Result<ApplicationRow, sqlx::Error> {
    sqlx::query_as(
        r#"
        INSERT INTO applications
            (id, user_id, job, status, timeline, next_action, notes, applied_at, last_updated)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING *
        "#,
    )
    .bind(row.id)
    .bind(&row.user_id)
    .bind(&row.job)
    .bind(&row.status)
    .bind(&row.timeline)
    .bind(&row.next_action)
    .bind(&row.notes)
    .bind(row.applied_at)
    .bind(row.last_updated)
    .fetch_one(db)
    .await
}

/// Most recently touched first.
pub async fn list_for_user(db: &PgPool, user_id: &str) -> Result<Vec<ApplicationRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM applications WHERE user_id = $1 ORDER BY last_updated DESC")
        .bind(user_id)
        .fetch_all(db)
        .await
}

pub async fn find(db: &PgPool, id: Uuid) -> Result<Option<ApplicationRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM applications WHERE id = $1")
        .bind(id)
        .fetch_optional(db)
        .await
}

/// Writes back the mutable columns of an existing application.
pub async fn save(db: &PgPool, row: &ApplicationRow) -> Result<ApplicationRow, sqlx::Error> {
    sqlx::query_as(
        r#"
        UPDATE applications
        SET status = $2, timeline = $3, notes = $4, last_updated = $5
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(row.id)
    .bind(&row.status)
    .bind(&row.timeline)
    .bind(&row.notes)
    .bind(row.last_updated)
    .fetch_one(db)
    .await
}

/// Returns whether a row was removed.
pub async fn delete(db: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM applications WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;
    Ok(result.rows_affected() > 0)
}
