//! Patient queries.

use crate::error::AppError;
use crate::models::{Patient, PatientPayload};
use sqlx::SqlitePool;

/// All patient rows in natural store order.
pub async fn list(pool: &SqlitePool) -> Result<Vec<Patient>, AppError> {
    tracing::debug!("select patients");
    let rows = sqlx::query_as("SELECT id, name, age FROM patients")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Insert one row; the store assigns the id. Returns the persisted row.
pub async fn create(pool: &SqlitePool, payload: &PatientPayload) -> Result<Patient, AppError> {
    tracing::debug!(name = %payload.name, "insert patient");
    let row = sqlx::query_as("INSERT INTO patients (name, age) VALUES (?, ?) RETURNING id, name, age")
        .bind(&payload.name)
        .bind(payload.age)
        .fetch_one(pool)
        .await?;
    Ok(row)
}

/// Overwrite both fields of one row. None when the id does not exist.
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    payload: &PatientPayload,
) -> Result<Option<Patient>, AppError> {
    tracing::debug!(id, "update patient");
    let row = sqlx::query_as("UPDATE patients SET name = ?, age = ? WHERE id = ? RETURNING id, name, age")
        .bind(&payload.name)
        .bind(payload.age)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Remove one row. None when the id does not exist. Appointments that
/// reference the id are left in place.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<Option<Patient>, AppError> {
    tracing::debug!(id, "delete patient");
    let row = sqlx::query_as("DELETE FROM patients WHERE id = ? RETURNING id, name, age")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}
