//! Appointment queries. Read and create only; the API exposes no update or
//! delete for appointments.

use crate::error::AppError;
use crate::models::{Appointment, AppointmentPayload};
use sqlx::SqlitePool;

/// All appointment rows in natural store order.
pub async fn list(pool: &SqlitePool) -> Result<Vec<Appointment>, AppError> {
    tracing::debug!("select appointments");
    let rows = sqlx::query_as("SELECT id, date, patient_id FROM appointments")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Insert one row unconditionally; patient_id is not checked against the
/// patients table. Returns the persisted row.
pub async fn create(
    pool: &SqlitePool,
    payload: &AppointmentPayload,
) -> Result<Appointment, AppError> {
    tracing::debug!(patient_id = payload.patient_id, "insert appointment");
    let row = sqlx::query_as(
        "INSERT INTO appointments (date, patient_id) VALUES (?, ?) RETURNING id, date, patient_id",
    )
    .bind(&payload.date)
    .bind(payload.patient_id)
    .fetch_one(pool)
    .await?;
    Ok(row)
}
