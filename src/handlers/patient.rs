//! Patient handlers: create, list, update, delete.

use crate::error::AppError;
use crate::models::{Patient, PatientPayload};
use crate::service::patients;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

#[derive(Serialize)]
pub struct DeletedBody {
    message: &'static str,
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<PatientPayload>,
) -> Result<Json<Patient>, AppError> {
    let row = patients::create(&state.pool, &payload).await?;
    Ok(Json(row))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Patient>>, AppError> {
    let rows = patients::list(&state.pool).await?;
    Ok(Json(rows))
}

/// Full overwrite of name and age; there is no partial update.
pub async fn update(
    State(state): State<AppState>,
    Path(patient_id): Path<i64>,
    Json(payload): Json<PatientPayload>,
) -> Result<Json<Patient>, AppError> {
    let row = patients::update(&state.pool, patient_id, &payload)
        .await?
        .ok_or(AppError::NotFound("Patient"))?;
    Ok(Json(row))
}

/// Removes the row only; appointments referencing it are not cascaded.
pub async fn delete(
    State(state): State<AppState>,
    Path(patient_id): Path<i64>,
) -> Result<Json<DeletedBody>, AppError> {
    patients::delete(&state.pool, patient_id)
        .await?
        .ok_or(AppError::NotFound("Patient"))?;
    Ok(Json(DeletedBody {
        message: "Patient deleted",
    }))
}
