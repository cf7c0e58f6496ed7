//! Appointment handlers: create and list.

use crate::error::AppError;
use crate::models::{Appointment, AppointmentPayload};
use crate::service::appointments;
use crate::state::AppState;
use axum::{extract::State, Json};

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<AppointmentPayload>,
) -> Result<Json<Appointment>, AppError> {
    let row = appointments::create(&state.pool, &payload).await?;
    Ok(Json(row))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Appointment>>, AppError> {
    let rows = appointments::list(&state.pool).await?;
    Ok(Json(rows))
}
