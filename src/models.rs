//! Row types and request payloads for the two record kinds.

use serde::{Deserialize, Serialize};

/// A persisted patient row.
#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct Patient {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

/// Inbound body for POST /patients and PUT /patients/{id}. Age is coerced to
/// an integer and nothing more; negative and zero values are accepted.
#[derive(Clone, Debug, Deserialize)]
pub struct PatientPayload {
    pub name: String,
    pub age: i64,
}

/// A persisted appointment row. patient_id references patients.id on paper;
/// nothing checks that it points at a live row.
#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct Appointment {
    pub id: i64,
    pub date: String,
    pub patient_id: i64,
}

/// Inbound body for POST /appointments. The date is free text.
#[derive(Clone, Debug, Deserialize)]
pub struct AppointmentPayload {
    pub date: String,
    pub patient_id: i64,
}
