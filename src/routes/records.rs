//! Record routes: one route per (verb, entity) pair.

use crate::handlers::{appointment, patient};
use crate::state::AppState;
use axum::{
    routing::{get, put},
    Router,
};

pub fn record_routes(state: AppState) -> Router {
    Router::new()
        .route("/patients", get(patient::list).post(patient::create))
        .route("/patients/:patient_id", put(patient::update).delete(patient::delete))
        .route("/appointments", get(appointment::list).post(appointment::create))
        .with_state(state)
}
