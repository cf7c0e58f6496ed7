//! Clinic API: patient and appointment records over HTTP, backed by SQLite.

pub mod error;
pub mod settings;
pub mod state;
pub mod store;
pub mod models;
pub mod service;
pub mod handlers;
pub mod routes;

pub use error::AppError;
pub use settings::Settings;
pub use state::AppState;
pub use store::{connect, ensure_tables};
pub use routes::{common_routes, record_routes};
