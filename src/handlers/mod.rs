//! HTTP handlers, one module per record kind.

pub mod appointment;
pub mod patient;
