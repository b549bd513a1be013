//! Domain types for the hospital registry.
//!
//! This module provides:
//! - Validated record types: Patient, Doctor, AppointmentRequest
//! - The TableName allow-list for view/export routes
//! - TableData, the generic tabular result shape

pub mod appointment;
pub mod doctor;
pub mod patient;
pub mod table;
pub mod validation;

pub use appointment::AppointmentRequest;
pub use doctor::Doctor;
pub use patient::{Gender, Patient};
pub use table::{TableData, TableName};
pub use validation::ValidationError;
