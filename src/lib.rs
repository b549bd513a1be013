pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod export;

pub use config::Config;
pub use db::{init_db, Repository};
pub use domain::{AppointmentRequest, Doctor, Gender, Patient, TableData, TableName};
pub use error::AppError;
