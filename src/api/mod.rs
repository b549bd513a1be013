pub mod appointments;
pub mod doctors;
pub mod health;
pub mod menu;
pub mod patients;
pub mod tables;

use crate::config::Config;
use crate::db::Repository;
use axum::{
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub config: Config,
}

impl AppState {
    pub fn new(repo: Arc<Repository>, config: Config) -> Self {
        Self { repo, config }
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(menu::menu))
        .route("/health", get(health::health))
        .route(
            "/patient",
            get(patients::patient_form).post(patients::create_patient),
        )
        .route(
            "/doctor",
            get(doctors::doctor_form).post(doctors::create_doctor),
        )
        .route(
            "/appointment",
            get(appointments::appointment_form).post(appointments::create_appointment),
        )
        .route("/view_table/:table_name", get(tables::view_table))
        .route("/export_table/:table_name", get(tables::export_table))
        .layer(cors)
        .with_state(state)
}

/// Escape text for interpolation into HTML bodies and attributes.
pub(crate) fn html_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap a page body in the shared document shell.
pub(crate) fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>{}</title></head>\n<body>\n<h1>{}</h1>\n{}\n<p><a href=\"/\">Main menu</a></p>\n</body>\n</html>",
        html_escape(title),
        html_escape(title),
        body
    )
}
