use axum::extract::State;
use axum::response::{Html, Redirect};
use axum::Form;
use serde::Deserialize;
use tracing::info;

use crate::api::{page, AppState};
use crate::domain::Doctor;
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct DoctorForm {
    pub name: String,
    pub speciality: String,
    /// Checkbox field: present when checked, absent otherwise.
    pub active: Option<String>,
}

pub async fn doctor_form() -> Html<String> {
    let body = "<form method=\"post\" action=\"/doctor\">\n\
         <label>Name <input type=\"text\" name=\"name\"></label><br>\n\
         <label>Speciality <input type=\"text\" name=\"speciality\"></label><br>\n\
         <label>Active <input type=\"checkbox\" name=\"active\"></label><br>\n\
         <button type=\"submit\">Register</button>\n\
         </form>";
    Html(page("Register doctor", body))
}

pub async fn create_doctor(
    State(state): State<AppState>,
    Form(form): Form<DoctorForm>,
) -> Result<Redirect, AppError> {
    let doctor = Doctor::parse(&form.name, &form.speciality, form.active.as_deref())?;
    let id = state.repo.insert_doctor(&doctor).await?;
    info!(id, name = %doctor.name, active = doctor.active, "Registered doctor");
    Ok(Redirect::to("/"))
}
