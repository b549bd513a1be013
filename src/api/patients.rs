use axum::extract::State;
use axum::response::{Html, Redirect};
use axum::Form;
use serde::Deserialize;
use tracing::info;

use crate::api::{page, AppState};
use crate::domain::Patient;
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct PatientForm {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub vaccinate: String,
}

pub async fn patient_form() -> Html<String> {
    let body = "<form method=\"post\" action=\"/patient\">\n\
         <label>Name <input type=\"text\" name=\"name\"></label><br>\n\
         <label>Age <input type=\"text\" name=\"age\"></label><br>\n\
         <label>Gender <select name=\"gender\">\n\
         <option value=\"male\">Male</option>\n\
         <option value=\"female\">Female</option>\n\
         <option value=\"other\">Other</option>\n\
         </select></label><br>\n\
         <label>Vaccination status <input type=\"text\" name=\"vaccinate\"></label><br>\n\
         <button type=\"submit\">Register</button>\n\
         </form>";
    Html(page("Register patient", body))
}

pub async fn create_patient(
    State(state): State<AppState>,
    Form(form): Form<PatientForm>,
) -> Result<Redirect, AppError> {
    let patient = Patient::parse(&form.name, &form.age, &form.gender, &form.vaccinate)?;
    let id = state.repo.insert_patient(&patient).await?;
    info!(id, name = %patient.name, "Registered patient");
    Ok(Redirect::to("/"))
}
