use axum::extract::State;
use axum::response::{Html, Redirect};
use axum::Form;
use serde::Deserialize;
use tracing::info;

use crate::api::{page, AppState};
use crate::domain::AppointmentRequest;
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct AppointmentForm {
    pub patient_id: String,
    pub doctor_id: String,
    pub date: String,
    pub time: String,
}

pub async fn appointment_form() -> Html<String> {
    let body = "<form method=\"post\" action=\"/appointment\">\n\
         <label>Patient id <input type=\"text\" name=\"patient_id\"></label><br>\n\
         <label>Doctor id <input type=\"text\" name=\"doctor_id\"></label><br>\n\
         <label>Date <input type=\"date\" name=\"date\"></label><br>\n\
         <label>Time <input type=\"time\" name=\"time\"></label><br>\n\
         <button type=\"submit\">Schedule</button>\n\
         </form>";
    Html(page("Schedule appointment", body))
}

pub async fn create_appointment(
    State(state): State<AppState>,
    Form(form): Form<AppointmentForm>,
) -> Result<Redirect, AppError> {
    let request =
        AppointmentRequest::parse(&form.patient_id, &form.doctor_id, &form.date, &form.time)?;
    let id = state.repo.insert_appointment(&request).await?;
    info!(
        id,
        patient_id = request.patient_id,
        doctor_id = request.doctor_id,
        "Scheduled appointment"
    );
    Ok(Redirect::to("/"))
}
