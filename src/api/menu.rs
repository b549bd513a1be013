use axum::response::Html;

use crate::api::page;

pub async fn menu() -> Html<String> {
    let body = "<ul>\n\
         <li><a href=\"/patient\">Register patient</a></li>\n\
         <li><a href=\"/doctor\">Register doctor</a></li>\n\
         <li><a href=\"/appointment\">Schedule appointment</a></li>\n\
         <li><a href=\"/view_table/patients\">View patients</a></li>\n\
         <li><a href=\"/view_table/doctors\">View doctors</a></li>\n\
         <li><a href=\"/view_table/appointments\">View appointments</a></li>\n\
         <li><a href=\"/export_table/patients\">Export patients</a></li>\n\
         <li><a href=\"/export_table/doctors\">Export doctors</a></li>\n\
         <li><a href=\"/export_table/appointments\">Export appointments</a></li>\n\
         </ul>";
    Html(page("Hospital registry", body))
}
