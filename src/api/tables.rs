use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{Html, IntoResponse, Response};
use std::path::Path as FsPath;

use crate::api::{html_escape, page, AppState};
use crate::domain::{TableData, TableName};
use crate::error::AppError;
use crate::export::write_table_csv;

fn parse_table_name(input: &str) -> Result<TableName, AppError> {
    TableName::parse(input).ok_or_else(|| AppError::UnknownTable(input.to_string()))
}

pub async fn view_table(
    Path(table_name): Path<String>,
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    let table = parse_table_name(&table_name)?;
    let data = state.repo.fetch_table(table).await?;
    Ok(Html(page(&format!("Table: {}", table), &render_table(&data))))
}

pub async fn export_table(
    Path(table_name): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let table = parse_table_name(&table_name)?;
    let data = state.repo.fetch_table(table).await?;

    let path = write_table_csv(FsPath::new(&state.config.export_dir), &data)?;
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| AppError::Internal(format!("failed to read export {}: {}", path.display(), e)))?;

    let headers = [
        (header::CONTENT_TYPE, "text/csv".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}.csv\"", table),
        ),
    ];
    Ok((headers, bytes).into_response())
}

fn render_table(data: &TableData) -> String {
    let mut html = String::from("<table border=\"1\">\n<tr>");
    for column in &data.columns {
        html.push_str(&format!("<th>{}</th>", html_escape(column)));
    }
    html.push_str("</tr>\n");
    for row in &data.rows {
        html.push_str("<tr>");
        for cell in row {
            html.push_str(&format!("<td>{}</td>", html_escape(cell)));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</table>");
    html
}
