//! CSV export of table contents.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::domain::TableData;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to create export directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),
    #[error("csv write error: {0}")]
    Csv(#[from] csv::Error),
}

/// Write a table to `<dir>/<table>.csv`, replacing any previous export.
///
/// The first record is the header row; data rows follow in the order
/// given. Returns the path of the written file.
///
/// # Errors
/// Returns an error if the directory cannot be created or the file
/// cannot be written.
pub fn write_table_csv(dir: &Path, data: &TableData) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(dir).map_err(|e| ExportError::CreateDir(dir.to_path_buf(), e))?;

    let path = dir.join(format!("{}.csv", data.name));

    // Writer::from_path truncates, so repeated exports overwrite.
    let mut writer = csv::Writer::from_path(&path)?;
    writer.write_record(&data.columns)?;
    for row in &data.rows {
        writer.write_record(row)?;
    }
    writer.flush().map_err(csv::Error::from)?;

    info!(table = %data.name, path = %path.display(), "Exported table to CSV");
    Ok(path)
}
