//! The allow-list of viewable tables and the generic tabular result shape.

use serde::{Deserialize, Serialize};

/// One of the three known tables.
///
/// View and export routes only accept names parsed through this enum;
/// raw path input never reaches query text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableName {
    Patients,
    Doctors,
    Appointments,
}

impl TableName {
    /// Parse a table name from path input; `None` for anything outside
    /// the allow-list.
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "patients" => Some(TableName::Patients),
            "doctors" => Some(TableName::Doctors),
            "appointments" => Some(TableName::Appointments),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TableName::Patients => "patients",
            TableName::Doctors => "doctors",
            TableName::Appointments => "appointments",
        }
    }

    /// Column names in storage order, as rendered and exported.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            TableName::Patients => &["id", "name", "age", "gender", "vaccinate"],
            TableName::Doctors => &["id", "name", "speciality", "active"],
            TableName::Appointments => &["id", "patient_id", "doctor_id", "date", "time"],
        }
    }
}

impl std::fmt::Display for TableName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// All rows of one table, stringified for rendering and CSV export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableData {
    pub name: TableName,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tables_parse() {
        assert_eq!(TableName::parse("patients"), Some(TableName::Patients));
        assert_eq!(TableName::parse("doctors"), Some(TableName::Doctors));
        assert_eq!(
            TableName::parse("appointments"),
            Some(TableName::Appointments)
        );
    }

    #[test]
    fn test_unknown_table_rejected() {
        assert_eq!(TableName::parse("unknown_table"), None);
        assert_eq!(TableName::parse("sqlite_master"), None);
        assert_eq!(TableName::parse("Patients"), None);
        assert_eq!(TableName::parse(""), None);
    }

    #[test]
    fn test_columns_match_schema_order() {
        assert_eq!(
            TableName::Appointments.columns(),
            &["id", "patient_id", "doctor_id", "date", "time"]
        );
    }
}
