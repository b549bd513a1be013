//! Appointment scheduling requests.

use chrono::{NaiveDate, NaiveTime};

use super::validation::ValidationError;

/// A validated appointment request.
///
/// The patient and doctor ids are checked for shape only; whether a row
/// with that id exists is deliberately not verified before insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentRequest {
    pub patient_id: i64,
    pub doctor_id: i64,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl AppointmentRequest {
    /// Build an appointment request from raw form fields.
    ///
    /// # Errors
    /// Returns a [`ValidationError`] for a non-positive or non-numeric id,
    /// a date not formatted `YYYY-MM-DD`, or a time not formatted `HH:MM`.
    pub fn parse(
        patient_id: &str,
        doctor_id: &str,
        date: &str,
        time: &str,
    ) -> Result<Self, ValidationError> {
        let patient_id = parse_id("patient_id", patient_id)?;
        let doctor_id = parse_id("doctor_id", doctor_id)?;
        let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
            .map_err(|_| ValidationError::Date(date.to_string()))?;
        let time = NaiveTime::parse_from_str(time.trim(), "%H:%M")
            .map_err(|_| ValidationError::Time(time.to_string()))?;

        Ok(AppointmentRequest {
            patient_id,
            doctor_id,
            date,
            time,
        })
    }

    /// Date as stored: `YYYY-MM-DD`.
    pub fn date_string(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Time as stored: `HH:MM`.
    pub fn time_string(&self) -> String {
        self.time.format("%H:%M").to_string()
    }
}

fn parse_id(field: &'static str, value: &str) -> Result<i64, ValidationError> {
    value
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| ValidationError::Id(field, value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_request() {
        let req = AppointmentRequest::parse("3", "7", "2026-09-01", "14:30").unwrap();
        assert_eq!(req.patient_id, 3);
        assert_eq!(req.doctor_id, 7);
        assert_eq!(req.date_string(), "2026-09-01");
        assert_eq!(req.time_string(), "14:30");
    }

    #[test]
    fn test_non_numeric_id_rejected() {
        let result = AppointmentRequest::parse("abc", "7", "2026-09-01", "14:30");
        assert_eq!(
            result,
            Err(ValidationError::Id("patient_id", "abc".to_string()))
        );
    }

    #[test]
    fn test_zero_id_rejected() {
        let result = AppointmentRequest::parse("3", "0", "2026-09-01", "14:30");
        assert_eq!(
            result,
            Err(ValidationError::Id("doctor_id", "0".to_string()))
        );
    }

    #[test]
    fn test_bad_date_rejected() {
        let result = AppointmentRequest::parse("3", "7", "01/09/2026", "14:30");
        assert_eq!(result, Err(ValidationError::Date("01/09/2026".to_string())));
    }

    #[test]
    fn test_bad_time_rejected() {
        let result = AppointmentRequest::parse("3", "7", "2026-09-01", "2pm");
        assert_eq!(result, Err(ValidationError::Time("2pm".to_string())));
    }
}
