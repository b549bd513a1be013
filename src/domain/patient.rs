//! Patient records and their validated construction.

use serde::{Deserialize, Serialize};

use super::validation::{required_text, ValidationError};

const MAX_AGE: u16 = 130;

/// Patient gender, canonicalized to a closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Parse a gender from free-form input, case-insensitively.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        match input.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(ValidationError::Gender(input.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A validated patient registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    pub name: String,
    pub age: u16,
    pub gender: Gender,
    /// Free-form vaccination status text, stored verbatim.
    pub vaccination: String,
}

impl Patient {
    /// Build a patient from raw form fields.
    ///
    /// # Errors
    /// Returns a [`ValidationError`] naming the first field that fails:
    /// empty name, non-numeric or out-of-range age, or unrecognized gender.
    pub fn parse(
        name: &str,
        age: &str,
        gender: &str,
        vaccination: &str,
    ) -> Result<Self, ValidationError> {
        let name = required_text("name", name)?;
        let age = age
            .trim()
            .parse::<u16>()
            .ok()
            .filter(|a| *a <= MAX_AGE)
            .ok_or_else(|| ValidationError::Age(age.to_string()))?;
        let gender = Gender::parse(gender)?;
        let vaccination = vaccination.trim().to_string();

        Ok(Patient {
            name,
            age,
            gender,
            vaccination,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_patient() {
        let patient = Patient::parse("Ada Lovelace", "36", "Female", "2 doses").unwrap();
        assert_eq!(patient.name, "Ada Lovelace");
        assert_eq!(patient.age, 36);
        assert_eq!(patient.gender, Gender::Female);
        assert_eq!(patient.vaccination, "2 doses");
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = Patient::parse("   ", "36", "female", "none");
        assert_eq!(result, Err(ValidationError::Empty("name")));
    }

    #[test]
    fn test_non_numeric_age_rejected() {
        let result = Patient::parse("Ada", "thirty-six", "female", "none");
        assert_eq!(result, Err(ValidationError::Age("thirty-six".to_string())));
    }

    #[test]
    fn test_out_of_range_age_rejected() {
        let result = Patient::parse("Ada", "131", "female", "none");
        assert_eq!(result, Err(ValidationError::Age("131".to_string())));
    }

    #[test]
    fn test_gender_case_insensitive() {
        assert_eq!(Gender::parse("MALE").unwrap(), Gender::Male);
        assert_eq!(Gender::parse("f").unwrap(), Gender::Female);
        assert_eq!(
            Gender::parse("unknown"),
            Err(ValidationError::Gender("unknown".to_string()))
        );
    }

    #[test]
    fn test_vaccination_may_be_empty() {
        let patient = Patient::parse("Ada", "36", "female", "").unwrap();
        assert_eq!(patient.vaccination, "");
    }
}
