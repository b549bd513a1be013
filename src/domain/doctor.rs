//! Doctor records and their validated construction.

use super::validation::{required_text, ValidationError};

/// A validated doctor registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Doctor {
    pub name: String,
    pub speciality: String,
    pub active: bool,
}

impl Doctor {
    /// Build a doctor from raw form fields.
    ///
    /// The active flag comes from checkbox presence: `Some(_)` maps to
    /// active regardless of the submitted value, `None` to inactive.
    ///
    /// # Errors
    /// Returns a [`ValidationError`] if the name or speciality is empty.
    pub fn parse(
        name: &str,
        speciality: &str,
        active: Option<&str>,
    ) -> Result<Self, ValidationError> {
        Ok(Doctor {
            name: required_text("name", name)?,
            speciality: required_text("speciality", speciality)?,
            active: active.is_some(),
        })
    }

    /// The stored representation of the active flag.
    pub fn active_label(&self) -> &'static str {
        if self.active {
            "Yes"
        } else {
            "No"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkbox_present_means_active() {
        let doctor = Doctor::parse("Gregory House", "Diagnostics", Some("on")).unwrap();
        assert!(doctor.active);
        assert_eq!(doctor.active_label(), "Yes");
    }

    #[test]
    fn test_checkbox_absent_means_inactive() {
        let doctor = Doctor::parse("Gregory House", "Diagnostics", None).unwrap();
        assert!(!doctor.active);
        assert_eq!(doctor.active_label(), "No");
    }

    #[test]
    fn test_empty_speciality_rejected() {
        let result = Doctor::parse("Gregory House", "", None);
        assert_eq!(result, Err(ValidationError::Empty("speciality")));
    }
}
