//! Input validation for the wire Person
//!
//! The rules mirror the API contract: name and email are required, email must
//! look like `local@domain` with a dotted domain, and age must be non-zero.
//! Age uses its numeric zero value as "absent", so an explicit age of 0 is
//! rejected as missing.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::Person;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)+$")
        .expect("email regex is valid")
});

/// A single failed validation rule.
///
/// Rules are checked in order (name, email, age) and the first failure is
/// reported; callers only need to distinguish valid from invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {field}: {reason}")]
pub struct ValidationError {
    /// The offending field.
    pub field: &'static str,
    /// Why the field was rejected.
    pub reason: &'static str,
}

impl ValidationError {
    fn new(field: &'static str, reason: &'static str) -> Self {
        Self { field, reason }
    }
}

impl Person {
    /// Checks the presence/format constraints on wire input.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::new("name", "must not be empty"));
        }

        if self.email.is_empty() {
            return Err(ValidationError::new("email", "must not be empty"));
        }

        if !EMAIL.is_match(&self.email) {
            return Err(ValidationError::new("email", "is not a valid address"));
        }

        if self.age == 0 {
            return Err(ValidationError::new("age", "must be present and non-zero"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(name: &str, email: &str, age: i8) -> Person {
        Person {
            id: None,
            name: name.to_string(),
            email: email.to_string(),
            age,
        }
    }

    #[test]
    fn test_valid_person_passes() {
        assert!(person("Lucas", "lucas@gmail.com", 22).validate().is_ok());
    }

    #[test]
    fn test_empty_name_fails() {
        let err = person("", "lucas@gmail.com", 22).validate().unwrap_err();
        assert_eq!(err.field, "name");
    }

    #[test]
    fn test_empty_email_fails() {
        let err = person("Lucas", "", 22).validate().unwrap_err();
        assert_eq!(err.field, "email");
    }

    #[test]
    fn test_double_at_email_fails() {
        let err = person("Lucas", "bad@@address", 22).validate().unwrap_err();
        assert_eq!(err.field, "email");
    }

    #[test]
    fn test_email_without_domain_dot_fails() {
        let err = person("Lucas", "lucas@gmail", 22).validate().unwrap_err();
        assert_eq!(err.field, "email");
    }

    #[test]
    fn test_email_without_local_part_fails() {
        let err = person("Lucas", "@gmail.com", 22).validate().unwrap_err();
        assert_eq!(err.field, "email");
    }

    #[test]
    fn test_subdomain_email_passes() {
        assert!(person("Lucas", "lucas@mail.example.co", 22)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_zero_age_fails() {
        // Zero is indistinguishable from absent, so it is rejected.
        let err = person("Lucas", "lucas@gmail.com", 0).validate().unwrap_err();
        assert_eq!(err.field, "age");
    }

    #[test]
    fn test_nonzero_age_passes_even_negative() {
        assert!(person("Lucas", "lucas@gmail.com", -1).validate().is_ok());
    }

    #[test]
    fn test_first_failure_wins() {
        let err = person("", "", 0).validate().unwrap_err();
        assert_eq!(err.field, "name");
    }
}
