//! Garde validation utilities.

use crate::domain::DomainError;
use garde::{Report, Validate};

/// Validate a service request, collapsing the garde report into a single
/// `ValidationError`
pub fn validate_struct<T>(value: &T) -> Result<(), DomainError>
where
    T: Validate,
    T::Context: Default,
{
    value
        .validate()
        .map_err(|report| DomainError::ValidationError(format_validation_errors(&report)))
}

/// Format as `path: message` pairs joined by ", "
fn format_validation_errors(report: &Report) -> String {
    report
        .iter()
        .map(|(path, error)| {
            let path = path.to_string();
            if path.is_empty() {
                error.message().to_string()
            } else {
                format!("{}: {}", path, error.message())
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use garde::Validate;

    #[derive(Validate)]
    struct FillRequest {
        #[garde(length(min = 1))]
        location: String,
        #[garde(range(min = 0, max = 100))]
        fill_level: i64,
    }

    #[test]
    fn test_validate_success() {
        let request = FillRequest {
            location: "Main St".to_string(),
            fill_level: 100,
        };
        assert!(validate_struct(&request).is_ok());
    }

    #[test]
    fn test_validate_out_of_range() {
        let request = FillRequest {
            location: "Main St".to_string(),
            fill_level: 101,
        };
        match validate_struct(&request) {
            Err(DomainError::ValidationError(msg)) => assert!(msg.contains("fill_level")),
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_reports_every_field() {
        let request = FillRequest {
            location: String::new(),
            fill_level: -1,
        };
        match validate_struct(&request) {
            Err(DomainError::ValidationError(msg)) => {
                assert!(msg.contains("location"));
                assert!(msg.contains("fill_level"));
                assert!(msg.contains(", "));
            }
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }
}
