//! Error types for seek simulation.

use thiserror::Error;

use crate::policies::PolicyKind;
use crate::validation::ValidationError;

/// Result alias for fallible simulator operations.
pub type SeekResult<T> = Result<T, SeekError>;

/// Error raised by simulation and comparison.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeekError {
    /// Input rejected before any policy ran. Carries every violation found.
    #[error("invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),

    /// A policy broke the service invariant. This is a defect, not bad input.
    #[error("internal error: {policy} produced an invalid service order: {detail}")]
    InvariantViolation {
        /// Offending policy.
        policy: PolicyKind,
        /// What was wrong with the plan.
        detail: String,
    },

    /// Total head movement does not fit in a `u64`.
    #[error("total seek distance of {policy} overflows u64")]
    DistanceOverflow {
        /// Policy whose trace overflowed.
        policy: PolicyKind,
    },
}

impl SeekError {
    /// Whether this error was caused by the caller's input.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Validation errors carried by an `InvalidInput` error.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::InvalidInput(errors) => errors,
            Self::InvariantViolation { .. } | Self::DistanceOverflow { .. } => &[],
        }
    }
}

impl From<Vec<ValidationError>> for SeekError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidInput(errors)
    }
}

impl From<ValidationError> for SeekError {
    fn from(error: ValidationError) -> Self {
        Self::InvalidInput(vec![error])
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_input;

    #[test]
    fn test_display_joins_every_violation() {
        let errors = validate_input(0, -1, &[], Some("NOPE"), None).unwrap_err();
        let err = SeekError::from(errors);
        let text = err.to_string();
        assert!(text.starts_with("invalid input: "));
        assert!(text.contains("Disk size"));
        assert!(text.contains("Head position"));
        assert!(text.contains("Unknown policy"));
        assert_eq!(err.validation_errors().len(), 3);
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_invariant_violation_is_distinct() {
        let err = SeekError::InvariantViolation {
            policy: PolicyKind::Sstf,
            detail: "request #0 never serviced".into(),
        };
        assert!(!err.is_invalid_input());
        assert!(err.validation_errors().is_empty());
        assert!(err.to_string().contains("SSTF"));
    }

    #[test]
    fn test_distance_overflow_names_policy() {
        let err = SeekError::DistanceOverflow {
            policy: PolicyKind::CScan,
        };
        assert!(!err.is_invalid_input());
        assert!(err.validation_errors().is_empty());
        assert!(err.to_string().contains("C-SCAN"));
    }
}
