//! Input validation for seek simulations.
//!
//! Checks raw boundary input before any policy runs. Detects:
//! - Non-positive disk sizes
//! - Head positions outside the disk
//! - Requests outside the disk
//! - Unknown policy names and direction strings
//! - Direction-dependent policies invoked without a direction
//! - Unusable simulation options
//!
//! Every violated constraint is reported, not just the first.

use std::fmt;

use crate::models::{DiskModel, Direction, RequestQueue, Track};
use crate::policies::PolicyKind;
use crate::simulator::SimulationOptions;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Disk size is zero or negative.
    InvalidDiskSize,
    /// Head position is outside `[0, size)`.
    InvalidHeadPosition,
    /// A request is outside `[0, size)`.
    InvalidRequestValue,
    /// Policy name is not one of the supported identifiers.
    UnknownPolicy,
    /// Direction string could not be parsed.
    InvalidDirection,
    /// A direction-dependent policy was selected without a direction.
    MissingDirection,
    /// A simulation option is out of range.
    InvalidOption,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn missing_direction(policy: PolicyKind) -> Self {
        Self::new(
            ValidationErrorKind::MissingDirection,
            format!("Policy {policy} requires a direction"),
        )
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Disk, queue, direction and policy that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInput {
    /// Disk geometry and initial head.
    pub disk: DiskModel,
    /// Pending requests in arrival order.
    pub queue: RequestQueue,
    /// Initial head direction, if supplied.
    pub direction: Option<Direction>,
    /// Selected policy. `None` when validating a comparison.
    pub policy: Option<PolicyKind>,
}

/// Validates raw simulation input.
///
/// Pass `policy = None` to validate a comparison request; the direction
/// requirement is then not enforced. An empty direction string counts as
/// absent.
///
/// Checks:
/// 1. `disk_size > 0`
/// 2. `0 <= head_position < disk_size`
/// 3. Every request in `[0, disk_size)`
/// 4. `policy` names a supported policy
/// 5. `direction` parses
/// 6. A direction is present when the policy requires one
///
/// # Returns
/// The validated tuple, or `Err(errors)` with all detected issues.
pub fn validate_input(
    disk_size: i64,
    head_position: i64,
    requests: &[i64],
    policy: Option<&str>,
    direction: Option<&str>,
) -> Result<ValidatedInput, Vec<ValidationError>> {
    let mut errors = Vec::new();

    if disk_size <= 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidDiskSize,
            format!("Disk size must be positive, got {disk_size}"),
        ));
    }
    let in_range = |v: i64| v >= 0 && (disk_size <= 0 || v < disk_size);
    let range_text = if disk_size > 0 {
        format!("0..{}", disk_size - 1)
    } else {
        "a non-negative track".to_string()
    };

    if !in_range(head_position) {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidHeadPosition,
            format!("Head position {head_position} outside range {range_text}"),
        ));
    }

    for (i, &r) in requests.iter().enumerate() {
        if !in_range(r) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidRequestValue,
                format!("Request #{i} ({r}) outside range {range_text}"),
            ));
        }
    }

    let policy = match policy {
        Some(name) => match name.parse::<PolicyKind>() {
            Ok(p) => Some(p),
            Err(e) => {
                errors.push(e);
                None
            }
        },
        None => None,
    };

    let direction_text = direction.map(str::trim).filter(|s| !s.is_empty());
    let direction = match direction_text {
        Some(text) => match text.parse::<Direction>() {
            Ok(d) => Some(d),
            Err(e) => {
                errors.push(e);
                None
            }
        },
        None => None,
    };

    if let Some(p) = policy {
        if p.requires_direction() && direction_text.is_none() {
            errors.push(ValidationError::missing_direction(p));
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    // Every value is non-negative and in range past this point.
    let size = disk_size as u64;
    let disk = DiskModel {
        size,
        head: head_position as Track,
    };
    let queue = RequestQueue::from_validated(requests.iter().map(|&r| r as Track).collect());

    Ok(ValidatedInput {
        disk,
        queue,
        direction,
        policy,
    })
}

/// Validates simulation options.
///
/// Checks:
/// 1. `batch_size >= 1`
/// 2. `time_per_track` is finite and non-negative
pub fn validate_options(options: &SimulationOptions) -> ValidationResult {
    let mut errors = Vec::new();

    if options.batch_size == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidOption,
            "N-step batch size must be at least 1",
        ));
    }

    if !options.time_per_track.is_finite() || options.time_per_track < 0.0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidOption,
            format!(
                "Time per track must be a non-negative number, got {}",
                options.time_per_track
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUESTS: [i64; 7] = [82, 170, 43, 140, 24, 16, 190];

    fn kinds(errors: &[ValidationError]) -> Vec<ValidationErrorKind> {
        errors.iter().map(|e| e.kind).collect()
    }

    #[test]
    fn test_valid_input() {
        let input = validate_input(200, 50, &REQUESTS, Some("SSTF"), None).unwrap();
        assert_eq!(input.disk.size(), 200);
        assert_eq!(input.disk.head(), 50);
        assert_eq!(input.queue.tracks(), &[82, 170, 43, 140, 24, 16, 190]);
        assert_eq!(input.policy, Some(PolicyKind::Sstf));
        assert_eq!(input.direction, None);
    }

    #[test]
    fn test_valid_with_direction() {
        let input = validate_input(200, 50, &REQUESTS, Some("c-scan"), Some("decreasing")).unwrap();
        assert_eq!(input.policy, Some(PolicyKind::CScan));
        assert_eq!(input.direction, Some(Direction::Decreasing));
    }

    #[test]
    fn test_invalid_disk_size() {
        let errors = validate_input(0, 0, &[], Some("FCFS"), None).unwrap_err();
        assert!(kinds(&errors).contains(&ValidationErrorKind::InvalidDiskSize));

        let errors = validate_input(-5, 0, &[], Some("FCFS"), None).unwrap_err();
        assert!(kinds(&errors).contains(&ValidationErrorKind::InvalidDiskSize));
    }

    #[test]
    fn test_invalid_head_position() {
        for head in [-1, 200, 1000] {
            let errors = validate_input(200, head, &REQUESTS, Some("FCFS"), None).unwrap_err();
            assert_eq!(kinds(&errors), vec![ValidationErrorKind::InvalidHeadPosition]);
        }
    }

    #[test]
    fn test_invalid_request_values() {
        let errors = validate_input(200, 50, &[10, 200, -3, 199], Some("FCFS"), None).unwrap_err();
        assert_eq!(
            kinds(&errors),
            vec![
                ValidationErrorKind::InvalidRequestValue,
                ValidationErrorKind::InvalidRequestValue
            ]
        );
    }

    #[test]
    fn test_unknown_policy() {
        let errors = validate_input(200, 50, &REQUESTS, Some("ELEVATOR-9000"), None).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::UnknownPolicy]);
    }

    #[test]
    fn test_missing_direction() {
        for name in ["SCAN", "CSCAN", "LOOK", "CLOOK", "N-STEP-SCAN", "F-SCAN"] {
            let errors = validate_input(200, 50, &REQUESTS, Some(name), None).unwrap_err();
            assert_eq!(kinds(&errors), vec![ValidationErrorKind::MissingDirection]);
        }

        let errors = validate_input(200, 50, &REQUESTS, Some("LOOK"), Some("  ")).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::MissingDirection]);
    }

    #[test]
    fn test_direction_ignored_policies_need_none() {
        for name in ["FCFS", "SSTF", "RSS", "LIFO"] {
            assert!(validate_input(200, 50, &REQUESTS, Some(name), None).is_ok());
        }
    }

    #[test]
    fn test_invalid_direction_not_reported_as_missing() {
        let errors = validate_input(200, 50, &REQUESTS, Some("SCAN"), Some("sideways")).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::InvalidDirection]);
    }

    #[test]
    fn test_comparison_mode_skips_direction_requirement() {
        let input = validate_input(200, 50, &REQUESTS, None, None).unwrap();
        assert_eq!(input.policy, None);
    }

    #[test]
    fn test_multiple_errors() {
        // Negative size + bad head + bad request + unknown policy
        let errors = validate_input(-1, -2, &[-3], Some("NOPE"), None).unwrap_err();
        assert_eq!(
            kinds(&errors),
            vec![
                ValidationErrorKind::InvalidDiskSize,
                ValidationErrorKind::InvalidHeadPosition,
                ValidationErrorKind::InvalidRequestValue,
                ValidationErrorKind::UnknownPolicy,
            ]
        );
    }

    #[test]
    fn test_validate_options() {
        assert!(validate_options(&SimulationOptions::default()).is_ok());

        let errors = validate_options(
            &SimulationOptions::default()
                .with_batch_size(0)
                .with_time_per_track(f64::NAN),
        )
        .unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::InvalidOption));
    }
}
