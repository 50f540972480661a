//! Pending request queue.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{DiskModel, Track};
use crate::validation::{ValidationError, ValidationErrorKind};

/// Ordered collection of pending track requests.
///
/// Arrival order is preserved: it is significant for FCFS, LIFO and the
/// batching policies. Duplicates are permitted and each occurrence is
/// serviced separately.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestQueue {
    tracks: Vec<Track>,
}

impl RequestQueue {
    /// Creates a queue after checking every request against `disk`.
    ///
    /// # Returns
    /// `Err` with one error per out-of-range request.
    pub fn new(disk: &DiskModel, tracks: Vec<Track>) -> Result<Self, Vec<ValidationError>> {
        let errors: Vec<ValidationError> = tracks
            .iter()
            .enumerate()
            .filter(|(_, &t)| !disk.contains(t))
            .map(|(i, t)| {
                ValidationError::new(
                    ValidationErrorKind::InvalidRequestValue,
                    format!(
                        "Request #{i} ({t}) outside range 0..{}",
                        disk.last_track()
                    ),
                )
            })
            .collect();

        if errors.is_empty() {
            Ok(Self { tracks })
        } else {
            Err(errors)
        }
    }

    /// Builds a queue from tracks already checked against the disk.
    pub(crate) fn from_validated(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }

    /// Generates `count` uniformly distributed requests over the disk.
    pub fn random<R: Rng + ?Sized>(disk: &DiskModel, count: usize, rng: &mut R) -> Self {
        let tracks = (0..count)
            .map(|_| rng.random_range(0..disk.size()))
            .collect();
        Self { tracks }
    }

    /// Requests in arrival order.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Number of pending requests.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
