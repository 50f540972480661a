//! Disk geometry and head direction.
//!
//! A disk is modeled as a linear range of tracks `[0, size)` with a single
//! arm whose head starts at a known track. Rotational latency and transfer
//! time are ignored: the cost of a seek is the absolute track distance.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 11.2

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::validation::{ValidationError, ValidationErrorKind};

/// A track (cylinder) number.
pub type Track = u64;

/// Immutable description of the track space and the starting head position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiskModel {
    pub(crate) size: u64,
    pub(crate) head: Track,
}

impl DiskModel {
    /// Creates a disk with `size` tracks and the head parked at `head`.
    ///
    /// # Errors
    /// Fails when `size == 0` or `head` lies outside `[0, size)`.
    pub fn new(size: u64, head: Track) -> Result<Self, ValidationError> {
        if size == 0 {
            return Err(ValidationError::new(
                ValidationErrorKind::InvalidDiskSize,
                "Disk size must be positive, got 0",
            ));
        }
        if head >= size {
            return Err(ValidationError::new(
                ValidationErrorKind::InvalidHeadPosition,
                format!("Head position {head} outside range 0..{}", size - 1),
            ));
        }
        Ok(Self { size, head })
    }

    /// Number of tracks.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Initial head position.
    pub fn head(&self) -> Track {
        self.head
    }

    /// Highest addressable track.
    pub fn last_track(&self) -> Track {
        self.size - 1
    }

    /// Whether `track` is addressable on this disk.
    pub fn contains(&self, track: Track) -> bool {
        track < self.size
    }

    /// The physical edge the arm reaches when sweeping in `direction`.
    pub fn boundary(&self, direction: Direction) -> Track {
        match direction {
            Direction::Increasing => self.last_track(),
            Direction::Decreasing => 0,
        }
    }
}

/// Direction of head travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Toward higher track numbers.
    Increasing,
    /// Toward track 0.
    Decreasing,
}

impl Direction {
    /// The opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            Self::Increasing => Self::Decreasing,
            Self::Decreasing => Self::Increasing,
        }
    }

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Increasing => "increasing",
            Self::Decreasing => "decreasing",
        }
    }

    /// Parses a direction, accepting common synonyms (`up`/`right`/`+1`,
    /// `down`/`left`/`-1`). Case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "increasing" | "inc" | "up" | "right" | "high" | "1" | "+1" => Some(Self::Increasing),
            "decreasing" | "dec" | "down" | "left" | "low" | "-1" => Some(Self::Decreasing),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            ValidationError::new(
                ValidationErrorKind::InvalidDirection,
                format!("Unknown direction '{s}' (expected 'increasing' or 'decreasing')"),
            )
        })
    }
}
