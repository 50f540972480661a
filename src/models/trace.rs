//! Seek plans and head-movement traces.
//!
//! A policy emits a [`SeekPlan`]: the ordered stops the arm makes. Most
//! stops service a queued request; sweep-style policies may also travel to
//! a track without servicing anything there (the disk edge for SCAN, the
//! wrap target for C-SCAN). The [`SeekTrace`] folds the plan into
//! per-movement steps starting at the initial head position.

use serde::{Deserialize, Serialize};

use super::Track;

/// One stop of the disk arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stop {
    /// Services the request at this index of the queue.
    Service(usize),
    /// Travels to a track without servicing a request.
    Sweep(Track),
}

/// Ordered stops produced by a policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeekPlan {
    stops: Vec<Stop>,
}

impl SeekPlan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a plan servicing the given queue indices in order.
    pub fn from_order(order: impl IntoIterator<Item = usize>) -> Self {
        Self {
            stops: order.into_iter().map(Stop::Service).collect(),
        }
    }

    /// Appends a service stop.
    pub fn service(&mut self, index: usize) {
        self.stops.push(Stop::Service(index));
    }

    /// Appends a sweep stop.
    pub fn sweep(&mut self, track: Track) {
        self.stops.push(Stop::Sweep(track));
    }

    /// Appends every stop of `other`.
    pub fn extend(&mut self, other: SeekPlan) {
        self.stops.extend(other.stops);
    }

    /// All stops in order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Queue indices in service order.
    pub fn service_order(&self) -> Vec<usize> {
        self.stops
            .iter()
            .filter_map(|s| match s {
                Stop::Service(i) => Some(*i),
                Stop::Sweep(_) => None,
            })
            .collect()
    }

    /// Track numbers in service order (the service sequence).
    ///
    /// Indices outside `requests` are skipped; the simulator rejects such
    /// plans before this is called.
    pub fn service_sequence(&self, requests: &[Track]) -> Vec<Track> {
        self.service_order()
            .into_iter()
            .filter_map(|i| requests.get(i).copied())
            .collect()
    }

    /// Track the arm occupies after `stop`.
    pub(crate) fn stop_track(stop: Stop, requests: &[Track]) -> Option<Track> {
        match stop {
            Stop::Service(i) => requests.get(i).copied(),
            Stop::Sweep(t) => Some(t),
        }
    }
}

/// A single head movement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeekStep {
    /// Zero-based step number.
    pub step: usize,
    /// Track before the movement.
    pub from: Track,
    /// Track after the movement.
    pub to: Track,
    /// `|to - from|`.
    pub distance: u64,
    /// Running total of distance including this step.
    pub cumulative: u64,
    /// Elapsed time when the arm arrives at `to`.
    pub time: f64,
    /// Queue index of the serviced request. `None` for sweep stops.
    pub request: Option<usize>,
}

impl SeekStep {
    /// Whether this step services a request.
    pub fn is_service(&self) -> bool {
        self.request.is_some()
    }
}

/// Full head-movement trace of one simulation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeekTrace {
    steps: Vec<SeekStep>,
}

impl SeekTrace {
    /// Folds `plan` into movement steps starting at `head`, one time unit
    /// per track.
    ///
    /// Service stops whose index is outside `requests` are dropped.
    /// Returns `None` if the total distance does not fit in a `u64`.
    pub fn build(head: Track, requests: &[Track], plan: &SeekPlan) -> Option<Self> {
        let mut steps = Vec::with_capacity(plan.stops().len());
        let mut position = head;
        let mut cumulative = 0u64;

        for &stop in plan.stops() {
            let Some(to) = SeekPlan::stop_track(stop, requests) else {
                continue;
            };
            let distance = to.abs_diff(position);
            cumulative = cumulative.checked_add(distance)?;
            steps.push(SeekStep {
                step: steps.len(),
                from: position,
                to,
                distance,
                cumulative,
                time: cumulative as f64,
                request: match stop {
                    Stop::Service(i) => Some(i),
                    Stop::Sweep(_) => None,
                },
            });
            position = to;
        }

        Some(Self { steps })
    }

    /// Rescales step times to `time_per_track` units per track.
    pub fn with_time_per_track(mut self, time_per_track: f64) -> Self {
        for step in &mut self.steps {
            step.time = step.cumulative as f64 * time_per_track;
        }
        self
    }

    /// All steps in order.
    pub fn steps(&self) -> &[SeekStep] {
        &self.steps
    }

    /// Number of steps (service and sweep).
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the arm never moved or stopped.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Sum of all step distances.
    pub fn total_distance(&self) -> u64 {
        self.steps.last().map(|s| s.cumulative).unwrap_or(0)
    }

    /// Time at which the last movement completes.
    pub fn elapsed_time(&self) -> f64 {
        self.steps.last().map(|s| s.time).unwrap_or(0.0)
    }

    /// Track the arm ends on, or `None` for an empty trace.
    pub fn final_position(&self) -> Option<Track> {
        self.steps.last().map(|s| s.to)
    }
}
