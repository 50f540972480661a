//! Seek performance metrics.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total seek time | Sum of all step distances (tracks) |
//! | Average seek time | Total / requests, 0 for an empty queue |
//! | Throughput | Requests / total, 0 when total is 0 |
//! | Max seek | Longest single movement |
//! | Direction changes | Reversals of head travel |
//! | Elapsed time | Arrival time of the last step |

use serde::{Deserialize, Serialize};

use crate::models::SeekTrace;

/// Seek performance indicators for one simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeekMetrics {
    /// Total head movement in tracks.
    pub total_seek_time: u64,
    /// Mean movement per serviced request.
    pub average_seek_time: f64,
    /// Requests serviced per track travelled.
    pub throughput: f64,
    /// Number of requests serviced.
    pub requests_served: usize,
    /// Longest single movement in tracks.
    pub max_seek: u64,
    /// Number of times the head reversed direction.
    pub direction_changes: usize,
    /// Total movement in time units.
    pub elapsed_time: f64,
}

impl SeekMetrics {
    /// Computes metrics from a trace.
    ///
    /// # Arguments
    /// * `trace` - The full head-movement trace, sweep stops included.
    /// * `requests` - Number of queued requests.
    pub fn calculate(trace: &SeekTrace, requests: usize) -> Self {
        let total = trace.total_distance();

        let average_seek_time = if requests == 0 {
            0.0
        } else {
            total as f64 / requests as f64
        };
        let throughput = if total == 0 {
            0.0
        } else {
            requests as f64 / total as f64
        };

        let max_seek = trace.steps().iter().map(|s| s.distance).max().unwrap_or(0);

        // Sign of each non-zero movement; a change of sign is a reversal.
        let mut direction_changes = 0;
        let mut heading: Option<bool> = None;
        for step in trace.steps().iter().filter(|s| s.distance > 0) {
            let up = step.to > step.from;
            if heading.is_some_and(|h| h != up) {
                direction_changes += 1;
            }
            heading = Some(up);
        }

        Self {
            total_seek_time: total,
            average_seek_time,
            throughput,
            requests_served: trace.steps().iter().filter(|s| s.is_service()).count(),
            max_seek,
            direction_changes,
            elapsed_time: trace.elapsed_time(),
        }
    }
}
