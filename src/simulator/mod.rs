//! Seek simulation and metrics.
//!
//! Drives one policy over a request queue, folds the resulting plan into a
//! head-movement trace and computes performance metrics.
//!
//! # Algorithm
//!
//! 1. Resolve the policy and obtain its seek plan.
//! 2. Check the plan services every queued request exactly once.
//! 3. Fold `[head] ++ stops` pairwise into seek steps.
//! 4. Derive metrics from the trace.
//!
//! # Metrics
//!
//! `SeekMetrics` reports total and average seek distance, throughput
//! (requests per track travelled), the longest single seek and the
//! number of direction reversals.

mod engine;
mod metrics;

pub use engine::{SimulationOptions, SimulationOutcome, Simulator};
pub use metrics::SeekMetrics;
