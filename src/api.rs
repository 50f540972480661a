//! Request/response contract for the presentation layer.
//!
//! Mirrors the JSON shapes the HTTP boundary exchanges: camelCase fields,
//! policy names as strings, and rounded floating-point metrics
//! (`averageSeekTime` to 2 decimals, `throughput` to 4). Input arrives as
//! signed integers so out-of-range values reach validation instead of
//! failing deserialization.
//!
//! ```
//! use u_diskseek::api::{simulate, SimulateRequest};
//!
//! let request: SimulateRequest = serde_json::from_str(r#"{
//!     "diskSize": 200,
//!     "requests": [82, 170, 43, 140, 24, 16, 190],
//!     "headPosition": 50,
//!     "policy": "FCFS"
//! }"#).unwrap();
//!
//! let response = simulate(&request).unwrap();
//! assert_eq!(response.total_seek_time, 642);
//! assert_eq!(response.average_seek_time, 91.71);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::comparison::{ComparisonEngine, PolicyReport};
use crate::error::SeekResult;
use crate::models::Track;
use crate::simulator::{SeekMetrics, SimulationOptions, Simulator};
use crate::validation::{validate_input, ValidationError, ValidationErrorKind};

/// Input of `simulate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulateRequest {
    /// Number of tracks.
    pub disk_size: i64,
    /// Pending requests in arrival order.
    pub requests: Vec<i64>,
    /// Initial head position.
    pub head_position: i64,
    /// Policy identifier (e.g., "SSTF", "C-SCAN").
    pub policy: String,
    /// Initial direction ("increasing" / "decreasing").
    #[serde(default)]
    pub direction: Option<String>,
    /// Simulation options; defaults when omitted.
    #[serde(default)]
    pub options: Option<SimulationOptions>,
}

/// Input of `compare`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareRequest {
    /// Number of tracks.
    pub disk_size: i64,
    /// Pending requests in arrival order.
    pub requests: Vec<i64>,
    /// Initial head position.
    pub head_position: i64,
    /// Initial direction; direction-dependent policies are skipped without it.
    #[serde(default)]
    pub direction: Option<String>,
    /// Simulation options; defaults when omitted.
    #[serde(default)]
    pub options: Option<SimulationOptions>,
}

/// Metrics and service sequence of one policy run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeekSummary {
    /// Total head movement.
    pub total_seek_time: u64,
    /// Average movement per request, rounded to 2 decimals.
    pub average_seek_time: f64,
    /// Requests per track travelled, rounded to 4 decimals.
    pub throughput: f64,
    /// Service sequence in policy order.
    pub seek_sequence: Vec<Track>,
}

impl SeekSummary {
    fn new(metrics: &SeekMetrics, sequence: Vec<Track>) -> Self {
        Self {
            total_seek_time: metrics.total_seek_time,
            average_seek_time: round_to(metrics.average_seek_time, 2),
            throughput: round_to(metrics.throughput, 4),
            seek_sequence: sequence,
        }
    }
}

impl From<&PolicyReport> for SeekSummary {
    fn from(report: &PolicyReport) -> Self {
        Self::new(&report.metrics, report.sequence.clone())
    }
}

/// Output of `compare`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareResponse {
    /// Summary per evaluated policy name.
    pub comparison: BTreeMap<String, SeekSummary>,
    /// Name of the policy with the least total seek time.
    pub best_policy: String,
    /// Policies skipped for lack of a direction.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<String>,
}

/// Validates `request` and simulates its policy.
pub fn simulate(request: &SimulateRequest) -> SeekResult<SeekSummary> {
    let input = validate_input(
        request.disk_size,
        request.head_position,
        &request.requests,
        Some(request.policy.as_str()),
        request.direction.as_deref(),
    )?;
    let policy = input.policy.ok_or_else(|| {
        ValidationError::new(
            ValidationErrorKind::UnknownPolicy,
            format!("Unknown policy '{}'", request.policy),
        )
    })?;

    let outcome = Simulator::new(input.disk)
        .with_direction_opt(input.direction)
        .with_options(request.options.clone().unwrap_or_default())
        .run(policy, &input.queue)?;

    Ok(SeekSummary::new(&outcome.metrics, outcome.sequence))
}

/// Validates `request` and compares every applicable policy.
pub fn compare(request: &CompareRequest) -> SeekResult<CompareResponse> {
    let input = validate_input(
        request.disk_size,
        request.head_position,
        &request.requests,
        None,
        request.direction.as_deref(),
    )?;

    let simulator = Simulator::new(input.disk)
        .with_direction_opt(input.direction)
        .with_options(request.options.clone().unwrap_or_default());
    let result = ComparisonEngine::new(simulator).compare(&input.queue)?;

    Ok(CompareResponse {
        comparison: result
            .reports
            .iter()
            .map(|r| (r.policy.name().to_string(), SeekSummary::from(r)))
            .collect(),
        // FCFS never needs a direction, so the full policy set always has a winner.
        best_policy: result
            .best_policy
            .map(|p| p.name().to_string())
            .unwrap_or_default(),
        skipped: result.skipped.iter().map(|p| p.name().to_string()).collect(),
    })
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
