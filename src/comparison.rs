//! Cross-policy comparison and ranking.
//!
//! Runs the simulator once per policy against identical inputs and picks
//! the policy with the least total head movement. Ties go to the policy
//! declared first in [`PolicyKind::ALL`], never to evaluation order.
//!
//! Without an initial direction, direction-dependent policies cannot run;
//! they are skipped and listed in [`ComparisonResult::skipped`] rather than
//! failing the whole comparison.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::SeekResult;
use crate::models::{RequestQueue, Track};
use crate::policies::PolicyKind;
use crate::simulator::{SeekMetrics, Simulator};

/// One evaluated policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyReport {
    /// Evaluated policy.
    pub policy: PolicyKind,
    /// Service sequence it produced.
    pub sequence: Vec<Track>,
    /// Its metrics.
    pub metrics: SeekMetrics,
}

/// Outcome of comparing policies on the same inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Reports in precedence order.
    pub reports: Vec<PolicyReport>,
    /// Policies not evaluated because no direction was given.
    pub skipped: Vec<PolicyKind>,
    /// Policy with the minimum total seek time. `None` if nothing ran.
    pub best_policy: Option<PolicyKind>,
}

impl ComparisonResult {
    /// Report for `policy`, if it was evaluated.
    pub fn get(&self, policy: PolicyKind) -> Option<&PolicyReport> {
        self.reports.iter().find(|r| r.policy == policy)
    }

    /// Report of the best policy.
    pub fn best(&self) -> Option<&PolicyReport> {
        self.best_policy.and_then(|p| self.get(p))
    }

    /// Reports ordered best first: ascending total seek time, ties by
    /// precedence.
    pub fn ranking(&self) -> Vec<&PolicyReport> {
        let mut ranked: Vec<&PolicyReport> = self.reports.iter().collect();
        ranked.sort_by_key(|r| rank_key(r));
        ranked
    }
}

fn rank_key(report: &PolicyReport) -> (u64, usize) {
    (report.metrics.total_seek_time, report.policy.precedence())
}

/// Runs a set of policies through one simulator.
///
/// # Example
///
/// ```
/// use u_diskseek::comparison::ComparisonEngine;
/// use u_diskseek::models::{DiskModel, Direction, RequestQueue};
/// use u_diskseek::policies::PolicyKind;
/// use u_diskseek::simulator::{SimulationOptions, Simulator};
///
/// let disk = DiskModel::new(200, 50).unwrap();
/// let queue = RequestQueue::new(&disk, vec![82, 170, 43, 140, 24, 16, 190]).unwrap();
/// let simulator = Simulator::new(disk)
///     .with_direction(Direction::Increasing)
///     .with_options(SimulationOptions::default().with_seed(1));
///
/// let result = ComparisonEngine::new(simulator).compare(&queue).unwrap();
/// assert_eq!(result.reports.len(), 10);
/// assert_eq!(result.best_policy, Some(PolicyKind::Sstf));
/// ```
#[derive(Debug, Clone)]
pub struct ComparisonEngine {
    simulator: Simulator,
    policies: Vec<PolicyKind>,
}

impl ComparisonEngine {
    /// Creates an engine evaluating every supported policy.
    pub fn new(simulator: Simulator) -> Self {
        Self {
            simulator,
            policies: PolicyKind::ALL.to_vec(),
        }
    }

    /// Restricts evaluation to `policies`. Duplicates are ignored and the
    /// result is reported in precedence order.
    pub fn with_policies(mut self, policies: impl IntoIterator<Item = PolicyKind>) -> Self {
        let mut policies: Vec<PolicyKind> = policies.into_iter().collect();
        policies.sort_unstable();
        policies.dedup();
        self.policies = policies;
        self
    }

    /// Policies this engine evaluates.
    pub fn policies(&self) -> &[PolicyKind] {
        &self.policies
    }

    /// Runs every applicable policy over `queue` and ranks them.
    ///
    /// Each run is independent; RSS reseeds from the simulator options on
    /// every run, so results do not depend on evaluation order.
    pub fn compare(&self, queue: &RequestQueue) -> SeekResult<ComparisonResult> {
        let has_direction = self.simulator.direction().is_some();
        let (runnable, skipped): (Vec<PolicyKind>, Vec<PolicyKind>) = self
            .policies
            .iter()
            .partition(|p| has_direction || !p.requires_direction());

        if !skipped.is_empty() {
            let names: Vec<&str> = skipped.iter().map(|p| p.name()).collect();
            warn!(skipped = ?names, "no direction given; skipping direction-dependent policies");
        }

        let reports = runnable
            .into_iter()
            .map(|policy| {
                let outcome = self.simulator.run(policy, queue)?;
                Ok(PolicyReport {
                    policy,
                    sequence: outcome.sequence,
                    metrics: outcome.metrics,
                })
            })
            .collect::<SeekResult<Vec<_>>>()?;

        let best_policy = reports.iter().min_by_key(|r| rank_key(r)).map(|r| r.policy);

        if let Some(best) = best_policy {
            info!(
                best = %best,
                evaluated = reports.len(),
                requests = queue.len(),
                "comparison complete"
            );
        }

        Ok(ComparisonResult {
            reports,
            skipped,
            best_policy,
        })
    }
}
