//! Seek simulator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::SeekMetrics;
use crate::error::{SeekError, SeekResult};
use crate::models::{DiskModel, Direction, RequestQueue, SeekPlan, SeekTrace, Stop, Track};
use crate::policies::{PolicyContext, PolicyKind, DEFAULT_BATCH_SIZE};
use crate::validation::validate_options;

/// Tunable simulation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SimulationOptions {
    /// Requests per N-step SCAN batch (at least 1).
    pub batch_size: usize,
    /// Seed for the RSS generator. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Time units per track of head movement.
    pub time_per_track: f64,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            seed: None,
            time_per_track: 1.0,
        }
    }
}

impl SimulationOptions {
    /// Sets the N-step batch size.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Sets the RSS seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the time per track.
    pub fn with_time_per_track(mut self, time_per_track: f64) -> Self {
        self.time_per_track = time_per_track;
        self
    }
}

/// Result of simulating one policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// Policy that produced the order.
    pub policy: PolicyKind,
    /// Serviced tracks in order (the service sequence).
    pub sequence: Vec<Track>,
    /// Full head-movement trace, sweep stops included.
    pub trace: SeekTrace,
    /// Performance metrics.
    pub metrics: SeekMetrics,
}

/// Runs ordering policies against a disk.
///
/// Holds only the immutable disk, the initial direction and options;
/// every run works on its own copy of the queue.
///
/// # Example
///
/// ```
/// use u_diskseek::models::{DiskModel, RequestQueue};
/// use u_diskseek::policies::PolicyKind;
/// use u_diskseek::simulator::Simulator;
///
/// let disk = DiskModel::new(200, 50).unwrap();
/// let queue = RequestQueue::new(&disk, vec![82, 170, 43, 140, 24, 16, 190]).unwrap();
///
/// let outcome = Simulator::new(disk).run(PolicyKind::Sstf, &queue).unwrap();
/// assert_eq!(outcome.sequence, vec![43, 24, 16, 82, 140, 170, 190]);
/// assert_eq!(outcome.metrics.total_seek_time, 208);
/// ```
#[derive(Debug, Clone)]
pub struct Simulator {
    disk: DiskModel,
    direction: Option<Direction>,
    options: SimulationOptions,
}

impl Simulator {
    /// Creates a simulator with no direction and default options.
    pub fn new(disk: DiskModel) -> Self {
        Self {
            disk,
            direction: None,
            options: SimulationOptions::default(),
        }
    }

    /// Sets the initial head direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Sets the initial head direction, if any.
    pub fn with_direction_opt(mut self, direction: Option<Direction>) -> Self {
        self.direction = direction;
        self
    }

    /// Sets simulation options.
    pub fn with_options(mut self, options: SimulationOptions) -> Self {
        self.options = options;
        self
    }

    /// Initial head direction.
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Simulates `policy` over `queue`.
    ///
    /// RSS draws from a generator seeded with `options.seed` when set, so
    /// identical inputs and seed reproduce identical traces.
    pub fn run(&self, policy: PolicyKind, queue: &RequestQueue) -> SeekResult<SimulationOutcome> {
        let mut rng = match self.options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.run_with_rng(policy, queue, &mut rng)
    }

    /// Simulates `policy` drawing randomness from `rng`.
    pub fn run_with_rng<R: Rng + ?Sized>(
        &self,
        policy: PolicyKind,
        queue: &RequestQueue,
        rng: &mut R,
    ) -> SeekResult<SimulationOutcome> {
        validate_options(&self.options)?;

        let ctx = PolicyContext {
            disk: self.disk,
            direction: self.direction,
            batch_size: self.options.batch_size,
        };
        let requests = queue.tracks();
        let plan = policy.plan(&ctx, requests, rng)?;

        if let Err(detail) = check_plan(&self.disk, requests, &plan) {
            warn!(%policy, detail = detail.as_str(), "policy produced an invalid plan");
            return Err(SeekError::InvariantViolation { policy, detail });
        }

        let trace = SeekTrace::build(self.disk.head(), requests, &plan)
            .ok_or(SeekError::DistanceOverflow { policy })?
            .with_time_per_track(self.options.time_per_track);
        let metrics = SeekMetrics::calculate(&trace, requests.len());

        debug!(
            %policy,
            requests = requests.len(),
            total_seek_time = metrics.total_seek_time,
            steps = trace.len(),
            "simulated policy"
        );

        Ok(SimulationOutcome {
            policy,
            sequence: plan.service_sequence(requests),
            trace,
            metrics,
        })
    }
}

/// Checks that `plan` services every request exactly once and only
/// visits tracks on the disk.
fn check_plan(disk: &DiskModel, requests: &[Track], plan: &SeekPlan) -> Result<(), String> {
    let mut seen = vec![false; requests.len()];

    for &stop in plan.stops() {
        match stop {
            Stop::Service(i) => match seen.get_mut(i) {
                Some(s) if *s => return Err(format!("request #{i} serviced twice")),
                Some(s) => *s = true,
                None => return Err(format!("request #{i} does not exist")),
            },
            Stop::Sweep(t) if !disk.contains(t) => {
                return Err(format!("sweep stop {t} is off the disk"));
            }
            Stop::Sweep(_) => {}
        }
    }

    match seen.iter().position(|s| !s) {
        Some(i) => Err(format!("request #{i} never serviced")),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{validate_input, ValidationErrorKind};

    const REQUESTS: [Track; 7] = [82, 170, 43, 140, 24, 16, 190];

    fn setup() -> (DiskModel, RequestQueue) {
        let disk = DiskModel::new(200, 50).unwrap();
        let queue = RequestQueue::new(&disk, REQUESTS.to_vec()).unwrap();
        (disk, queue)
    }

    fn sorted(mut v: Vec<Track>) -> Vec<Track> {
        v.sort_unstable();
        v
    }

    #[test]
    fn test_fcfs_scenario() {
        let (disk, queue) = setup();
        let out = Simulator::new(disk).run(PolicyKind::Fcfs, &queue).unwrap();
        assert_eq!(out.sequence, REQUESTS.to_vec());
        assert_eq!(out.metrics.total_seek_time, 642);
        assert!((out.metrics.average_seek_time - 91.714_285_714_285_71).abs() < 1e-9);
    }

    #[test]
    fn test_sstf_scenario() {
        let (disk, queue) = setup();
        let out = Simulator::new(disk).run(PolicyKind::Sstf, &queue).unwrap();
        assert_eq!(out.sequence, vec![43, 24, 16, 82, 140, 170, 190]);
        assert_eq!(out.metrics.total_seek_time, 208);
        assert!((out.metrics.average_seek_time - 208.0 / 7.0).abs() < 1e-10);
    }

    #[test]
    fn test_scan_counts_boundary_travel() {
        let (disk, queue) = setup();
        let out = Simulator::new(disk)
            .with_direction(Direction::Increasing)
            .run(PolicyKind::Scan, &queue)
            .unwrap();
        assert_eq!(out.metrics.total_seek_time, 332);
        assert_eq!(out.trace.len(), 8);
        assert_eq!(out.sequence.len(), 7);
        assert!(out.trace.steps().iter().any(|s| s.to == 199 && !s.is_service()));
    }

    #[test]
    fn test_trace_sums_to_total() {
        let (disk, queue) = setup();
        let sim = Simulator::new(disk)
            .with_direction(Direction::Decreasing)
            .with_options(SimulationOptions::default().with_seed(9));
        for policy in PolicyKind::ALL {
            let out = sim.run(policy, &queue).unwrap();
            let sum: u64 = out
                .trace
                .steps()
                .iter()
                .map(|s| s.to.abs_diff(s.from))
                .sum();
            assert_eq!(sum, out.metrics.total_seek_time, "{policy}");
            assert_eq!(sorted(out.sequence.clone()), sorted(REQUESTS.to_vec()), "{policy}");
            assert_eq!(out.metrics.requests_served, REQUESTS.len());
        }
    }

    #[test]
    fn test_random_reproducible_with_seed() {
        let (disk, queue) = setup();
        let sim = Simulator::new(disk).with_options(SimulationOptions::default().with_seed(77));
        let a = sim.run(PolicyKind::Random, &queue).unwrap();
        let b = sim.run(PolicyKind::Random, &queue).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_run_with_injected_rng() {
        let (disk, queue) = setup();
        let sim = Simulator::new(disk);
        let a = sim
            .run_with_rng(PolicyKind::Random, &queue, &mut StdRng::seed_from_u64(5))
            .unwrap();
        let b = sim
            .run_with_rng(PolicyKind::Random, &queue, &mut StdRng::seed_from_u64(5))
            .unwrap();
        assert_eq!(a.sequence, b.sequence);
    }

    #[test]
    fn test_empty_queue_every_policy() {
        let disk = DiskModel::new(200, 50).unwrap();
        let queue = RequestQueue::default();
        let sim = Simulator::new(disk).with_direction(Direction::Increasing);
        for policy in PolicyKind::ALL {
            let out = sim.run(policy, &queue).unwrap();
            assert!(out.sequence.is_empty());
            assert!(out.trace.is_empty());
            assert_eq!(out.metrics, SeekMetrics::calculate(&SeekTrace::default(), 0));
            assert_eq!(out.metrics.total_seek_time, 0);
            assert!((out.metrics.throughput - 0.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_missing_direction_is_input_error() {
        let (disk, queue) = setup();
        let err = Simulator::new(disk).run(PolicyKind::Look, &queue).unwrap_err();
        match err {
            SeekError::InvalidInput(errors) => {
                assert_eq!(errors[0].kind, ValidationErrorKind::MissingDirection);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_options_rejected() {
        let (disk, queue) = setup();
        let err = Simulator::new(disk)
            .with_direction(Direction::Increasing)
            .with_options(SimulationOptions::default().with_batch_size(0))
            .run(PolicyKind::NStepScan, &queue)
            .unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_elapsed_time_scales() {
        let (disk, queue) = setup();
        let out = Simulator::new(disk)
            .with_options(SimulationOptions::default().with_time_per_track(0.25))
            .run(PolicyKind::Fcfs, &queue)
            .unwrap();
        assert!((out.metrics.elapsed_time - 160.5).abs() < 1e-10);
        // 50 → 82 → 170
        assert!((out.trace.steps()[1].time - 30.0).abs() < 1e-10);
        assert!((out.trace.elapsed_time() - out.metrics.elapsed_time).abs() < 1e-10);
    }

    #[test]
    fn test_edge_travel_with_all_requests_ahead() {
        let disk = DiskModel::new(200, 50).unwrap();
        let queue = RequestQueue::new(&disk, vec![60, 90]).unwrap();
        let sim = Simulator::new(disk).with_direction(Direction::Increasing);

        let total = |policy| sim.run(policy, &queue).unwrap().metrics.total_seek_time;
        assert_eq!(total(PolicyKind::Scan), 149);
        assert_eq!(total(PolicyKind::CScan), 149 + 199);
        assert_eq!(total(PolicyKind::Look), 40);
        assert_eq!(total(PolicyKind::CLook), 40);
    }

    #[test]
    fn test_distance_overflow_is_reported() {
        let input =
            validate_input(i64::MAX, 0, &[i64::MAX - 1, 0, i64::MAX - 1], Some("FCFS"), None)
                .unwrap();
        let err = Simulator::new(input.disk)
            .run(PolicyKind::Fcfs, &input.queue)
            .unwrap_err();
        assert_eq!(err, SeekError::DistanceOverflow { policy: PolicyKind::Fcfs });
        assert!(!err.is_invalid_input());
    }

    #[test]
    fn test_check_plan_detects_defects() {
        let disk = DiskModel::new(100, 0).unwrap();
        let requests = [10, 20];

        assert!(check_plan(&disk, &requests, &SeekPlan::from_order([1, 0])).is_ok());
        assert!(check_plan(&disk, &requests, &SeekPlan::from_order([0])).is_err());
        assert!(check_plan(&disk, &requests, &SeekPlan::from_order([0, 0, 1])).is_err());
        assert!(check_plan(&disk, &requests, &SeekPlan::from_order([0, 1, 2])).is_err());

        let mut off_disk = SeekPlan::from_order([0, 1]);
        off_disk.sweep(100);
        assert!(check_plan(&disk, &requests, &off_disk).is_err());
    }
}
