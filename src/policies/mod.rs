//! Disk-arm ordering policies.
//!
//! The ten supported policies form a closed set, enumerated by
//! [`PolicyKind`] and resolved through [`PolicyKind::plan`]. Each policy is
//! a pure function of `(head, direction, queue)`; only RSS consumes
//! randomness, and only from the generator it is handed.
//!
//! # Categories
//!
//! - **Arrival order**: FCFS, LIFO
//! - **Greedy**: SSTF
//! - **Sweep**: SCAN, C-SCAN, LOOK, C-LOOK
//! - **Batched sweep**: N-STEP-SCAN, F-SCAN
//! - **Random**: RSS
//!
//! # Usage
//!
//! ```
//! use u_diskseek::models::{DiskModel, Direction};
//! use u_diskseek::policies::{PolicyContext, PolicyKind};
//!
//! let disk = DiskModel::new(200, 50).unwrap();
//! let ctx = PolicyContext::new(disk).with_direction(Direction::Increasing);
//! let requests = [82, 170, 43, 140, 24, 16, 190];
//!
//! let mut rng = rand::rng();
//! let plan = PolicyKind::Look.plan(&ctx, &requests, &mut rng).unwrap();
//! assert_eq!(plan.service_sequence(&requests), vec![82, 140, 170, 190, 43, 24, 16]);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 11.2
//! - Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 11.5

mod arrival;
mod batch;
mod greedy;
mod sweep;

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::{DiskModel, Direction, SeekPlan, Track};
use crate::validation::{ValidationError, ValidationErrorKind};

/// Default N-step SCAN batch size.
pub const DEFAULT_BATCH_SIZE: usize = 4;

/// A disk-scheduling policy.
///
/// Declaration order is the precedence used to break ties when ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PolicyKind {
    /// First come, first served.
    #[serde(rename = "FCFS")]
    Fcfs,
    /// Shortest seek time first.
    #[serde(rename = "SSTF")]
    Sstf,
    /// Elevator sweep to the disk edge, then reverse.
    #[serde(rename = "SCAN")]
    Scan,
    /// One-way sweep with a return jump to the opposite edge.
    #[serde(rename = "C-SCAN")]
    CScan,
    /// Elevator sweep reversing at the last request.
    #[serde(rename = "LOOK")]
    Look,
    /// One-way sweep jumping to the extreme far request.
    #[serde(rename = "C-LOOK")]
    CLook,
    /// Random scheduling.
    #[serde(rename = "RSS")]
    Random,
    /// Last in, first out.
    #[serde(rename = "LIFO")]
    Lifo,
    /// SCAN over fixed-size arrival batches.
    #[serde(rename = "N-STEP-SCAN")]
    NStepScan,
    /// SCAN over the older half, then the newer half.
    #[serde(rename = "F-SCAN")]
    FScan,
}

impl PolicyKind {
    /// Every policy, in precedence order.
    pub const ALL: [PolicyKind; 10] = [
        PolicyKind::Fcfs,
        PolicyKind::Sstf,
        PolicyKind::Scan,
        PolicyKind::CScan,
        PolicyKind::Look,
        PolicyKind::CLook,
        PolicyKind::Random,
        PolicyKind::Lifo,
        PolicyKind::NStepScan,
        PolicyKind::FScan,
    ];

    /// Canonical identifier (e.g., "SSTF", "C-SCAN").
    pub fn name(self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sstf => "SSTF",
            Self::Scan => "SCAN",
            Self::CScan => "C-SCAN",
            Self::Look => "LOOK",
            Self::CLook => "C-LOOK",
            Self::Random => "RSS",
            Self::Lifo => "LIFO",
            Self::NStepScan => "N-STEP-SCAN",
            Self::FScan => "F-SCAN",
        }
    }

    /// Policy description.
    pub fn description(self) -> &'static str {
        match self {
            Self::Fcfs => "First Come First Served",
            Self::Sstf => "Shortest Seek Time First",
            Self::Scan => "Elevator (SCAN)",
            Self::CScan => "Circular SCAN",
            Self::Look => "LOOK",
            Self::CLook => "Circular LOOK",
            Self::Random => "Random Scheduling",
            Self::Lifo => "Last In First Out",
            Self::NStepScan => "N-Step SCAN",
            Self::FScan => "Freeze SCAN",
        }
    }

    /// Whether the policy needs an initial head direction.
    pub fn requires_direction(self) -> bool {
        matches!(
            self,
            Self::Scan | Self::CScan | Self::Look | Self::CLook | Self::NStepScan | Self::FScan
        )
    }

    /// Position in the precedence order.
    pub fn precedence(self) -> usize {
        self as usize
    }

    /// Resolves a policy name.
    ///
    /// Case-insensitive; `-`, `_` and spaces are ignored, so `CSCAN`,
    /// `c-scan` and `C_SCAN` all resolve. `RANDOM` aliases RSS and `NSTEP`
    /// aliases N-STEP-SCAN.
    pub fn from_name(name: &str) -> Option<Self> {
        let key: String = name
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_uppercase())
            .collect();

        match key.as_str() {
            "FCFS" | "FIFO" => Some(Self::Fcfs),
            "SSTF" => Some(Self::Sstf),
            "SCAN" => Some(Self::Scan),
            "CSCAN" => Some(Self::CScan),
            "LOOK" => Some(Self::Look),
            "CLOOK" => Some(Self::CLook),
            "RSS" | "RANDOM" => Some(Self::Random),
            "LIFO" => Some(Self::Lifo),
            "NSTEPSCAN" | "NSTEP" => Some(Self::NStepScan),
            "FSCAN" => Some(Self::FScan),
            _ => None,
        }
    }

    /// Produces the seek plan for `requests`.
    ///
    /// `rng` is consumed only by RSS.
    ///
    /// # Errors
    /// `MissingDirection` when a direction-dependent policy is planned
    /// without `ctx.direction`. No default direction is assumed.
    pub fn plan<R: Rng + ?Sized>(
        self,
        ctx: &PolicyContext,
        requests: &[Track],
        rng: &mut R,
    ) -> Result<SeekPlan, ValidationError> {
        let head = ctx.disk.head();
        let direction = || {
            ctx.direction
                .ok_or_else(|| ValidationError::missing_direction(self))
        };

        let pending: Vec<usize> = (0..requests.len()).collect();

        let plan = match self {
            Self::Fcfs => arrival::fcfs(requests),
            Self::Lifo => arrival::lifo(requests),
            Self::Random => arrival::random(requests, rng),
            Self::Sstf => greedy::sstf(head, requests),
            Self::Scan => sweep::scan(&ctx.disk, head, direction()?, requests, &pending).plan,
            Self::CScan => sweep::c_scan(&ctx.disk, head, direction()?, requests, &pending).plan,
            Self::Look => sweep::look(head, direction()?, requests, &pending).plan,
            Self::CLook => sweep::c_look(head, direction()?, requests, &pending).plan,
            Self::NStepScan => {
                batch::n_step_scan(&ctx.disk, direction()?, requests, ctx.batch_size)
            }
            Self::FScan => batch::f_scan(&ctx.disk, direction()?, requests),
        };

        Ok(plan)
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PolicyKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| {
            ValidationError::new(
                ValidationErrorKind::UnknownPolicy,
                format!("Unknown policy '{s}'"),
            )
        })
    }
}

/// State a policy reads while ordering requests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolicyContext {
    /// Disk geometry and starting head position.
    pub disk: DiskModel,
    /// Initial head direction.
    pub direction: Option<Direction>,
    /// N-step SCAN batch size (at least 1).
    pub batch_size: usize,
}

impl PolicyContext {
    /// Creates a context with no direction and the default batch size.
    pub fn new(disk: DiskModel) -> Self {
        Self {
            disk,
            direction: None,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    /// Sets the initial direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Sets the N-step batch size.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const REQUESTS: [Track; 7] = [82, 170, 43, 140, 24, 16, 190];

    fn ctx(direction: Option<Direction>) -> PolicyContext {
        PolicyContext {
            disk: DiskModel::new(200, 50).unwrap(),
            direction,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    fn sorted(mut v: Vec<usize>) -> Vec<usize> {
        v.sort_unstable();
        v
    }

    #[test]
    fn test_names_round_trip() {
        for p in PolicyKind::ALL {
            assert_eq!(PolicyKind::from_name(p.name()), Some(p));
            assert_eq!(p.to_string().parse::<PolicyKind>().unwrap(), p);
        }
    }

    #[test]
    fn test_name_aliases() {
        assert_eq!(PolicyKind::from_name("cscan"), Some(PolicyKind::CScan));
        assert_eq!(PolicyKind::from_name("C_LOOK"), Some(PolicyKind::CLook));
        assert_eq!(PolicyKind::from_name("random"), Some(PolicyKind::Random));
        assert_eq!(PolicyKind::from_name("N-Step SCAN"), Some(PolicyKind::NStepScan));
        assert_eq!(PolicyKind::from_name("fscan"), Some(PolicyKind::FScan));
        assert_eq!(PolicyKind::from_name("bogus"), None);
    }

    #[test]
    fn test_precedence_matches_declaration() {
        for (i, p) in PolicyKind::ALL.iter().enumerate() {
            assert_eq!(p.precedence(), i);
        }
        assert!(PolicyKind::Fcfs < PolicyKind::FScan);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&PolicyKind::CScan).unwrap();
        assert_eq!(json, "\"C-SCAN\"");
        let p: PolicyKind = serde_json::from_str("\"N-STEP-SCAN\"").unwrap();
        assert_eq!(p, PolicyKind::NStepScan);
    }

    #[test]
    fn test_requires_direction() {
        let needs: Vec<PolicyKind> = PolicyKind::ALL
            .into_iter()
            .filter(|p| p.requires_direction())
            .collect();
        assert_eq!(
            needs,
            vec![
                PolicyKind::Scan,
                PolicyKind::CScan,
                PolicyKind::Look,
                PolicyKind::CLook,
                PolicyKind::NStepScan,
                PolicyKind::FScan
            ]
        );
    }

    #[test]
    fn test_plan_without_direction_fails() {
        let mut rng = StdRng::seed_from_u64(1);
        for p in PolicyKind::ALL {
            let result = p.plan(&ctx(None), &REQUESTS, &mut rng);
            if p.requires_direction() {
                let err = result.unwrap_err();
                assert_eq!(err.kind, ValidationErrorKind::MissingDirection);
            } else {
                assert!(result.is_ok());
            }
        }
    }

    #[test]
    fn test_every_plan_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        for direction in [Direction::Increasing, Direction::Decreasing] {
            for p in PolicyKind::ALL {
                let plan = p.plan(&ctx(Some(direction)), &REQUESTS, &mut rng).unwrap();
                assert_eq!(
                    sorted(plan.service_order()),
                    (0..REQUESTS.len()).collect::<Vec<_>>(),
                    "{p} {direction}"
                );
            }
        }
    }

    #[test]
    fn test_empty_queue_plans_nothing() {
        let mut rng = StdRng::seed_from_u64(0);
        for p in PolicyKind::ALL {
            let plan = p
                .plan(&ctx(Some(Direction::Increasing)), &[], &mut rng)
                .unwrap();
            assert!(plan.stops().is_empty(), "{p}");
        }
    }
}
