//! Disk-arm scheduling simulator.
//!
//! Given a disk's track range, a head position and a queue of pending
//! track requests, computes the order in which requests are serviced
//! under a chosen policy, the resulting head-movement trace and aggregate
//! metrics. Every supported policy can also be run against the same input
//! and ranked.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `DiskModel`, `Direction`, `RequestQueue`,
//!   `SeekPlan`, `SeekTrace`
//! - **`validation`**: Input checks (disk size, head, requests, policy, direction)
//! - **`policies`**: The ten ordering policies behind `PolicyKind`
//! - **`simulator`**: Seek simulation and `SeekMetrics`
//! - **`comparison`**: Cross-policy evaluation and ranking
//! - **`api`**: Request/response contract for the presentation layer
//! - **`error`**: `SeekError`
//!
//! # Architecture
//!
//! The engine is stateless: each simulate/compare call is an independent,
//! side-effect-free computation. The only randomness is the RSS policy,
//! which draws from a caller-seeded generator.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 11
//! - Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 11
//! - Worthington et al. (1994), "Scheduling Algorithms for Modern Disk Drives"

pub mod api;
pub mod comparison;
pub mod error;
pub mod models;
pub mod policies;
pub mod simulator;
pub mod validation;

pub use error::{SeekError, SeekResult};
