//! Disk scheduling domain models.
//!
//! Leaf data types shared by every policy and the simulator. All of them
//! are created per simulation call and discarded afterwards.
//!
//! # Domain Mappings
//!
//! | u-diskseek | Disk hardware | Elevator analogy |
//! |------------|---------------|------------------|
//! | Track | Cylinder | Floor |
//! | DiskModel | Platter + arm | Building + car |
//! | RequestQueue | I/O queue | Hall calls |
//! | SeekTrace | Arm movement log | Car travel log |

mod disk;
mod queue;
mod trace;

pub use disk::{DiskModel, Direction, Track};
pub use queue::RequestQueue;
pub use trace::{SeekPlan, SeekStep, SeekTrace, Stop};
