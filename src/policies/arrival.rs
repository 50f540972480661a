//! Arrival-order policies: FCFS, LIFO and random (RSS).

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{SeekPlan, Track};

/// First Come First Served: exact enqueue order.
pub(super) fn fcfs(requests: &[Track]) -> SeekPlan {
    SeekPlan::from_order(0..requests.len())
}

/// Last In First Out: the queue treated as a stack.
pub(super) fn lifo(requests: &[Track]) -> SeekPlan {
    SeekPlan::from_order((0..requests.len()).rev())
}

/// Random Scheduling: a uniform shuffle drawn from `rng`.
pub(super) fn random<R: Rng + ?Sized>(requests: &[Track], rng: &mut R) -> SeekPlan {
    let mut order: Vec<usize> = (0..requests.len()).collect();
    order.shuffle(rng);
    SeekPlan::from_order(order)
}
