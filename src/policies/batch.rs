//! Batched sweep policies: N-step SCAN and F-SCAN.
//!
//! Both freeze the request set into batches by arrival order and run SCAN
//! over each batch in turn, carrying the head position and travel
//! direction from one batch into the next. The whole queue is known up
//! front, so the batches are fixed slices of the input.

use super::sweep;
use crate::models::{DiskModel, Direction, SeekPlan, Track};

/// N-step SCAN over consecutive batches of `batch_size` requests.
pub(super) fn n_step_scan(
    disk: &DiskModel,
    direction: Direction,
    requests: &[Track],
    batch_size: usize,
) -> SeekPlan {
    let indices: Vec<usize> = (0..requests.len()).collect();
    scan_batches(disk, direction, requests, indices.chunks(batch_size.max(1)))
}

/// F-SCAN: the older half (first `ceil(n/2)` arrivals) is fully serviced
/// before the newer half is considered.
pub(super) fn f_scan(disk: &DiskModel, direction: Direction, requests: &[Track]) -> SeekPlan {
    let indices: Vec<usize> = (0..requests.len()).collect();
    let (old, new) = indices.split_at(requests.len().div_ceil(2));
    scan_batches(disk, direction, requests, [old, new])
}

fn scan_batches<'a>(
    disk: &DiskModel,
    direction: Direction,
    requests: &[Track],
    batches: impl IntoIterator<Item = &'a [usize]>,
) -> SeekPlan {
    let mut plan = SeekPlan::new();
    let mut head = disk.head();
    let mut direction = direction;

    for batch in batches.into_iter().filter(|b| !b.is_empty()) {
        let sweep = sweep::scan(disk, head, direction, requests, batch);
        plan.extend(sweep.plan);
        head = sweep.end;
        direction = sweep.direction;
    }

    plan
}
