//! Shortest Seek Time First.

use crate::models::{SeekPlan, Track};

/// Greedily services the nearest pending request.
///
/// Ties on distance go to the lower track, then to the earlier arrival.
/// The working set is local to the call.
///
/// # Complexity
/// O(n²) for n requests.
pub(super) fn sstf(head: Track, requests: &[Track]) -> SeekPlan {
    let mut remaining: Vec<usize> = (0..requests.len()).collect();
    let mut position = head;
    let mut plan = SeekPlan::new();

    loop {
        let nearest = remaining
            .iter()
            .enumerate()
            .min_by_key(|&(_, &i)| (requests[i].abs_diff(position), requests[i], i))
            .map(|(slot, &i)| (slot, i));
        let Some((slot, next)) = nearest else {
            break;
        };
        remaining.remove(slot);
        position = requests[next];
        plan.service(next);
    }

    plan
}
