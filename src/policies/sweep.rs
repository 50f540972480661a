//! Sweep policies: SCAN, C-SCAN, LOOK and C-LOOK.
//!
//! All four start by servicing every pending request on the "ahead" side
//! of the head in travel order. Requests equal to the head are ahead in
//! both directions. They differ in what happens once the ahead side is
//! exhausted:
//!
//! | Policy | Turnaround | Far side serviced |
//! |--------|-----------|-------------------|
//! | SCAN | travel to the disk edge, reverse | nearest first |
//! | LOOK | reverse at the last request | nearest first |
//! | C-SCAN | travel to the edge, jump to the opposite edge | farthest first |
//! | C-LOOK | jump straight to the farthest request | farthest first |
//!
//! The edge and wrap stops are virtual: nothing is serviced there unless
//! a request lies on that track, but the travel is part of the trace.
//! SCAN and C-SCAN always run on to the edge once anything is pending,
//! even when the far side is empty; only an empty sweep leaves the arm
//! where it is.

use std::cmp::Reverse;

use crate::models::{DiskModel, Direction, SeekPlan, Track};

/// Result of one sweep over a set of pending requests.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Sweep {
    /// Stops made during the sweep.
    pub plan: SeekPlan,
    /// Track the arm ends on.
    pub end: Track,
    /// Direction of travel at the end of the sweep.
    pub direction: Direction,
}

/// Splits `pending` into the ahead side (travel order) and the far side
/// (nearest to the head first).
fn split(
    head: Track,
    direction: Direction,
    requests: &[Track],
    pending: &[usize],
) -> (Vec<usize>, Vec<usize>) {
    let (mut ahead, mut behind): (Vec<usize>, Vec<usize>) =
        pending.iter().partition(|&&i| match direction {
            Direction::Increasing => requests[i] >= head,
            Direction::Decreasing => requests[i] <= head,
        });

    match direction {
        Direction::Increasing => {
            ahead.sort_by_key(|&i| (requests[i], i));
            behind.sort_by_key(|&i| (Reverse(requests[i]), i));
        }
        Direction::Decreasing => {
            ahead.sort_by_key(|&i| (Reverse(requests[i]), i));
            behind.sort_by_key(|&i| (requests[i], i));
        }
    }

    (ahead, behind)
}

impl Sweep {
    fn idle(head: Track, direction: Direction) -> Self {
        Self {
            plan: SeekPlan::new(),
            end: head,
            direction,
        }
    }
}

fn last_track(requests: &[Track], order: &[usize], fallback: Track) -> Track {
    order.last().map(|&i| requests[i]).unwrap_or(fallback)
}

/// SCAN (elevator).
///
/// The arm always runs on to the edge in its direction of travel before
/// turning, whether or not requests remain behind it.
pub(super) fn scan(
    disk: &DiskModel,
    head: Track,
    direction: Direction,
    requests: &[Track],
    pending: &[usize],
) -> Sweep {
    if pending.is_empty() {
        return Sweep::idle(head, direction);
    }

    let (ahead, behind) = split(head, direction, requests, pending);
    let mut plan = SeekPlan::from_order(ahead.iter().copied());

    let edge = disk.boundary(direction);
    if last_track(requests, &ahead, head) != edge {
        plan.sweep(edge);
    }
    behind.iter().for_each(|&i| plan.service(i));

    Sweep {
        plan,
        end: last_track(requests, &behind, edge),
        direction: direction.reversed(),
    }
}

/// C-SCAN (circular SCAN).
///
/// After reaching the edge the arm always returns to the opposite edge and
/// resumes in the original direction.
pub(super) fn c_scan(
    disk: &DiskModel,
    head: Track,
    direction: Direction,
    requests: &[Track],
    pending: &[usize],
) -> Sweep {
    if pending.is_empty() {
        return Sweep::idle(head, direction);
    }

    let (ahead, mut behind) = split(head, direction, requests, pending);
    let mut plan = SeekPlan::from_order(ahead.iter().copied());

    let edge = disk.boundary(direction);
    let opposite = disk.boundary(direction.reversed());
    if last_track(requests, &ahead, head) != edge {
        plan.sweep(edge);
    }

    // Continue in the original direction from the opposite edge.
    behind.reverse();
    if behind.first().map(|&i| requests[i]) != Some(opposite) {
        plan.sweep(opposite);
    }
    behind.iter().for_each(|&i| plan.service(i));

    Sweep {
        plan,
        end: last_track(requests, &behind, opposite),
        direction,
    }
}

/// LOOK.
pub(super) fn look(
    head: Track,
    direction: Direction,
    requests: &[Track],
    pending: &[usize],
) -> Sweep {
    let (ahead, behind) = split(head, direction, requests, pending);
    let reversed = !behind.is_empty();
    let order: Vec<usize> = ahead.into_iter().chain(behind).collect();

    Sweep {
        end: last_track(requests, &order, head),
        plan: SeekPlan::from_order(order),
        direction: if reversed {
            direction.reversed()
        } else {
            direction
        },
    }
}

/// C-LOOK (circular LOOK).
pub(super) fn c_look(
    head: Track,
    direction: Direction,
    requests: &[Track],
    pending: &[usize],
) -> Sweep {
    let (ahead, behind) = split(head, direction, requests, pending);
    let order: Vec<usize> = ahead.into_iter().chain(behind.into_iter().rev()).collect();

    Sweep {
        end: last_track(requests, &order, head),
        plan: SeekPlan::from_order(order),
        direction,
    }
}
