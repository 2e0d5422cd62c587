/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Frame-size selection for the cyclic executive.
//!
//! A frame size `f` is admissible for a task set when all three classical
//! constraints hold:
//!
//! 1. **Whole jobs** – `f >= max(e_i)`.  A job is never split across frames.
//! 2. **Divisibility** – `f` divides some period `p_i`.
//! 3. **Deadline alignment** – for every task, `2f - gcd(p_i, f) <= d_i`.
//!    This covers the worst-case offset between a release and the next frame
//!    boundary: a job released just after a frame starts still sees one whole
//!    frame before its deadline.
//!
//! The result is a `BTreeSet`, so iteration (and therefore minimum selection)
//! never depends on hashing.

pub mod divisors;

use std::collections::BTreeSet;

use tracing::debug;

use crate::hyperperiod::math::gcd;
use crate::task::{Task, Time};
use divisors::divisors;

/// Return `true` if frame size `frame` satisfies the deadline-alignment bound
/// for `task`: `2f - gcd(p, f) <= d`.
///
/// Evaluated in `u128` so `2f` cannot overflow.
pub fn meets_deadline_bound(task: &Task, frame: Time) -> bool {
    let lhs = (2 * u128::from(frame)).saturating_sub(u128::from(gcd(task.period, frame)));
    lhs <= u128::from(task.deadline())
}

/// Compute the set of valid frame sizes for `tasks`.
///
/// An empty set means no uniform frame size works for this task set.  An
/// empty task slice also yields an empty set.
///
/// # Example
/// ```rust
/// use cyclic_exec::frame::suitable_frame_times;
/// use cyclic_exec::task::Task;
///
/// let tasks = [Task::new(5, 1), Task::new(10, 2), Task::new(15, 3), Task::new(30, 3)];
/// let frames: Vec<u64> = suitable_frame_times(&tasks).into_iter().collect();
/// assert_eq!(frames, vec![3, 5]);
/// ```
pub fn suitable_frame_times(tasks: &[Task]) -> BTreeSet<Time> {
    let Some(max_exec) = tasks.iter().map(|t| t.execution_time).max() else {
        return BTreeSet::new();
    };

    let pool: BTreeSet<Time> = tasks
        .iter()
        .flat_map(|t| divisors(t.period))
        .filter(|&f| f >= max_exec)
        .collect();

    debug!(max_exec, pool = ?pool, "frame candidates before deadline bound");

    pool.into_iter()
        .filter(|&f| tasks.iter().all(|t| meets_deadline_bound(t, f)))
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
