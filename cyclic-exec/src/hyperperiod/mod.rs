/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Hyperperiod calculation.
//!
//! The hyperperiod of a set of periodic tasks is the Least Common Multiple
//! (LCM) of all their periods.  It is the length of one full cycle of the
//! cyclic executive: the dispatch table repeats after it.
//!
//! Each failure case is a distinct [`HyperperiodError`] variant, so "no tasks",
//! "overflow" and "too large" are never conflated.

pub mod math;

use tracing::{debug, info, warn};

use crate::task::{Task, Time};
use math::lcm_of_slice;

// ── Constants ─────────────────────────────────────────────────────────────────

/// Default upper limit on the hyperperiod, in ticks.
///
/// Bounds the cycle length only.  The size of the dispatch table is capped
/// separately by `SchedulerConfig::table_limit`.  Callers that want a
/// different limit use [`HyperperiodCalculator::with_limit`].
pub const DEFAULT_HYPERPERIOD_LIMIT: Time = 1_000_000_000;

// ── Error type ────────────────────────────────────────────────────────────────

/// Errors that can occur during hyperperiod calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HyperperiodError {
    /// The task slice was empty (or all tasks had `period == 0`).
    NoValidPeriods,

    /// LCM calculation overflowed `u64`.
    ///
    /// Contains the two operands that caused the overflow.
    Overflow { a: u64, b: u64 },

    /// The calculated hyperperiod exceeded the configured limit.
    TooLarge { value: Time, limit: Time },
}

impl std::fmt::Display for HyperperiodError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HyperperiodError::NoValidPeriods => {
                write!(f, "no tasks with a valid (non-zero) period")
            }
            HyperperiodError::Overflow { a, b } => {
                write!(f, "LCM overflow computing lcm({a}, {b})")
            }
            HyperperiodError::TooLarge { value, limit } => {
                write!(f, "hyperperiod {value} exceeds limit {limit}")
            }
        }
    }
}

impl std::error::Error for HyperperiodError {}

// ── HyperperiodInfo ───────────────────────────────────────────────────────────

/// Calculated hyperperiod for one task set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HyperperiodInfo {
    /// LCM of all task periods.
    pub hyperperiod: Time,
}

impl HyperperiodInfo {
    /// Number of releases of a task with `period` inside one hyperperiod.
    ///
    /// `0` for a zero period.
    pub fn releases_of(&self, period: Time) -> u64 {
        self.hyperperiod.checked_div(period).unwrap_or(0)
    }

    /// Total number of jobs `tasks` release inside one hyperperiod.
    pub fn job_count(&self, tasks: &[Task]) -> u64 {
        tasks
            .iter()
            .map(|t| self.releases_of(t.period))
            .fold(0, u64::saturating_add)
    }
}

// ── HyperperiodCalculator ─────────────────────────────────────────────────────

/// Computes the hyperperiod of a task set under a size limit.
///
/// # Example
/// ```rust
/// use cyclic_exec::hyperperiod::HyperperiodCalculator;
/// use cyclic_exec::task::Task;
///
/// let tasks = vec![Task::new(6, 2), Task::new(12, 2), Task::new(36, 4)];
/// let info = HyperperiodCalculator::new().calculate(&tasks).unwrap();
/// assert_eq!(info.hyperperiod, 36);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HyperperiodCalculator {
    /// A calculated value above this limit causes
    /// [`HyperperiodError::TooLarge`] to be returned.
    limit: Time,
}

impl HyperperiodCalculator {
    /// Create a calculator with [`DEFAULT_HYPERPERIOD_LIMIT`].
    pub fn new() -> Self {
        Self {
            limit: DEFAULT_HYPERPERIOD_LIMIT,
        }
    }

    /// Create a calculator with a custom hyperperiod limit.
    pub fn with_limit(limit: Time) -> Self {
        Self { limit }
    }

    /// Calculate the hyperperiod of `tasks`.
    ///
    /// Tasks with a zero period are ignored.
    ///
    /// # Errors
    /// * [`HyperperiodError::NoValidPeriods`] – no task had a non-zero period.
    /// * [`HyperperiodError::Overflow`] – LCM computation exceeded `u64`.
    /// * [`HyperperiodError::TooLarge`] – result exceeds the configured limit.
    pub fn calculate(&self, tasks: &[Task]) -> Result<HyperperiodInfo, HyperperiodError> {
        let matching: Vec<&Task> = tasks.iter().filter(|t| t.period > 0).collect();

        if matching.is_empty() {
            warn!("No tasks with valid periods found");
            return Err(HyperperiodError::NoValidPeriods);
        }

        // Sorted for deterministic output
        let unique_periods: Vec<Time> = {
            let mut v: Vec<Time> = matching.iter().map(|t| t.period).collect();
            v.sort_unstable();
            v.dedup();
            v
        };

        let hyperperiod = lcm_of_slice(&unique_periods)?;

        if hyperperiod > self.limit {
            warn!(
                hyperperiod,
                limit = self.limit,
                "Hyperperiod exceeds configured limit"
            );
            return Err(HyperperiodError::TooLarge {
                value: hyperperiod,
                limit: self.limit,
            });
        }

        info!(
            task_count = matching.len(),
            unique_count = unique_periods.len(),
            hyperperiod,
            "Calculated hyperperiod"
        );
        for p in &unique_periods {
            debug!(period = p, releases = hyperperiod / p, "  unique period");
        }

        Ok(HyperperiodInfo { hyperperiod })
    }
}

impl Default for HyperperiodCalculator {
    fn default() -> Self {
        Self::new()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
