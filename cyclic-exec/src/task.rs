/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Core task data structures for the cyclic executive builder.
//!
//! Two types model the two sides of the scheduling pipeline:
//!
//! ```text
//! YAML / caller  ──►  Task  ──(CyclicScheduler)──►  Job { task, release }  ──►  dispatch table
//!                     ↑ input                        ↑ output entry
//!                     immutable, Copy                 one periodic instance
//! ```
//!
//! # Ownership model
//! `Task` is a small `Copy` value.  The scheduler takes a borrowed slice,
//! sorts a private copy by period and never mutates the caller's tasks.  The
//! position of a task in that sorted copy is its **job index**, the only
//! identity the schedule uses.

use serde::{Deserialize, Serialize};

/// Type of time instants and durations.
///
/// Units are left to the caller (ticks, µs, ms); the algorithm only needs
/// every value to be an integral multiple of one base interval.
pub type Time = u64;

// ── Task ──────────────────────────────────────────────────────────────────────

/// An independent, non-phased periodic task.
///
/// `deadline` is relative to each release.  `None` means an implicit deadline
/// equal to the period; read it through [`Task::deadline`], never directly.
///
/// `execution_time <= period` is expected but not enforced here.  A task that
/// violates it is rejected later by the feasibility check or by placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Task {
    /// Task period.
    pub period: Time,

    /// Worst-case execution time of one job.
    pub execution_time: Time,

    /// Relative deadline, defaults to `period` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<Time>,
}

impl Task {
    /// Constructs a task with an implicit deadline (equal to `period`).
    pub fn new(period: Time, execution_time: Time) -> Self {
        Self {
            period,
            execution_time,
            deadline: None,
        }
    }

    /// Returns the task with an explicit relative deadline.
    pub fn with_deadline(self, deadline: Time) -> Self {
        Self {
            deadline: Some(deadline),
            ..self
        }
    }

    pub fn period(&self) -> Time {
        self.period
    }

    pub fn execution_time(&self) -> Time {
        self.execution_time
    }

    /// Relative deadline, falling back to the period when unset.
    pub fn deadline(&self) -> Time {
        self.deadline.unwrap_or(self.period)
    }

    /// Instant of the `n`-th release (0-indexed): `period * n`.
    pub fn release_time(&self, n: u64) -> Time {
        self.period * n
    }

    /// CPU utilisation fraction: `execution_time / period`.
    ///
    /// Returns `0.0` when `period` is zero to avoid division by zero.  Only
    /// used for logging; the feasibility test works on exact integers.
    pub fn utilization(&self) -> f64 {
        if self.period == 0 {
            0.0
        } else {
            self.execution_time as f64 / self.period as f64
        }
    }
}

// ── Job ───────────────────────────────────────────────────────────────────────

/// One periodic instance of a task inside the hyperperiod.
///
/// `task` is the job index (position in the period-sorted task list) and
/// `release` is the 0-based release number, so `Job { task: 0, release: 2 }`
/// is the classical `J_{1,3}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Job {
    pub task: usize,
    pub release: u64,
}

impl std::fmt::Display for Job {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "J{},{}", self.task + 1, self.release + 1)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
