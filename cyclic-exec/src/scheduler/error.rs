/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Structured error types for the cyclic executive scheduler.
//!
//! Two layers of failure are modelled:
//!
//! * [`InvalidTaskReason`] — why a single input task was rejected before the
//!   pipeline ran (carries the offending field).
//! * [`SchedulerError`] — top-level failure returned from
//!   [`CyclicScheduler::schedule()`](super::CyclicScheduler::schedule).
//!
//! The four model failures (`NoFeasibleFrameTime`, `InfeasibleSchedule`,
//! `InvalidFrameTime`, `UnschedulableJob`) are mutually exclusive and each is
//! terminal.  Every variant carries the values needed to react to it without
//! parsing the message, e.g. retrying with one of `candidates` after
//! `InvalidFrameTime`.

use thiserror::Error;

use crate::hyperperiod::HyperperiodError;
use crate::task::{Task, Time};

use super::feasibility::Utilization;

// ── Input validation ──────────────────────────────────────────────────────────

/// Detailed reason why a task was rejected during input validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidTaskReason {
    /// `period == 0`.
    ZeroPeriod,

    /// `execution_time == 0`.
    ZeroExecutionTime,

    /// An explicit deadline of `0`.
    ZeroDeadline,
}

impl std::fmt::Display for InvalidTaskReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidTaskReason::ZeroPeriod => write!(f, "period must be positive"),
            InvalidTaskReason::ZeroExecutionTime => {
                write!(f, "execution time must be positive")
            }
            InvalidTaskReason::ZeroDeadline => write!(f, "deadline must be positive"),
        }
    }
}

// ── Top-level scheduler errors ────────────────────────────────────────────────

/// Top-level error type returned by
/// [`CyclicScheduler::schedule()`](super::CyclicScheduler::schedule).
///
/// | Variant | Caller may retry with |
/// |---|---|
/// | `NoTasks` / `InvalidTask` | corrected input |
/// | `Hyperperiod` | smaller or more harmonic periods, or a higher limit |
/// | `TableTooLarge` | a larger frame time, or a higher table limit |
/// | `NoFeasibleFrameTime` | different periods / deadlines |
/// | `InfeasibleSchedule` | nothing, the task set overloads the CPU |
/// | `InvalidFrameTime` | one of `candidates`, or `FrameTime::Auto` |
/// | `UnschedulableJob` | another frame time from the candidate set |
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulerError {
    /// `schedule()` was called with an empty task list.
    #[error("no tasks provided — task list is empty")]
    NoTasks,

    /// A task failed input validation.
    ///
    /// `index` is the position in the caller's (unsorted) task slice.
    #[error("task #{index} ({task:?}) is invalid: {reason}")]
    InvalidTask {
        index: usize,
        task: Task,
        reason: InvalidTaskReason,
    },

    /// The hyperperiod could not be computed or exceeds the configured limit.
    #[error("hyperperiod: {0}")]
    Hyperperiod(#[from] HyperperiodError),

    /// No divisor of any task period satisfies the whole-job and
    /// deadline-alignment constraints for all tasks simultaneously.
    #[error("no suitable frame time exists for this task set")]
    NoFeasibleFrameTime,

    /// Total utilisation exceeds 1.
    ///
    /// `utilization` is the exact reduced sum `Σ e / p`.
    #[error("schedule infeasible: utilization {utilization} exceeds 1")]
    InfeasibleSchedule { utilization: Utilization },

    /// The caller-pinned frame time is not one of the valid candidates.
    #[error("frame time {requested} is not suitable for this task set (valid: {candidates:?})")]
    InvalidFrameTime {
        requested: Time,
        candidates: Vec<Time>,
    },

    /// First-fit placement found no frame with enough spare capacity inside
    /// the job's deadline window (or before the end of the hyperperiod).
    ///
    /// `job` is the index in the period-sorted task list, `release` the
    /// 0-based release number of the job that could not be seated.
    #[error("could not schedule release {release} of job {job} ({task:?}) before its deadline or the end of the hyperperiod")]
    UnschedulableJob { release: u64, job: usize, task: Task },

    /// The dispatch table would hold more than `limit` frames or jobs.
    #[error("dispatch table too large: {frames} frames and {jobs} jobs (limit {limit})")]
    TableTooLarge { frames: u64, jobs: u64, limit: u64 },
}

// ── Tests ─────────────────────────────────────────────────────────────────────
