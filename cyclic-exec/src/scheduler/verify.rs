/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Post-schedule invariant audit.
//!
//! [`audit`] re-derives the structural invariants of a finished
//! [`ScheduleResult`] from its own tables:
//!
//! * no frame carries more execution time than `frame_time`;
//! * every job index appears exactly `hyperperiod / period` times;
//! * no job is dispatched in a frame that starts before its release;
//! * recorded slack equals `frame_time - load`, per frame and in total.
//!
//! The scheduler runs it after every successful placement and logs each
//! [`Violation`] as a warning.  It is also useful on tables that were edited
//! or deserialised outside the scheduler.

use crate::scheduler::ScheduleResult;
use crate::task::Time;

/// One broken invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// A frame refers to a job index with no task behind it.
    UnknownJob { frame: usize, job: usize },

    FrameOverloaded {
        frame: usize,
        load: Time,
        frame_time: Time,
    },

    ReleaseCountMismatch {
        job: usize,
        expected: u64,
        found: u64,
    },

    /// Frame `frame` starts before release `release` of job `job`.
    PlacedBeforeRelease {
        job: usize,
        release: u64,
        frame: usize,
    },

    SlackMismatch {
        frame: usize,
        recorded: Time,
        actual: Time,
    },

    TotalSlackMismatch { recorded: Time, actual: Time },
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::UnknownJob { frame, job } => {
                write!(f, "frame {frame} refers to unknown job {job}")
            }
            Violation::FrameOverloaded {
                frame,
                load,
                frame_time,
            } => write!(f, "frame {frame} carries {load} > frame time {frame_time}"),
            Violation::ReleaseCountMismatch {
                job,
                expected,
                found,
            } => write!(f, "job {job} appears {found} times, expected {expected}"),
            Violation::PlacedBeforeRelease {
                job,
                release,
                frame,
            } => write!(f, "release {release} of job {job} dispatched early in frame {frame}"),
            Violation::SlackMismatch {
                frame,
                recorded,
                actual,
            } => write!(f, "frame {frame} records slack {recorded}, actual {actual}"),
            Violation::TotalSlackMismatch { recorded, actual } => {
                write!(f, "total slack recorded as {recorded}, actual {actual}")
            }
        }
    }
}

/// Check `result` against the schedule invariants.
///
/// Returns every violation found; an empty vector means the table is sound.
pub fn audit(result: &ScheduleResult) -> Vec<Violation> {
    let mut out = Vec::new();
    let tasks = &result.sorted_tasks;
    let mut counts = vec![0u64; tasks.len()];
    let mut actual_total: Time = 0;

    for (frame, jobs) in result.frames.iter().enumerate() {
        let mut load: Time = 0;
        for &job in jobs {
            match tasks.get(job) {
                Some(task) => {
                    load = load.saturating_add(task.execution_time);
                    counts[job] += 1;
                }
                None => out.push(Violation::UnknownJob { frame, job }),
            }
        }

        if load > result.frame_time {
            out.push(Violation::FrameOverloaded {
                frame,
                load,
                frame_time: result.frame_time,
            });
        }

        let actual = result.frame_time.saturating_sub(load);
        actual_total = actual_total.saturating_add(actual);
        if let Some(&recorded) = result.slack_times.get(frame) {
            if recorded != actual {
                out.push(Violation::SlackMismatch {
                    frame,
                    recorded,
                    actual,
                });
            }
        }
    }

    for (job, task) in tasks.iter().enumerate() {
        let expected = if task.period == 0 {
            0
        } else {
            result.hyperperiod / task.period
        };
        if counts[job] != expected {
            out.push(Violation::ReleaseCountMismatch {
                job,
                expected,
                found: counts[job],
            });
        }
    }

    for (frame, jobs) in result.jobs.iter().enumerate() {
        let frame_start = (frame as u64).saturating_mul(result.frame_time);
        for job in jobs {
            if let Some(task) = tasks.get(job.task) {
                if frame_start < task.period.saturating_mul(job.release) {
                    out.push(Violation::PlacedBeforeRelease {
                        job: job.task,
                        release: job.release,
                        frame,
                    });
                }
            }
        }
    }

    if result.total_slack != actual_total {
        out.push(Violation::TotalSlackMismatch {
            recorded: result.total_slack,
            actual: actual_total,
        });
    }

    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────
