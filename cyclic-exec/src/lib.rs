/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Cyclic executive builder – static frame-based schedules for independent,
//! non-phased periodic tasks on one processor.
//!
//! Module layout:
//!
//! ```text
//! lib.rs
//! ├── task/          – Task model and Job instances
//! ├── hyperperiod/   – LCM / GCD helpers, hyperperiod limit
//! ├── frame/         – divisor sets and frame-size candidates
//! ├── scheduler/     – feasibility, first-fit placement, audit
//! └── config/        – FrameTime policy, YAML task-set files
//! ```

pub mod config;
pub mod frame;
pub mod hyperperiod;
pub mod scheduler;
pub mod task;

pub use config::{FrameTime, SchedulerConfig};
pub use scheduler::{cyclic_executive, CyclicScheduler, ScheduleResult, SchedulerError};
pub use task::{Job, Task, Time};
