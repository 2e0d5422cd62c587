/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Scheduler configuration and task-set file loading.
//!
//! The expected YAML structure is:
//! ```yaml
//! frame_time: 4            # optional – omitted means the smallest valid frame
//! hyperperiod_limit: 3600  # optional
//! table_limit: 10000       # optional – max frames and max jobs per table
//! tasks:
//!   - { period: 6,  execution_time: 2 }
//!   - { period: 12, execution_time: 2, deadline: 4 }
//!   - { period: 36, execution_time: 4 }
//! ```

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::{debug, info};

use crate::hyperperiod::DEFAULT_HYPERPERIOD_LIMIT;
use crate::task::{Task, Time};

/// Default cap on both the frame count and the job count of one dispatch
/// table.
pub const DEFAULT_TABLE_LIMIT: u64 = 1_000_000;

// ── FrameTime ─────────────────────────────────────────────────────────────────

/// How the scheduler picks the frame size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameTime {
    /// Smallest valid frame size: finest dispatch granularity, most frames.
    #[default]
    Auto,

    /// Caller-pinned frame size.  Must be a member of the valid candidate set
    /// or scheduling fails with `InvalidFrameTime`.
    Fixed(Time),
}

impl From<Option<Time>> for FrameTime {
    fn from(v: Option<Time>) -> Self {
        match v {
            Some(f) => FrameTime::Fixed(f),
            None => FrameTime::Auto,
        }
    }
}

// ── SchedulerConfig ───────────────────────────────────────────────────────────

/// Options for one [`CyclicScheduler`](crate::scheduler::CyclicScheduler).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulerConfig {
    pub frame_time: FrameTime,

    /// Upper bound on the hyperperiod.
    pub hyperperiod_limit: Time,

    /// Upper bound on `hyperperiod / frame_time` and on the number of jobs
    /// released per hyperperiod, checked before the table is allocated.
    pub table_limit: u64,
}

impl SchedulerConfig {
    pub fn with_frame_time(self, frame_time: FrameTime) -> Self {
        Self { frame_time, ..self }
    }

    pub fn with_hyperperiod_limit(self, hyperperiod_limit: Time) -> Self {
        Self {
            hyperperiod_limit,
            ..self
        }
    }

    pub fn with_table_limit(self, table_limit: u64) -> Self {
        Self {
            table_limit,
            ..self
        }
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            frame_time: FrameTime::Auto,
            hyperperiod_limit: DEFAULT_HYPERPERIOD_LIMIT,
            table_limit: DEFAULT_TABLE_LIMIT,
        }
    }
}

// ── TaskSetFile ───────────────────────────────────────────────────────────────

/// A task set plus optional scheduler options, as stored in YAML.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskSetFile {
    #[serde(default)]
    pub frame_time: Option<Time>,

    #[serde(default)]
    pub hyperperiod_limit: Option<Time>,

    #[serde(default)]
    pub table_limit: Option<u64>,

    pub tasks: Vec<Task>,
}

impl TaskSetFile {
    /// Parses `path` as a task-set YAML document.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened, the YAML is structurally
    /// invalid, or the task list is empty.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading task set from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot open task set file: {}", path.display()))?;

        Self::from_yaml_str(&content)
            .with_context(|| format!("Failed to load task set file: {}", path.display()))
    }

    /// Parses a task-set YAML document held in memory.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let file: TaskSetFile =
            serde_yaml::from_str(content).context("Failed to parse task set YAML")?;

        if file.tasks.is_empty() {
            bail!("task set contains no tasks");
        }

        for (i, t) in file.tasks.iter().enumerate() {
            debug!(
                index = i,
                period = t.period,
                execution_time = t.execution_time,
                deadline = t.deadline(),
                "  task"
            );
        }
        info!(
            task_count = file.tasks.len(),
            frame_time = ?file.frame_time,
            hyperperiod_limit = ?file.hyperperiod_limit,
            table_limit = ?file.table_limit,
            "Task set loaded"
        );

        Ok(file)
    }

    /// Scheduler options carried by the file, defaults filled in.
    pub fn config(&self) -> SchedulerConfig {
        let mut config = SchedulerConfig::default().with_frame_time(self.frame_time.into());
        if let Some(limit) = self.hyperperiod_limit {
            config = config.with_hyperperiod_limit(limit);
        }
        if let Some(limit) = self.table_limit {
            config = config.with_table_limit(limit);
        }
        config
    }

    pub fn into_parts(self) -> (Vec<Task>, SchedulerConfig) {
        let config = self.config();
        (self.tasks, config)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
