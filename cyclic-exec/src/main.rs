/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{error, info, warn};

use cyclic_exec::config::{FrameTime, SchedulerConfig, TaskSetFile};
use cyclic_exec::scheduler::CyclicScheduler;
use cyclic_exec::task::Task;

// ── CLI argument definition ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One `Frame i: J…` line per frame.
    Text,
    /// The full schedule result as YAML.
    Yaml,
}

/// Build a cyclic executive schedule for a set of periodic tasks.
///
/// Example:
///   cyclic-exec --tasks tasks.yaml --frame-time 4 --format yaml
#[derive(Debug, Parser)]
#[command(
    name = "cyclic-exec",
    about = "Static cyclic executive builder for periodic real-time tasks",
    long_about = None,
)]
struct Cli {
    /// Path to the YAML task-set file.
    #[arg(short = 't', long = "tasks")]
    tasks: Option<PathBuf>,

    /// Pin the frame size (overrides `frame_time` in the file).
    #[arg(short = 'f', long = "frame-time")]
    frame_time: Option<u64>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

/// Task set scheduled when no file is given.
fn demo_tasks() -> Vec<Task> {
    vec![Task::new(10, 4), Task::new(20, 6), Task::new(60, 5)]
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Level is controlled by the RUST_LOG env-var (e.g. RUST_LOG=debug).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    info!(
        tasks      = ?cli.tasks,
        frame_time = ?cli.frame_time,
        format     = ?cli.format,
        "Configuration"
    );

    if let Err(e) = run(&cli) {
        error!("{:#}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let (tasks, mut config) = match &cli.tasks {
        Some(path) => TaskSetFile::load_from_file(path)?.into_parts(),
        None => {
            warn!("No task set file provided, scheduling the built-in demo task set");
            (demo_tasks(), SchedulerConfig::default())
        }
    };

    if let Some(f) = cli.frame_time {
        config = config.with_frame_time(FrameTime::Fixed(f));
    }

    let result = CyclicScheduler::new(config)
        .schedule(&tasks)
        .context("Scheduling failed")?;

    match cli.format {
        OutputFormat::Text => println!("{result}"),
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(&result).context("Failed to serialise schedule")?;
            print!("{yaml}");
        }
    }

    Ok(())
}
