// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Subcommand implementations.
//!
//! Each command writes its normal output to the writer it is given and
//! returns the process exit code; errors are left for `main` to report.

use crate::cli::OutputFormat;
use crate::config::{CarouselConfig, Preset};
use crate::controller::CarouselController;
use crate::error::CarouselError;
use crate::host::{CarouselHost, TrackMotion};
use crate::output::{print_warning, OutputWriter, RunSummary};
use crate::scenario::{Scenario, ScenarioError};
use crate::time::{Clock, ClockHandle};
use crate::timer::TokioTimer;
use parking_lot::Mutex;
use serde::Serialize;
use slidekit_trace::TraceLog;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Process exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    /// An expectation failed, or a command could not complete
    pub const FAILURE: i32 = 1;
}

/// Errors reported by a subcommand
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{path}: {source}")]
    Scenario {
        path: String,
        #[source]
        source: ScenarioError,
    },

    #[error("Failed to open trace file '{path}': {source}")]
    Trace {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] CarouselError),

    #[error("Failed to render preset: {0}")]
    Toml(#[from] toml::ser::Error),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Live mode requires a tokio runtime")]
    NoRuntime,
}

fn load(path: &Path) -> Result<Scenario, CommandError> {
    Scenario::load(path).map_err(|source| CommandError::Scenario {
        path: path.display().to_string(),
        source,
    })
}

/// `slidekit run`: replay every file, then print a summary.
///
/// All files are loaded before any is run, so a bad file fails the command
/// without partial output.
pub fn run<W: Write>(
    files: &[PathBuf],
    format: OutputFormat,
    trace_path: Option<&Path>,
    out: W,
) -> Result<i32, CommandError> {
    let scenarios = files
        .iter()
        .map(|path| load(path).map(|s| (path, s)))
        .collect::<Result<Vec<_>, _>>()?;

    let trace = trace_path
        .map(|path| {
            TraceLog::with_file(path).map_err(|source| CommandError::Trace {
                path: path.display().to_string(),
                source,
            })
        })
        .transpose()?;

    let mut writer = OutputWriter::new(out, format);
    let mut summary = RunSummary::default();
    for (path, scenario) in scenarios {
        let report = scenario
            .run(trace.clone())
            .map_err(|source| CommandError::Scenario {
                path: path.display().to_string(),
                source,
            })?;
        writer.write_report(&report)?;
        summary.record(&report);
    }
    writer.write_summary(&summary)?;

    Ok(if summary.all_passed() {
        exit_codes::SUCCESS
    } else {
        exit_codes::FAILURE
    })
}

/// `slidekit validate`: load every file and report what it contains
pub fn validate<W: Write>(files: &[PathBuf], mut out: W) -> Result<i32, CommandError> {
    for path in files {
        let scenario = load(path)?;
        let expectations = scenario
            .steps()
            .iter()
            .filter(|s| s.is_expectation())
            .count();
        if expectations == 0 {
            print_warning(format_args!("{}: no expectations", path.display()));
        }
        writeln!(
            out,
            "ok {}: {} ({} steps, {} expectations)",
            path.display(),
            scenario.name(),
            scenario.steps().len(),
            expectations
        )?;
    }
    Ok(exit_codes::SUCCESS)
}

#[derive(Serialize)]
struct PresetDoc {
    preset: Preset,
    carousel: CarouselConfig,
}

/// `slidekit preset`: print a preset as a scenario header
pub fn preset<W: Write>(preset: Preset, slides: usize, mut out: W) -> Result<i32, CommandError> {
    let carousel = preset.config(slides);
    carousel.validate()?;
    let doc = toml::to_string(&PresetDoc { preset, carousel })?;
    write!(out, "{}", doc)?;
    Ok(exit_codes::SUCCESS)
}

/// Host that prints every call as a timestamped line
struct PrintHost<W> {
    clock: ClockHandle,
    out: Mutex<W>,
}

impl<W: Write + Send> PrintHost<W> {
    fn line(&self, msg: impl std::fmt::Display) {
        let at = self.clock.now_millis();
        let _ = writeln!(self.out.lock(), "{:>7} ms  {}", at, msg);
    }
}

impl<W: Write + Send> CarouselHost for PrintHost<W> {
    fn render_index(&self, index: usize) {
        self.line(format_args!("render {}", index));
    }

    fn move_track(&self, slot: usize, motion: TrackMotion) {
        let how = match motion {
            TrackMotion::Animated => "animated",
            TrackMotion::Instant => "instant",
        };
        self.line(format_args!("track slot {} ({})", slot, how));
    }
}

/// `slidekit live`: run a preset in real time, then dispose it
pub async fn live<W: Write + Send + 'static>(
    preset: Preset,
    slides: usize,
    duration_ms: u64,
    out: W,
) -> Result<i32, CommandError> {
    let timer = TokioTimer::current().ok_or(CommandError::NoRuntime)?;
    let clock = ClockHandle::system();
    let host = Arc::new(PrintHost {
        clock: clock.clone(),
        out: Mutex::new(out),
    });

    let ctl = CarouselController::builder(preset.config(slides), host.clone(), Arc::new(timer))
        .name(preset.name())
        .clock(clock)
        .build()?;

    host.line(format_args!(
        "{} with {} slides for {} ms",
        preset, slides, duration_ms
    ));
    ctl.start();
    tokio::time::sleep(Duration::from_millis(duration_ms)).await;
    ctl.dispose();
    host.line(format_args!("disposed at index {}", ctl.current_index()));

    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
