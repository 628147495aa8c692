// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scripted carousel scenarios.
//!
//! A scenario is a config (optionally based on a preset) plus an ordered list
//! of steps. Replaying it drives a controller on a [`ManualTimer`] and a
//! [`RecordingHost`], so the result is the same on every run.

use crate::config::{CarouselConfig, CarouselOverrides, Preset};
use crate::controller::{CarouselController, PauseReason, Phase};
use crate::error::CarouselError;
use crate::host::{HostEvent, RecordingHost};
use crate::time::{Clock, ClockHandle};
use crate::timer::ManualTimer;
use serde::{Deserialize, Serialize};
use slidekit_trace::TraceLog;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Slide count used for a preset when the scenario does not set one
pub const DEFAULT_PRESET_SLIDES: usize = 5;

/// Errors that can occur when loading a scenario
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("Failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] CarouselError),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// On-disk scenario format
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioFile {
    /// Defaults to the file stem when loaded from disk
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub preset: Option<Preset>,

    /// Settings layered over the preset (or over the defaults)
    #[serde(default)]
    pub carousel: CarouselOverrides,

    #[serde(default)]
    pub steps: Vec<ScenarioStep>,
}

/// One scripted action or expectation
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScenarioStep {
    Start,
    Next,
    Prev,
    GoTo { index: usize },
    Pause { reason: PauseReason },
    Resume { reason: PauseReason },
    GestureStart { x: f64 },
    GestureMove { x: f64 },
    GestureEnd,
    GestureCancel,
    Hover { on: bool },
    Visible { on: bool },
    Media { on: bool },
    Viewport { width: u32 },
    AdvanceTime { ms: u64 },
    Dispose,
    ExpectIndex { index: usize },
    ExpectPhase { phase: Phase },
    ExpectRenders { count: usize },
    ExpectPendingTimers { count: usize },
}

impl ScenarioStep {
    /// The `action` tag of this step
    pub fn action(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Next => "next",
            Self::Prev => "prev",
            Self::GoTo { .. } => "go_to",
            Self::Pause { .. } => "pause",
            Self::Resume { .. } => "resume",
            Self::GestureStart { .. } => "gesture_start",
            Self::GestureMove { .. } => "gesture_move",
            Self::GestureEnd => "gesture_end",
            Self::GestureCancel => "gesture_cancel",
            Self::Hover { .. } => "hover",
            Self::Visible { .. } => "visible",
            Self::Media { .. } => "media",
            Self::Viewport { .. } => "viewport",
            Self::AdvanceTime { .. } => "advance_time",
            Self::Dispose => "dispose",
            Self::ExpectIndex { .. } => "expect_index",
            Self::ExpectPhase { .. } => "expect_phase",
            Self::ExpectRenders { .. } => "expect_renders",
            Self::ExpectPendingTimers { .. } => "expect_pending_timers",
        }
    }

    pub fn is_expectation(&self) -> bool {
        self.action().starts_with("expect_")
    }
}

/// A step that did not go as scripted
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StepFailure {
    /// 1-based step number
    pub step: usize,
    pub action: &'static str,
    pub message: String,
}

/// Outcome of replaying a scenario
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScenarioReport {
    pub name: String,
    pub steps: usize,
    pub expectations: usize,
    pub elapsed_ms: u64,
    pub final_index: usize,
    pub final_phase: Phase,
    pub renders: Vec<usize>,
    pub host_events: Vec<HostEvent>,
    pub failures: Vec<StepFailure>,
}

impl ScenarioReport {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Validated scenario ready to replay
#[derive(Clone, Debug)]
pub struct Scenario {
    file: ScenarioFile,
    config: CarouselConfig,
}

impl Scenario {
    /// Load a scenario from a TOML or JSON file
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let content = std::fs::read_to_string(path)?;
        let mut file: ScenarioFile = if path.extension().is_some_and(|e| e == "json") {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };

        if file.name.is_empty() {
            file.name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
        }

        Self::from_file(file)
    }

    /// Parse TOML scenario text
    pub fn from_toml(content: &str) -> Result<Self, ScenarioError> {
        Self::from_file(toml::from_str(content)?)
    }

    /// Resolve the config and validate a parsed scenario
    pub fn from_file(file: ScenarioFile) -> Result<Self, ScenarioError> {
        let base = match file.preset {
            Some(preset) => {
                preset.config(file.carousel.slide_count.unwrap_or(DEFAULT_PRESET_SLIDES))
            }
            None => CarouselConfig::default(),
        };
        let config = file.carousel.apply(base);
        config.validate()?;

        if file.steps.is_empty() {
            return Err(ScenarioError::Validation(
                "scenario has no steps".to_string(),
            ));
        }
        for (i, step) in file.steps.iter().enumerate() {
            if let ScenarioStep::GestureStart { x } | ScenarioStep::GestureMove { x } = step {
                if !x.is_finite() {
                    return Err(ScenarioError::Validation(format!(
                        "step {}: {} position must be finite",
                        i + 1,
                        step.action()
                    )));
                }
            }
        }

        Ok(Self { file, config })
    }

    pub fn name(&self) -> &str {
        &self.file.name
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn steps(&self) -> &[ScenarioStep] {
        &self.file.steps
    }

    /// Replay every step and collect the results.
    ///
    /// Failed expectations and rejected `go_to` calls are recorded in the
    /// report rather than stopping the run.
    pub fn run(&self, trace: Option<TraceLog>) -> Result<ScenarioReport, ScenarioError> {
        let timer = ManualTimer::new();
        let clock = ClockHandle::from(timer.clock().clone());
        let host = RecordingHost::with_clock(clock.clone());

        let mut builder = CarouselController::builder(
            self.config.clone(),
            Arc::new(host.clone()),
            Arc::new(timer.clone()),
        )
        .name(self.name())
        .clock(clock);
        if let Some(trace) = trace {
            builder = builder.trace(trace);
        }
        let ctl = builder.build()?;

        let mut failures = Vec::new();
        for (i, step) in self.file.steps.iter().enumerate() {
            if let Err(message) = apply_step(step, &ctl, &timer, &host) {
                failures.push(StepFailure {
                    step: i + 1,
                    action: step.action(),
                    message,
                });
            }
        }

        Ok(ScenarioReport {
            name: self.name().to_string(),
            steps: self.file.steps.len(),
            expectations: self.file.steps.iter().filter(|s| s.is_expectation()).count(),
            elapsed_ms: timer.clock().now_millis(),
            final_index: ctl.current_index(),
            final_phase: ctl.phase(),
            renders: host.renders(),
            host_events: host.events(),
            failures,
        })
    }
}

fn apply_step(
    step: &ScenarioStep,
    ctl: &CarouselController,
    timer: &ManualTimer,
    host: &RecordingHost,
) -> Result<(), String> {
    match step {
        ScenarioStep::Start => ctl.start(),
        ScenarioStep::Next => ctl.next(),
        ScenarioStep::Prev => ctl.prev(),
        ScenarioStep::GoTo { index } => ctl.go_to(*index).map_err(|e| e.to_string())?,
        ScenarioStep::Pause { reason } => ctl.pause(reason.clone()),
        ScenarioStep::Resume { reason } => ctl.resume(reason.clone()),
        ScenarioStep::GestureStart { x } => ctl.gesture_start(*x),
        ScenarioStep::GestureMove { x } => ctl.gesture_move(*x),
        ScenarioStep::GestureEnd => ctl.gesture_end(),
        ScenarioStep::GestureCancel => ctl.gesture_cancel(),
        ScenarioStep::Hover { on } => ctl.set_hovered(*on),
        ScenarioStep::Visible { on } => ctl.set_visible(*on),
        ScenarioStep::Media { on } => ctl.set_media_playing(*on),
        ScenarioStep::Viewport { width } => ctl.set_viewport_width(*width),
        ScenarioStep::AdvanceTime { ms } => {
            timer.advance(*ms);
        }
        ScenarioStep::Dispose => ctl.dispose(),
        ScenarioStep::ExpectIndex { index } => {
            expect("index", *index, ctl.current_index())?;
        }
        ScenarioStep::ExpectPhase { phase } => {
            expect("phase", *phase, ctl.phase())?;
        }
        ScenarioStep::ExpectRenders { count } => {
            expect("render count", *count, host.render_count())?;
        }
        ScenarioStep::ExpectPendingTimers { count } => {
            expect("pending timers", *count, timer.pending())?;
        }
    }
    Ok(())
}

fn expect<T: PartialEq + std::fmt::Debug>(what: &str, expected: T, actual: T) -> Result<(), String> {
    if expected == actual {
        Ok(())
    } else {
        Err(format!("expected {what} {expected:?}, got {actual:?}"))
    }
}

#[cfg(test)]
#[path = "scenario_tests.rs"]
mod tests;
