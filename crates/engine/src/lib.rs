// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Carousel controller engine.
//!
//! One reusable controller for every slider on a page: auto-advance timing,
//! nested pause reasons, swipe recognition, loop or clamp wraparound, the
//! clone-edge infinite track and responsive enable/disable.
//!
//! ```
//! use std::sync::Arc;
//! use slidekit::config::CarouselConfig;
//! use slidekit::controller::CarouselController;
//! use slidekit::host::RecordingHost;
//! use slidekit::timer::ManualTimer;
//!
//! let timer = ManualTimer::new();
//! let host = RecordingHost::new();
//! let config = CarouselConfig {
//!     auto_advance_ms: 4000,
//!     ..CarouselConfig::with_slides(5)
//! };
//! let ctl = CarouselController::new(config, Arc::new(host.clone()), Arc::new(timer.clone())).unwrap();
//!
//! ctl.start();
//! timer.advance(4000);
//! assert_eq!(ctl.current_index(), 1);
//! assert_eq!(host.renders(), vec![1]);
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod gesture;
pub mod group;
pub mod host;
pub mod index;
pub mod scenario;
pub mod time;
pub mod timer;

/// Re-exported trace types from the slidekit-trace crate.
pub mod trace {
    pub use slidekit_trace::{MoveCause, SwipeDecision, TraceEvent, TraceLog, TraceRecord};
}

// Binary support - pub for binary access, hidden from docs
#[doc(hidden)]
pub mod cli;
#[doc(hidden)]
pub mod commands;
#[doc(hidden)]
pub mod output;
mod output_diagnostic;

pub use config::{CarouselConfig, Preset};
pub use controller::{CarouselController, PauseReason, Phase, Snapshot, WeakController};
pub use error::CarouselError;
pub use host::{CarouselHost, TrackMotion};
