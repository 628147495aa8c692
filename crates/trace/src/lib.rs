// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Transition trace for slidekit carousels.
//!
//! Every decision a carousel controller makes (scheduling, committing a move,
//! coalescing a request, pausing, re-anchoring a clone track) is recorded as a
//! [`TraceRecord`]. The log lives in memory and can optionally stream JSONL to
//! a file for offline inspection.

mod event;
mod log;

pub use event::{MoveCause, SwipeDecision, TraceEvent, TraceRecord};
pub use log::TraceLog;
