// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Carousel error types.
//!
//! Only two things can go wrong: a configuration that is rejected at
//! construction, and a `go_to` with an index that does not exist. Everything
//! else (stray gesture samples, overlapping requests, calls after dispose) is
//! absorbed as a no-op.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CarouselError {
    #[error("slide index {index} out of range for {len} slide(s)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("invalid carousel config: {0}")]
    InvalidConfig(String),
}

impl CarouselError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
