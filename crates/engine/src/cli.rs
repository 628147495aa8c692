// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::Preset;
use crate::scenario::DEFAULT_PRESET_SLIDES;

/// Carousel engine: replay scenarios and inspect presets
#[derive(Parser, Debug)]
#[command(name = "slidekit", version, about = "Carousel controller engine")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replay scenario files and check their expectations
    Run {
        /// Scenario files (TOML or JSON)
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        output_format: OutputFormat,

        /// Append every controller decision to this JSONL file
        #[arg(long, env = "SLIDEKIT_TRACE", value_name = "FILE")]
        trace: Option<PathBuf>,
    },

    /// Parse and validate scenario files without running them
    Validate {
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,
    },

    /// Print a preset's config as TOML
    Preset {
        #[arg(value_enum)]
        name: Preset,

        /// Number of slides
        #[arg(long, default_value_t = DEFAULT_PRESET_SLIDES)]
        slides: usize,
    },

    /// Run a preset on the real clock and print each render as it happens
    Live {
        #[arg(long, value_enum)]
        preset: Preset,

        #[arg(long, default_value_t = DEFAULT_PRESET_SLIDES)]
        slides: usize,

        /// How long to run before disposing
        #[arg(long, default_value_t = 15_000)]
        duration_ms: u64,
    },
}

/// Report format for `run`
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// One summary line per scenario plus failure details
    #[default]
    Text,
    /// One JSON report per line
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
