// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! slidekit binary entry point.

use std::io;

use clap::Parser;

use slidekit::cli::{Cli, Command};
use slidekit::commands::{self, exit_codes};
use slidekit::output::print_error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Run {
            files,
            output_format,
            trace,
        } => commands::run(&files, output_format, trace.as_deref(), io::stdout().lock()),
        Command::Validate { files } => commands::validate(&files, io::stdout().lock()),
        Command::Preset { name, slides } => {
            commands::preset(name, slides, io::stdout().lock())
        }
        Command::Live {
            preset,
            slides,
            duration_ms,
        } => commands::live(preset, slides, duration_ms, io::stdout()).await,
    };

    match result {
        Ok(exit_codes::SUCCESS) => Ok(()),
        Ok(code) => std::process::exit(code),
        Err(e) => {
            print_error(e);
            std::process::exit(exit_codes::FAILURE);
        }
    }
}
