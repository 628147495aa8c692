// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scenario report output in text and JSON modes.

use crate::cli::OutputFormat;
use crate::scenario::ScenarioReport;
use serde::Serialize;
use std::io::Write;

pub use crate::output_diagnostic::{print_error, print_warning};

/// Totals across every scenario in one `run`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub scenarios: usize,
    pub passed: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn record(&mut self, report: &ScenarioReport) {
        self.scenarios += 1;
        if report.passed() {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Writes scenario reports in the configured format
pub struct OutputWriter<W: Write> {
    writer: W,
    format: OutputFormat,
}

impl<W: Write> OutputWriter<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self { writer, format }
    }

    pub fn write_report(&mut self, report: &ScenarioReport) -> std::io::Result<()> {
        match self.format {
            OutputFormat::Text => self.write_report_text(report),
            OutputFormat::Json => self.write_json_line(report),
        }
    }

    pub fn write_summary(&mut self, summary: &RunSummary) -> std::io::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(
                self.writer,
                "{} scenario(s): {} passed, {} failed",
                summary.scenarios, summary.passed, summary.failed
            ),
            OutputFormat::Json => self.write_json_line(&SummaryLine {
                summary: *summary,
            }),
        }
    }

    fn write_report_text(&mut self, report: &ScenarioReport) -> std::io::Result<()> {
        let status = if report.passed() { "PASS" } else { "FAIL" };
        writeln!(
            self.writer,
            "{} {} ({} steps, {} expectations, {} ms, index {}, {} renders)",
            status,
            report.name,
            report.steps,
            report.expectations,
            report.elapsed_ms,
            report.final_index,
            report.renders.len()
        )?;
        for failure in &report.failures {
            writeln!(
                self.writer,
                "  step {} ({}): {}",
                failure.step, failure.action, failure.message
            )?;
        }
        Ok(())
    }

    /// Write a JSON-serializable object as a line
    fn write_json_line<T: Serialize>(&mut self, value: &T) -> std::io::Result<()> {
        let json = serde_json::to_string(value)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        writeln!(self.writer, "{}", json)
    }
}

#[derive(Serialize)]
struct SummaryLine {
    summary: RunSummary,
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
