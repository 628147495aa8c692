// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Shared helpers for CLI integration tests.

#![allow(dead_code)]
#![allow(deprecated)] // Command::cargo_bin is deprecated but still functional

use assert_cmd::Command;
use std::io::Write;
use tempfile::NamedTempFile;

/// Create a temporary scenario file
/// Detects JSON vs TOML content and uses appropriate extension
pub fn write_scenario(content: &str) -> NamedTempFile {
    let is_json = content.trim().starts_with('{');

    let mut file = if is_json {
        tempfile::Builder::new().suffix(".json").tempfile().unwrap()
    } else {
        tempfile::Builder::new().suffix(".toml").tempfile().unwrap()
    };

    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// The slidekit binary, with any inherited trace target cleared
pub fn slidekit() -> Command {
    let mut cmd = Command::cargo_bin("slidekit").unwrap();
    cmd.env_remove("SLIDEKIT_TRACE");
    cmd
}

pub fn path_arg(file: &NamedTempFile) -> &str {
    file.path().to_str().unwrap()
}

/// Five looping slides advancing every 4s; passes as written
pub const HERO_WRAPS: &str = r#"
name = "hero wraps"

[carousel]
slide_count = 5
auto_advance_ms = 4000

[[steps]]
action = "start"

[[steps]]
action = "advance_time"
ms = 4000

[[steps]]
action = "expect_index"
index = 1

[[steps]]
action = "advance_time"
ms = 300

[[steps]]
action = "go_to"
index = 4

[[steps]]
action = "advance_time"
ms = 300

[[steps]]
action = "next"

[[steps]]
action = "expect_index"
index = 0
"#;
