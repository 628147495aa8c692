#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use crate::controller::Phase;
use crate::scenario::StepFailure;

fn report(failures: Vec<StepFailure>) -> ScenarioReport {
    ScenarioReport {
        name: "hero".to_string(),
        steps: 4,
        expectations: 2,
        elapsed_ms: 4300,
        final_index: 1,
        final_phase: Phase::AutoScheduled,
        renders: vec![1],
        host_events: vec![],
        failures,
    }
}

#[test]
fn test_text_pass_line() {
    let mut buf = Vec::new();
    let mut writer = OutputWriter::new(&mut buf, OutputFormat::Text);
    writer.write_report(&report(vec![])).unwrap();

    let output = String::from_utf8(buf).unwrap();
    assert_eq!(
        output,
        "PASS hero (4 steps, 2 expectations, 4300 ms, index 1, 1 renders)\n"
    );
}

#[test]
fn test_text_fail_lists_steps() {
    let mut buf = Vec::new();
    let mut writer = OutputWriter::new(&mut buf, OutputFormat::Text);
    writer
        .write_report(&report(vec![StepFailure {
            step: 3,
            action: "expect_index",
            message: "expected index 2, got 1".to_string(),
        }]))
        .unwrap();

    let output = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert!(lines[0].starts_with("FAIL hero"));
    assert_eq!(lines[1], "  step 3 (expect_index): expected index 2, got 1");
}

#[test]
fn test_json_report_line() {
    let mut buf = Vec::new();
    let mut writer = OutputWriter::new(&mut buf, OutputFormat::Json);
    writer.write_report(&report(vec![])).unwrap();

    let output = String::from_utf8(buf).unwrap();
    assert_eq!(output.lines().count(), 1);
    let json: serde_json::Value = serde_json::from_str(output.trim()).unwrap();
    assert_eq!(json["name"], "hero");
    assert_eq!(json["final_phase"], "auto_scheduled");
    assert_eq!(json["renders"], serde_json::json!([1]));
    assert_eq!(json["failures"], serde_json::json!([]));
}

#[test]
fn test_summary_counts() {
    let mut summary = RunSummary::default();
    summary.record(&report(vec![]));
    summary.record(&report(vec![StepFailure {
        step: 1,
        action: "go_to",
        message: "bad".to_string(),
    }]));
    assert_eq!(summary.passed, 1);
    assert_eq!(summary.failed, 1);
    assert!(!summary.all_passed());

    let mut buf = Vec::new();
    OutputWriter::new(&mut buf, OutputFormat::Text)
        .write_summary(&summary)
        .unwrap();
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "2 scenario(s): 1 passed, 1 failed\n"
    );
}

#[test]
fn test_json_summary() {
    let mut buf = Vec::new();
    OutputWriter::new(&mut buf, OutputFormat::Json)
        .write_summary(&RunSummary {
            scenarios: 1,
            passed: 1,
            failed: 0,
        })
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();
    assert_eq!(json["summary"]["passed"], 1);
}
