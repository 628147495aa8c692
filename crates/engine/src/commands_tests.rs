#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use std::io::Write as _;
use tempfile::TempDir;

const PASSING: &str = r#"
name = "passing"
[carousel]
slide_count = 3

[[steps]]
action = "next"

[[steps]]
action = "expect_index"
index = 1
"#;

const FAILING: &str = r#"
name = "failing"
[carousel]
slide_count = 3

[[steps]]
action = "prev"

[[steps]]
action = "expect_index"
index = 1
"#;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

#[test]
fn test_run_all_passing() {
    let dir = TempDir::new().unwrap();
    let files = vec![write(&dir, "a.toml", PASSING)];
    let mut out = Vec::new();

    let code = run(&files, OutputFormat::Text, None, &mut out).unwrap();
    assert_eq!(code, exit_codes::SUCCESS);
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("PASS passing"));
    assert!(text.ends_with("1 scenario(s): 1 passed, 0 failed\n"));
}

#[test]
fn test_run_with_failure_exits_one() {
    let dir = TempDir::new().unwrap();
    let files = vec![
        write(&dir, "a.toml", PASSING),
        write(&dir, "b.toml", FAILING),
    ];
    let mut out = Vec::new();

    let code = run(&files, OutputFormat::Json, None, &mut out).unwrap();
    assert_eq!(code, exit_codes::FAILURE);
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), 3);
}

#[test]
fn test_run_writes_trace_file() {
    let dir = TempDir::new().unwrap();
    let files = vec![write(&dir, "a.toml", PASSING)];
    let trace = dir.path().join("trace.jsonl");

    run(&files, OutputFormat::Text, Some(trace.as_path()), Vec::new()).unwrap();
    let content = std::fs::read_to_string(&trace).unwrap();
    let first: serde_json::Value = serde_json::from_str(content.lines().next().unwrap()).unwrap();
    assert_eq!(first["carousel"], "passing");
    assert_eq!(first["event"]["type"], "committed");
}

#[test]
fn test_run_bad_file_names_path() {
    let dir = TempDir::new().unwrap();
    let files = vec![
        write(&dir, "a.toml", PASSING),
        write(&dir, "broken.toml", "steps = 3"),
    ];
    let mut out = Vec::new();

    let err = run(&files, OutputFormat::Text, None, &mut out).unwrap_err();
    assert!(err.to_string().contains("broken.toml"));
    assert!(out.is_empty());
}

#[test]
fn test_validate_lists_files() {
    let dir = TempDir::new().unwrap();
    let files = vec![write(&dir, "a.toml", PASSING)];
    let mut out = Vec::new();

    assert_eq!(validate(&files, &mut out).unwrap(), exit_codes::SUCCESS);
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("passing (2 steps, 1 expectations)"));
}

#[test]
fn test_preset_output_parses_back() {
    let mut out = Vec::new();
    preset(Preset::MobileCards, 6, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    let doc: toml::Table = toml::from_str(&text).unwrap();
    assert_eq!(doc["preset"].as_str(), Some("mobile_cards"));
    let carousel: CarouselConfig = doc["carousel"].clone().try_into().unwrap();
    assert_eq!(carousel, Preset::MobileCards.config(6));
}

#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl std::io::Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[tokio::test(start_paused = true)]
async fn test_live_renders_and_disposes() {
    let buf = SharedBuf::default();
    let code = live(Preset::HeroSlider, 3, 12_000, buf.clone())
        .await
        .unwrap();
    assert_eq!(code, exit_codes::SUCCESS);

    let text = String::from_utf8(buf.0.lock().clone()).unwrap();
    assert!(text.contains("hero_slider with 3 slides"));
    // Fires at 4000 and 8800; the next one is due after the run ends
    assert!(text.contains("render 1"));
    assert!(text.contains("render 2"));
    assert!(text.contains("disposed at index 2"));
}
