#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use crate::config::Preset;
use crate::controller::Phase;
use crate::host::RecordingHost;
use crate::timer::ManualTimer;
use std::sync::Arc;

fn member(name: &str, preset: Preset, timer: &ManualTimer) -> CarouselController {
    CarouselController::builder(
        preset.config(4),
        Arc::new(RecordingHost::new()),
        Arc::new(timer.clone()),
    )
    .name(name)
    .build()
    .unwrap()
}

fn page(timer: &ManualTimer) -> CarouselGroup {
    let group = CarouselGroup::new();
    group.insert(member("hero", Preset::HeroCarousel, timer));
    group.insert(member("testimonials", Preset::Testimonials, timer));
    group.insert(member("cards", Preset::MobileCards, timer));
    group
}

#[test]
fn test_names_sorted_and_lookup() {
    let timer = ManualTimer::new();
    let group = page(&timer);
    assert_eq!(group.names(), vec!["cards", "hero", "testimonials"]);
    assert_eq!(group.len(), 3);
    assert_eq!(group.get("hero").unwrap().name(), "hero");
    assert!(group.get("missing").is_none());
}

#[test]
fn test_start_all_and_visibility_fan_out() {
    let timer = ManualTimer::new();
    let group = page(&timer);
    group.start_all();
    assert_eq!(timer.pending(), 3);

    group.set_visible(false);
    assert_eq!(timer.pending(), 0);
    assert_eq!(group.get("hero").unwrap().phase(), Phase::Paused);

    group.set_visible(true);
    assert_eq!(timer.pending(), 3);
    assert_eq!(
        group.get("testimonials").unwrap().phase(),
        Phase::AutoScheduled
    );
}

#[test]
fn test_pause_all_resume_all() {
    let timer = ManualTimer::new();
    let group = page(&timer);
    group.start_all();
    group.pause_all("modal");
    assert_eq!(timer.pending(), 0);
    group.resume_all("modal");
    assert_eq!(timer.pending(), 3);
}

#[test]
fn test_viewport_reaches_responsive_members() {
    let timer = ManualTimer::new();
    let group = page(&timer);
    group.set_viewport_width(1280);
    assert!(!group.get("cards").unwrap().snapshot().enabled);
    assert!(!group.get("hero").unwrap().snapshot().enabled);
    assert!(group.get("testimonials").unwrap().snapshot().enabled);
}

#[test]
fn test_remove_disposes() {
    let timer = ManualTimer::new();
    let group = page(&timer);
    group.start_all();
    let hero = group.remove("hero").unwrap();
    assert!(hero.is_disposed());
    assert_eq!(group.len(), 2);
    assert_eq!(timer.pending(), 2);
}

#[test]
fn test_insert_replaces_same_name() {
    let timer = ManualTimer::new();
    let group = page(&timer);
    let old = group.insert(member("hero", Preset::VideoCarousel, &timer));
    assert!(old.is_some());
    assert_eq!(group.len(), 3);
    assert_eq!(group.get("hero").unwrap().config().auto_advance_ms, 6000);
}

#[test]
fn test_dispose_all_empties() {
    let timer = ManualTimer::new();
    let group = page(&timer);
    group.start_all();
    let hero = group.get("hero").unwrap();
    group.dispose_all();

    assert!(group.is_empty());
    assert!(hero.is_disposed());
    assert_eq!(timer.pending(), 0);
}
