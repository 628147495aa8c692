// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Carousel configuration and per-feature presets.

use crate::error::CarouselError;
use crate::gesture::{DEFAULT_DRAG_RESISTANCE, DEFAULT_SWIPE_THRESHOLD_PX};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default time a transition is considered in flight
pub const DEFAULT_TRANSITION_MS: u64 = 300;

fn default_true() -> bool {
    true
}

fn default_threshold() -> f64 {
    DEFAULT_SWIPE_THRESHOLD_PX
}

fn default_resistance() -> f64 {
    DEFAULT_DRAG_RESISTANCE
}

fn default_transition_ms() -> u64 {
    DEFAULT_TRANSITION_MS
}

/// Immutable settings for one carousel instance
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CarouselConfig {
    /// Number of real slides
    #[serde(default)]
    pub slide_count: usize,

    /// Wrap around at the ends (true) or stop (false)
    #[serde(default = "default_true", rename = "loop")]
    pub looping: bool,

    /// Auto-advance interval; 0 disables auto-advance
    #[serde(default)]
    pub auto_advance_ms: u64,

    /// Accept swipe/drag input
    #[serde(default = "default_true")]
    pub drag_enabled: bool,

    /// Minimum horizontal displacement that counts as a swipe
    #[serde(default = "default_threshold")]
    pub swipe_threshold_px: f64,

    /// How long a transition is in flight
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,

    /// Drag-follow scale beyond the swipe threshold, in (0, 1]
    #[serde(default = "default_resistance")]
    pub drag_resistance: f64,

    /// Render on a `[last clone, slides.., first clone]` track.
    /// Requires `loop`.
    #[serde(default)]
    pub clone_edges: bool,

    /// Initial slide
    #[serde(default)]
    pub start_index: usize,

    /// Only behave as a slider at or below this viewport width
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsive: Option<Breakpoint>,
}

/// Viewport width above which a responsive slider turns itself off
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Breakpoint {
    pub max_viewport_px: u32,
}

impl Breakpoint {
    /// Whether the slider should be active at `viewport_px`
    pub fn allows(&self, viewport_px: u32) -> bool {
        viewport_px <= self.max_viewport_px
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            slide_count: 0,
            looping: true,
            auto_advance_ms: 0,
            drag_enabled: true,
            swipe_threshold_px: DEFAULT_SWIPE_THRESHOLD_PX,
            transition_ms: DEFAULT_TRANSITION_MS,
            drag_resistance: DEFAULT_DRAG_RESISTANCE,
            clone_edges: false,
            responsive: None,
            start_index: 0,
        }
    }
}

impl CarouselConfig {
    /// Default config for `slide_count` slides
    pub fn with_slides(slide_count: usize) -> Self {
        Self {
            slide_count,
            ..Self::default()
        }
    }

    /// Reject settings the controller cannot honor
    pub fn validate(&self) -> Result<(), CarouselError> {
        if !self.swipe_threshold_px.is_finite() || self.swipe_threshold_px <= 0.0 {
            return Err(CarouselError::invalid(format!(
                "swipe_threshold_px must be a positive number, got {}",
                self.swipe_threshold_px
            )));
        }
        if !(self.drag_resistance > 0.0 && self.drag_resistance <= 1.0) {
            return Err(CarouselError::invalid(format!(
                "drag_resistance must be in (0, 1], got {}",
                self.drag_resistance
            )));
        }
        if self.clone_edges && !self.looping {
            return Err(CarouselError::invalid(
                "clone_edges requires loop = true",
            ));
        }
        if let Some(bp) = self.responsive {
            if bp.max_viewport_px == 0 {
                return Err(CarouselError::invalid(
                    "responsive.max_viewport_px must be greater than 0",
                ));
            }
        }
        if self.slide_count > 0 && self.start_index >= self.slide_count {
            return Err(CarouselError::invalid(format!(
                "start_index {} out of range for {} slide(s)",
                self.start_index, self.slide_count
            )));
        }
        Ok(())
    }

    /// Auto-advance interval, if auto-advance can ever run
    pub fn auto_advance(&self) -> Option<Duration> {
        (self.auto_advance_ms > 0 && self.slide_count > 1)
            .then(|| Duration::from_millis(self.auto_advance_ms))
    }

    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    /// Whether moves should be rendered on a clone-edge track
    pub fn uses_clone_track(&self) -> bool {
        self.clone_edges && self.looping && self.slide_count > 1
    }
}

/// Partial config layered over a preset (all fields optional)
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CarouselOverrides {
    #[serde(default)]
    pub slide_count: Option<usize>,
    #[serde(default, rename = "loop")]
    pub looping: Option<bool>,
    #[serde(default)]
    pub auto_advance_ms: Option<u64>,
    #[serde(default)]
    pub drag_enabled: Option<bool>,
    #[serde(default)]
    pub swipe_threshold_px: Option<f64>,
    #[serde(default)]
    pub transition_ms: Option<u64>,
    #[serde(default)]
    pub drag_resistance: Option<f64>,
    #[serde(default)]
    pub clone_edges: Option<bool>,
    #[serde(default)]
    pub responsive: Option<Breakpoint>,
    #[serde(default)]
    pub start_index: Option<usize>,
}

impl CarouselOverrides {
    /// Apply every field that is set on top of `base`
    pub fn apply(&self, mut base: CarouselConfig) -> CarouselConfig {
        if let Some(v) = self.slide_count {
            base.slide_count = v;
        }
        if let Some(v) = self.looping {
            base.looping = v;
        }
        if let Some(v) = self.auto_advance_ms {
            base.auto_advance_ms = v;
        }
        if let Some(v) = self.drag_enabled {
            base.drag_enabled = v;
        }
        if let Some(v) = self.swipe_threshold_px {
            base.swipe_threshold_px = v;
        }
        if let Some(v) = self.transition_ms {
            base.transition_ms = v;
        }
        if let Some(v) = self.drag_resistance {
            base.drag_resistance = v;
        }
        if let Some(v) = self.clone_edges {
            base.clone_edges = v;
        }
        if let Some(v) = self.responsive {
            base.responsive = Some(v);
        }
        if let Some(v) = self.start_index {
            base.start_index = v;
        }
        base
    }
}

/// The carousels found on the site, each with its own tuned settings
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum Preset {
    /// Mobile-only hero image carousel
    HeroCarousel,
    /// Mobile-only hero image slider with college names
    HeroSlider,
    /// Card deck with an infinite clone track; a grid on wide screens
    MobileCards,
    /// Student testimonial slider
    Testimonials,
    /// Video carousel; never auto-advances over a playing video
    VideoCarousel,
}

/// Viewport width above which the mobile-only carousels switch off
pub const MOBILE_BREAKPOINT_PX: u32 = 768;

const MOBILE_ONLY: Option<Breakpoint> = Some(Breakpoint {
    max_viewport_px: MOBILE_BREAKPOINT_PX,
});

impl Preset {
    pub const ALL: [Preset; 5] = [
        Preset::HeroCarousel,
        Preset::HeroSlider,
        Preset::MobileCards,
        Preset::Testimonials,
        Preset::VideoCarousel,
    ];

    /// Name used in scenario files and on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Preset::HeroCarousel => "hero_carousel",
            Preset::HeroSlider => "hero_slider",
            Preset::MobileCards => "mobile_cards",
            Preset::Testimonials => "testimonials",
            Preset::VideoCarousel => "video_carousel",
        }
    }

    /// Config for this carousel with `slide_count` slides
    pub fn config(&self, slide_count: usize) -> CarouselConfig {
        let base = CarouselConfig::with_slides(slide_count);
        match self {
            Preset::HeroCarousel | Preset::HeroSlider => CarouselConfig {
                auto_advance_ms: 4000,
                transition_ms: 800,
                responsive: MOBILE_ONLY,
                ..base
            },
            Preset::MobileCards => CarouselConfig {
                auto_advance_ms: 5000,
                transition_ms: 300,
                clone_edges: true,
                responsive: MOBILE_ONLY,
                ..base
            },
            Preset::Testimonials => CarouselConfig {
                auto_advance_ms: 5000,
                transition_ms: 600,
                ..base
            },
            Preset::VideoCarousel => CarouselConfig {
                auto_advance_ms: 6000,
                transition_ms: 800,
                ..base
            },
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
