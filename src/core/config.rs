//! Tuning records for the experience variants.
//!
//! Every variant runs the same session engine; only the numbers and the
//! choice of spike/indexing/finish strategy differ.

use crate::core::constants::REST_RATE_BPM;
use crate::core::input::SamplingPolicy;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// How a new interaction raises the heart rate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RateSpike {
    /// Flat spike added on top of the current rate for each interaction.
    PerInteraction { step: f32 },
    /// Rate tracks overall progress: `base + progress / 100 * span`.
    WithProgress { span: f32 },
}

/// How the active narrative entry is chosen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NarrativeIndexing {
    /// One new entry every `per_entry` interactions.
    Bucketed { per_entry: u32 },
    /// Entry index proportional to composite progress.
    Proportional,
}

/// Terminal condition that triggers the finale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FinishRule {
    Interactions(u32),
    Progress(f32),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExperienceConfig {
    pub base_rate: f32,
    pub cap_rate: f32,
    pub spike: RateSpike,
    pub narrative: NarrativeIndexing,
    pub narrative_len: usize,
    pub finish: FinishRule,
    /// Progress points contributed by each interaction.
    pub interaction_weight: f32,
    /// Progress points contributed by each percent of scroll depth.
    pub scroll_weight: f32,
    /// Quiet period before the rate relaxes.
    pub decay_after: Duration,
    /// Relaxed floor grows by this much per accumulated interaction.
    pub floor_per_interaction: f32,
    /// Filter applied to pointer-move and scroll events.
    pub sampling: SamplingPolicy,
}

impl ExperienceConfig {
    /// Click, move and scroll all count; a new quote every five interactions.
    pub fn heartbeat_sync(narrative_len: usize) -> Self {
        let per_entry = 5;
        Self {
            base_rate: REST_RATE_BPM,
            cap_rate: 120.0,
            spike: RateSpike::PerInteraction { step: 5.0 },
            narrative: NarrativeIndexing::Bucketed { per_entry },
            narrative_len,
            finish: FinishRule::Interactions(per_entry * narrative_len.saturating_sub(1) as u32),
            interaction_weight: 5.0,
            scroll_weight: 0.0,
            decay_after: Duration::from_millis(2000),
            floor_per_interaction: 0.5,
            sampling: SamplingPolicy::CoinFlip { probability: 0.05 },
        }
    }

    /// Scroll depth and interactions blend into progress; chapters follow progress.
    pub fn scroll_story(narrative_len: usize) -> Self {
        Self {
            base_rate: REST_RATE_BPM,
            cap_rate: 160.0,
            spike: RateSpike::WithProgress { span: 100.0 },
            narrative: NarrativeIndexing::Proportional,
            narrative_len,
            finish: FinishRule::Progress(100.0),
            interaction_weight: 0.8,
            scroll_weight: 0.6,
            decay_after: Duration::from_millis(1500),
            floor_per_interaction: 0.3,
            sampling: SamplingPolicy::Throttle {
                min_interval: Duration::from_millis(100),
            },
        }
    }

    pub fn for_variant(variant: Variant, narrative_len: usize) -> Self {
        match variant {
            Variant::HeartbeatSync => Self::heartbeat_sync(narrative_len),
            Variant::ScrollStory => Self::scroll_story(narrative_len),
        }
    }

    /// Cap never sits below the base rate, whatever the record says.
    #[inline]
    pub fn effective_cap(&self) -> f32 {
        self.cap_rate.max(self.base_rate)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    #[default]
    HeartbeatSync,
    ScrollStory,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown experience variant: {0}")]
pub struct UnknownVariant(pub String);

impl FromStr for Variant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "heartbeat-sync" | "heartbeat" | "" => Ok(Variant::HeartbeatSync),
            "scroll-story" | "scroll" => Ok(Variant::ScrollStory),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::HeartbeatSync => f.write_str("heartbeat-sync"),
            Variant::ScrollStory => f.write_str("scroll-story"),
        }
    }
}
