//! Interaction-driven session state machine.
//!
//! Heterogeneous input (clicks, sampled pointer movement, scroll depth) folds
//! into one snapshot: interaction count, composite progress, heart rate,
//! narrative index and the finale flag. The snapshot is the only thing the
//! renderer, typewriter and audio read.

use crate::core::config::{ExperienceConfig, FinishRule, NarrativeIndexing, RateSpike};
use crate::core::constants::PROGRESS_MAX;
use crate::core::input::ScrollMetrics;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionSnapshot {
    pub interaction_count: u32,
    pub heart_rate: f32,
    pub scroll_progress: f32,
    /// Composite progress in `[0, 100]`; a high-water mark within a session.
    pub progress: f32,
    /// `None` until the first interaction selects an entry.
    pub narrative_index: Option<usize>,
    pub started: bool,
    pub finished: bool,
    pub audio_enabled: bool,
}

impl SessionSnapshot {
    pub fn at_rest(base_rate: f32) -> Self {
        Self {
            interaction_count: 0,
            heart_rate: base_rate,
            scroll_progress: 0.0,
            progress: 0.0,
            narrative_index: None,
            started: false,
            finished: false,
            audio_enabled: false,
        }
    }

    /// Seconds per beat at the current rate; drives the CSS pulse animation.
    #[inline]
    pub fn pulse_period_sec(&self) -> f32 {
        60.0 / self.heart_rate.max(1.0)
    }
}

/// What a single input changed, for the presentation layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InteractionOutcome {
    /// True exactly once per session, on the input that reached the finale.
    pub finished_now: bool,
    pub narrative_changed: bool,
}

#[derive(Clone, Debug)]
pub struct Session {
    config: ExperienceConfig,
    state: SessionSnapshot,
    decay_remaining: Option<Duration>,
}

impl Session {
    pub fn new(config: ExperienceConfig) -> Self {
        let state = SessionSnapshot::at_rest(config.base_rate);
        Self {
            config,
            state,
            decay_remaining: None,
        }
    }

    pub fn config(&self) -> &ExperienceConfig {
        &self.config
    }

    #[inline]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.state
    }

    /// Whether a rate cool-down is currently armed.
    pub fn decay_pending(&self) -> bool {
        self.decay_remaining.is_some()
    }

    /// Begin the session. Counts as the first interaction.
    /// Returns `None` if the session was already started.
    pub fn start(&mut self) -> Option<InteractionOutcome> {
        if self.state.started {
            return None;
        }
        self.state.started = true;
        self.state.audio_enabled = true;
        log::info!("[session] started");
        Some(self.register_interaction())
    }

    pub fn register_interaction(&mut self) -> InteractionOutcome {
        if !self.state.started {
            return InteractionOutcome::default();
        }
        let prev_index = self.state.narrative_index;
        self.state.interaction_count = self.state.interaction_count.saturating_add(1);
        self.commit_progress();
        self.raise_rate();
        // Re-arming replaces any pending cool-down.
        self.decay_remaining = Some(self.config.decay_after);
        self.settle(prev_index)
    }

    /// Fold a new scroll position into progress. Scroll depth may move both
    /// ways; committed progress only moves up.
    pub fn update_scroll(&mut self, metrics: ScrollMetrics) -> InteractionOutcome {
        if !self.state.started {
            return InteractionOutcome::default();
        }
        let prev_index = self.state.narrative_index;
        self.state.scroll_progress = metrics.progress();
        self.commit_progress();
        self.settle(prev_index)
    }

    /// Advance the cool-down countdown. Returns true if the rate relaxed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let Some(remaining) = self.decay_remaining else {
            return false;
        };
        if dt < remaining {
            self.decay_remaining = Some(remaining - dt);
            return false;
        }
        self.decay_remaining = None;
        let floor = self.decay_floor();
        if self.state.heart_rate > floor {
            log::debug!(
                "[session] rate relaxed {:.1} -> {:.1} BPM",
                self.state.heart_rate,
                floor
            );
            self.state.heart_rate = floor;
        }
        true
    }

    /// Rate the cool-down settles on; grows with accumulated interactions.
    pub fn decay_floor(&self) -> f32 {
        let base = self.config.base_rate;
        let grown = base + self.state.interaction_count as f32 * self.config.floor_per_interaction;
        grown.clamp(base, self.config.effective_cap())
    }

    /// Returns true if the flag changed.
    pub fn set_audio_enabled(&mut self, enabled: bool) -> bool {
        if !self.state.started || self.state.audio_enabled == enabled {
            return false;
        }
        self.state.audio_enabled = enabled;
        true
    }

    pub fn reset(&mut self) {
        self.state = SessionSnapshot::at_rest(self.config.base_rate);
        self.decay_remaining = None;
        log::info!("[session] reset");
    }

    fn commit_progress(&mut self) {
        let s = &mut self.state;
        let candidate = (s.interaction_count as f32 * self.config.interaction_weight
            + s.scroll_progress * self.config.scroll_weight)
            .clamp(0.0, PROGRESS_MAX);
        // NaN candidates are ignored by `max`.
        s.progress = s.progress.max(candidate).clamp(0.0, PROGRESS_MAX);
    }

    fn raise_rate(&mut self) {
        let base = self.config.base_rate;
        let cap = self.config.effective_cap();
        let current = self.state.heart_rate;
        let spiked = match self.config.spike {
            RateSpike::PerInteraction { step } => current + step,
            RateSpike::WithProgress { span } => base + self.state.progress / PROGRESS_MAX * span,
        };
        self.state.heart_rate = spiked.max(current).clamp(base, cap);
    }

    fn settle(&mut self, prev_index: Option<usize>) -> InteractionOutcome {
        let mut outcome = InteractionOutcome::default();
        if !self.state.finished && self.terminal_reached() {
            self.state.finished = true;
            outcome.finished_now = true;
            log::info!(
                "[session] finished after {} interactions (progress {:.0})",
                self.state.interaction_count,
                self.state.progress
            );
        }
        self.state.narrative_index = self.narrative_index();
        outcome.narrative_changed = self.state.narrative_index != prev_index;
        outcome
    }

    fn terminal_reached(&self) -> bool {
        match self.config.finish {
            FinishRule::Interactions(n) => self.state.interaction_count >= n,
            FinishRule::Progress(p) => self.state.progress >= p.min(PROGRESS_MAX),
        }
    }

    // The index follows `finished`: the last entry is reserved for the finale.
    fn narrative_index(&self) -> Option<usize> {
        let len = self.config.narrative_len;
        if len == 0 || self.state.interaction_count == 0 {
            return None;
        }
        let last = len - 1;
        if self.state.finished {
            return Some(last);
        }
        let raw = match self.config.narrative {
            NarrativeIndexing::Bucketed { per_entry } => {
                (self.state.interaction_count / per_entry.max(1)) as usize
            }
            NarrativeIndexing::Proportional => {
                (self.state.progress / PROGRESS_MAX * len as f32).floor() as usize
            }
        };
        Some(raw.min(last.saturating_sub(1)))
    }
}
