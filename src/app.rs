use crate::audio::HeartbeatAudio;
use crate::core::{
    Controller, ExperienceConfig, InputSampler, InteractionOutcome, ScrollMetrics, Session,
    Variant,
};
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Session controller plus the input filter that feeds it.
///
/// Single writer: every mutation of the session goes through here.
pub struct Experience {
    controller: Controller<HeartbeatAudio>,
    sampler: InputSampler,
    rng: StdRng,
}

pub type SharedExperience = Rc<RefCell<Experience>>;

impl Experience {
    pub fn new(variant: Variant, narrative_len: usize, rng: StdRng) -> Self {
        let config = ExperienceConfig::for_variant(variant, narrative_len);
        let sampler = InputSampler::new(config.sampling);
        log::info!(
            "[session] variant={} cap={} sampling={:?}",
            variant,
            config.cap_rate,
            config.sampling
        );
        Self {
            controller: Controller::new(Session::new(config), HeartbeatAudio::new()),
            sampler,
            rng,
        }
    }

    pub fn controller(&self) -> &Controller<HeartbeatAudio> {
        &self.controller
    }

    pub fn start(&mut self) -> Option<InteractionOutcome> {
        self.controller.start()
    }

    /// Direct, deliberate input (heart click). Never sampled.
    pub fn click(&mut self) -> InteractionOutcome {
        self.controller.register_interaction()
    }

    /// High-frequency input; counts only if the sampler lets it through.
    pub fn sampled_interaction(&mut self, now_ms: f64) -> InteractionOutcome {
        if !self.controller.snapshot().started {
            return InteractionOutcome::default();
        }
        if self.sampler.accept(now_ms, &mut self.rng) {
            self.controller.register_interaction()
        } else {
            InteractionOutcome::default()
        }
    }

    pub fn scroll(&mut self, metrics: ScrollMetrics, now_ms: f64) -> InteractionOutcome {
        let from_depth = self.controller.update_scroll(metrics);
        let from_event = self.sampled_interaction(now_ms);
        InteractionOutcome {
            finished_now: from_depth.finished_now || from_event.finished_now,
            narrative_changed: from_depth.narrative_changed || from_event.narrative_changed,
        }
    }

    pub fn toggle_audio(&mut self) -> bool {
        self.controller.toggle_audio()
    }

    pub fn reset(&mut self) {
        self.controller.reset();
        self.sampler.reset();
    }

    /// Advance wall-clock timers owned by the session.
    pub fn tick(&mut self, elapsed: Duration) {
        self.controller.tick(elapsed);
    }

    pub fn shutdown(&mut self) {
        self.controller.shutdown();
    }

    pub fn resume(&mut self) {
        if self.controller.resume() {
            log::info!("[session] resumed");
        }
    }
}
