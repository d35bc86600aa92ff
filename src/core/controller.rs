use crate::core::input::ScrollMetrics;
use crate::core::session::{InteractionOutcome, Session, SessionSnapshot};
use std::time::Duration;

/// An audio (or other) output that follows the session heart rate.
///
/// The controller holds the output explicitly and decides when it is
/// acquired and released, so nothing lives at module scope.
pub trait PulseOutput {
    /// Begin producing output. Must be idempotent and must not fail loudly.
    fn acquire(&mut self);
    /// Stop and free every underlying resource. Idempotent.
    fn release(&mut self);
    fn set_rate(&mut self, bpm: f32);
}

/// Owns the session together with its pulse output and keeps them in sync.
pub struct Controller<P: PulseOutput> {
    session: Session,
    pulse: P,
    synced_rate: Option<f32>,
}

impl<P: PulseOutput> Controller<P> {
    pub fn new(session: Session, pulse: P) -> Self {
        Self {
            session,
            pulse,
            synced_rate: None,
        }
    }

    #[inline]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn pulse(&self) -> &P {
        &self.pulse
    }

    pub fn pulse_mut(&mut self) -> &mut P {
        &mut self.pulse
    }

    pub fn start(&mut self) -> Option<InteractionOutcome> {
        let outcome = self.session.start()?;
        // Rate first so the opening beats already use it.
        self.synced_rate = None;
        self.sync_rate();
        self.pulse.acquire();
        Some(outcome)
    }

    pub fn register_interaction(&mut self) -> InteractionOutcome {
        let outcome = self.session.register_interaction();
        self.sync_rate();
        outcome
    }

    pub fn update_scroll(&mut self, metrics: ScrollMetrics) -> InteractionOutcome {
        let outcome = self.session.update_scroll(metrics);
        self.sync_rate();
        outcome
    }

    /// Advance timers owned by the session (rate cool-down).
    pub fn tick(&mut self, dt: Duration) {
        if self.session.tick(dt) {
            self.sync_rate();
        }
    }

    /// Flip audio on or off mid-session. Returns the new state.
    pub fn toggle_audio(&mut self) -> bool {
        let enable = !self.session.snapshot().audio_enabled;
        if self.session.set_audio_enabled(enable) {
            if enable {
                self.synced_rate = None;
                self.sync_rate();
                self.pulse.acquire();
            } else {
                self.pulse.release();
            }
        }
        self.session.snapshot().audio_enabled
    }

    pub fn reset(&mut self) {
        self.pulse.release();
        self.synced_rate = None;
        self.session.reset();
    }

    /// Release everything on teardown without touching session state.
    pub fn shutdown(&mut self) {
        self.pulse.release();
        self.synced_rate = None;
    }

    /// Re-acquire the output after `shutdown` if the session still wants audio.
    /// Returns true if the output was acquired.
    pub fn resume(&mut self) -> bool {
        let snap = self.session.snapshot();
        if !(snap.started && snap.audio_enabled) {
            return false;
        }
        self.synced_rate = None;
        self.sync_rate();
        self.pulse.acquire();
        true
    }

    fn sync_rate(&mut self) {
        let snap = self.session.snapshot();
        if !(snap.started && snap.audio_enabled) {
            return;
        }
        if self.synced_rate != Some(snap.heart_rate) {
            self.pulse.set_rate(snap.heart_rate);
            self.synced_rate = Some(snap.heart_rate);
        }
    }
}
