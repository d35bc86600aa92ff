use crate::constants::SCHEDULER_PASS_MS;
use crate::core::{heartbeat_unit, BeatSchedule, PulseOutput, Thump};
use crate::timers::Interval;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// WebAudio heartbeat: a look-ahead pass every `SCHEDULER_PASS_MS` places
/// "lubb-dupp" pairs on the audio clock.
pub struct HeartbeatAudio {
    ctx: Option<web::AudioContext>,
    schedule: Rc<RefCell<BeatSchedule>>,
    pass: Option<Interval>,
}

impl Default for HeartbeatAudio {
    fn default() -> Self {
        Self::new()
    }
}

impl HeartbeatAudio {
    pub fn new() -> Self {
        Self {
            ctx: None,
            schedule: Rc::new(RefCell::new(BeatSchedule::default())),
            pass: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.pass.is_some()
    }

    pub fn start(&mut self) {
        if self.pass.is_some() {
            return;
        }
        let Some(ctx) = self.ensure_context() else {
            return;
        };
        if ctx.state() == web::AudioContextState::Suspended {
            if let Err(e) = ctx.resume() {
                log::warn!("[audio] resume failed: {:?}", e);
            }
        }
        run_pass(&ctx, &self.schedule);
        let schedule = self.schedule.clone();
        let pass_ctx = ctx.clone();
        self.pass = Interval::new(SCHEDULER_PASS_MS, move || run_pass(&pass_ctx, &schedule));
        if self.pass.is_some() {
            log::info!("[audio] heartbeat started");
        }
    }

    pub fn stop(&mut self) {
        let was_running = self.is_running();
        self.pass = None;
        if let Some(ctx) = self.ctx.take() {
            if let Err(e) = ctx.close() {
                log::warn!("[audio] close failed: {:?}", e);
            }
        }
        self.schedule.borrow_mut().reset();
        if was_running {
            log::info!("[audio] heartbeat stopped");
        }
    }

    pub fn set_rate(&mut self, bpm: f32) {
        self.schedule.borrow_mut().set_rate(bpm);
    }

    fn ensure_context(&mut self) -> Option<web::AudioContext> {
        if self.ctx.is_none() {
            match web::AudioContext::new() {
                Ok(ctx) => self.ctx = Some(ctx),
                Err(e) => {
                    // Commonly blocked until a user gesture; retried on the next start().
                    log::warn!("[audio] AudioContext unavailable: {:?}", e);
                    return None;
                }
            }
        }
        self.ctx.clone()
    }
}

impl PulseOutput for HeartbeatAudio {
    fn acquire(&mut self) {
        self.start();
    }

    fn release(&mut self) {
        self.stop();
    }

    fn set_rate(&mut self, bpm: f32) {
        HeartbeatAudio::set_rate(self, bpm);
    }
}

impl Drop for HeartbeatAudio {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run_pass(ctx: &web::AudioContext, schedule: &Rc<RefCell<BeatSchedule>>) {
    let beats = schedule.borrow_mut().due(ctx.current_time());
    for beat in beats {
        for thump in heartbeat_unit(beat.at_sec) {
            play_thump(ctx, &thump);
        }
    }
}

fn play_thump(ctx: &web::AudioContext, thump: &Thump) {
    let Ok(osc) = web::OscillatorNode::new(ctx) else {
        return;
    };
    let Ok(gain) = web::GainNode::new(ctx) else {
        return;
    };
    osc.set_type(web::OscillatorType::Sine);
    let freq = osc.frequency();
    _ = freq.set_value_at_time(thump.freq_hz, thump.start_sec);
    _ = freq.exponential_ramp_to_value_at_time(thump.pitch_end_hz, thump.pitch_ramp_end_sec);

    let g = gain.gain();
    _ = g.set_value_at_time(thump.volume, thump.start_sec);
    _ = g.exponential_ramp_to_value_at_time(thump.gain_end, thump.gain_ramp_end_sec);

    _ = osc.connect_with_audio_node(&gain);
    _ = gain.connect_with_audio_node(&ctx.destination());
    _ = osc.start_with_when(thump.start_sec);
    _ = osc.stop_with_when(thump.stop_sec);
}
