//! Look-ahead beat scheduling and the two-tone heartbeat envelope.
//!
//! Timer callbacks are imprecise, so each pass schedules every beat that
//! falls inside a short window ahead of the audio clock rather than firing
//! "now". Times are audio-clock seconds.

use crate::core::constants::*;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScheduledBeat {
    pub at_sec: f64,
    /// Spacing used to place the following beat.
    pub interval_sec: f64,
}

#[derive(Clone, Debug)]
pub struct BeatSchedule {
    next_beat_sec: Option<f64>,
    interval_sec: f64,
    lookahead_sec: f64,
}

impl Default for BeatSchedule {
    fn default() -> Self {
        Self::new(REST_RATE_BPM, LOOKAHEAD_SEC)
    }
}

impl BeatSchedule {
    pub fn new(bpm: f32, lookahead_sec: f64) -> Self {
        Self {
            next_beat_sec: None,
            interval_sec: interval_for_bpm(bpm),
            lookahead_sec,
        }
    }

    /// Applies from the next advance; beats already emitted keep their time.
    pub fn set_rate(&mut self, bpm: f32) {
        self.interval_sec = interval_for_bpm(bpm);
    }

    #[inline]
    pub fn interval_sec(&self) -> f64 {
        self.interval_sec
    }

    #[inline]
    pub fn next_beat_sec(&self) -> Option<f64> {
        self.next_beat_sec
    }

    /// Forget the anchor so the next pass starts fresh on a new clock.
    pub fn reset(&mut self) {
        self.next_beat_sec = None;
    }

    /// Beats falling inside `[.., now + lookahead)` that have not been emitted yet.
    pub fn due(&mut self, now_sec: f64) -> SmallVec<[ScheduledBeat; 4]> {
        let mut out = SmallVec::new();
        let mut next = match self.next_beat_sec {
            // Fell behind by more than a beat (suspended tab): re-anchor instead of bursting.
            Some(t) if t + self.interval_sec < now_sec => now_sec,
            Some(t) => t,
            None => now_sec,
        };
        let horizon = now_sec + self.lookahead_sec;
        while next < horizon {
            out.push(ScheduledBeat {
                at_sec: next,
                interval_sec: self.interval_sec,
            });
            next += self.interval_sec;
        }
        self.next_beat_sec = Some(next);
        out
    }
}

#[inline]
pub fn interval_for_bpm(bpm: f32) -> f64 {
    let bpm = if bpm.is_finite() {
        bpm.clamp(MIN_SCHEDULE_BPM, MAX_SCHEDULE_BPM)
    } else {
        REST_RATE_BPM
    };
    (60_000.0 / bpm as f64) / 1000.0
}

/// One tone burst with fast exponential pitch and gain decay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Thump {
    pub start_sec: f64,
    pub freq_hz: f32,
    pub volume: f32,
    pub pitch_end_hz: f32,
    pub pitch_ramp_end_sec: f64,
    pub gain_end: f32,
    pub gain_ramp_end_sec: f64,
    pub stop_sec: f64,
}

impl Thump {
    pub fn new(start_sec: f64, freq_hz: f32, volume: f32) -> Self {
        Self {
            start_sec,
            freq_hz,
            volume,
            pitch_end_hz: THUMP_PITCH_END_HZ,
            pitch_ramp_end_sec: start_sec + THUMP_PITCH_RAMP_SEC,
            gain_end: THUMP_GAIN_END,
            gain_ramp_end_sec: start_sec + THUMP_GAIN_RAMP_SEC,
            stop_sec: start_sec + THUMP_STOP_SEC,
        }
    }
}

/// "Lubb" then "dupp".
pub fn heartbeat_unit(at_sec: f64) -> [Thump; 2] {
    [
        Thump::new(at_sec, LUBB_FREQ_HZ, LUBB_VOLUME),
        Thump::new(at_sec + DUPP_OFFSET_SEC, DUPP_FREQ_HZ, DUPP_VOLUME),
    ]
}
