// Shared session/particle/audio tuning constants used by the core engine.

// Heart rate (BPM)
pub const REST_RATE_BPM: f32 = 60.0; // resting rate and hard floor
pub const MIN_SCHEDULE_BPM: f32 = 1.0; // guards the beat interval against division by zero
pub const MAX_SCHEDULE_BPM: f32 = 600.0; // keeps a look-ahead pass to a handful of beats

// Session progress
pub const PROGRESS_MAX: f32 = 100.0;
pub const SCROLL_PROGRESS_MAX: f32 = 100.0;

// Particle field
pub const MAX_PARTICLES: usize = 120;
pub const SPAWN_CHANCE_AT_REST: f32 = 0.1; // per-frame spawn probability at REST_RATE_BPM
pub const SPAWN_OFFSET_PX: f32 = 20.0; // spawn this far below the bottom edge
pub const TOP_MARGIN_PX: f32 = 50.0; // retire once above -TOP_MARGIN_PX
pub const OPACITY_DECAY_PER_FRAME: f32 = 0.001;
pub const DRIFT_AMPLITUDE_PX: f32 = 0.35; // sinusoidal sideways sway per frame
pub const DRIFT_FREQ_PER_MS: f32 = 0.001;
pub const SPARKLE_SPIN_DEG_PER_FRAME: f32 = 2.0;

// Spawn mix (cumulative thresholds on a uniform roll)
pub const HEART_SHARE: f32 = 0.80;
pub const GLOW_SHARE: f32 = 0.12; // remainder is sparkle

// Heartbeat audio
pub const LOOKAHEAD_SEC: f64 = 0.1;
pub const LUBB_FREQ_HZ: f32 = 60.0;
pub const LUBB_VOLUME: f32 = 0.3;
pub const DUPP_FREQ_HZ: f32 = 50.0;
pub const DUPP_VOLUME: f32 = 0.2;
pub const DUPP_OFFSET_SEC: f64 = 0.15; // "dupp" follows "lubb" by this much
pub const THUMP_PITCH_END_HZ: f32 = 1.0;
pub const THUMP_PITCH_RAMP_SEC: f64 = 0.1;
pub const THUMP_GAIN_END: f32 = 0.001; // exponential ramps cannot reach zero
pub const THUMP_GAIN_RAMP_SEC: f64 = 0.15;
pub const THUMP_STOP_SEC: f64 = 0.2;

// Typewriter
pub const TYPEWRITER_DELAY_MS: u64 = 30;
