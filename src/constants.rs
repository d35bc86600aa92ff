//! Browser-side wiring and presentation constants.
//!
//! Element ids name the markup contract with `index.html`; the remaining
//! values tune timing and visuals and keep magic numbers out of the code.

// Element ids
pub const CANVAS_ID: &str = "particle-canvas";
pub const START_SCREEN_ID: &str = "start-screen";
pub const START_BUTTON_ID: &str = "start-button";
pub const STAGE_ID: &str = "stage";
pub const HEART_ID: &str = "heart";
pub const HEART_GLOW_ID: &str = "heart-glow";
pub const QUOTE_ID: &str = "quote";
pub const FINALE_ID: &str = "finale";
pub const RESET_BUTTON_ID: &str = "reset-button";
pub const AUDIO_TOGGLE_ID: &str = "audio-toggle";
pub const HUD_RATE_ID: &str = "hud-rate";
pub const HUD_LEVEL_ID: &str = "hud-level";

// Body attribute selecting the experience variant
pub const VARIANT_ATTR: &str = "data-variant";

// Audio scheduler pass period (ms of wall-clock time)
pub const SCHEDULER_PASS_MS: i32 = 50;

// Wall-clock poll for the rate cool-down; runs apart from the frame loop
pub const COOLDOWN_POLL_MS: i32 = 100;

// Heart glow grows with accumulated interactions
pub const GLOW_SCALE_PER_INTERACTION: f32 = 0.05;
pub const GLOW_BLUR_BASE_PX: f32 = 40.0;
pub const GLOW_BLUR_PER_INTERACTION_PX: f32 = 5.0;
pub const GLOW_SCALE_MAX: f32 = 3.0;
pub const GLOW_BLUR_MAX_PX: f32 = 160.0;

// Particle palette (r, g, b)
pub const HEART_RGB: (u8, u8, u8) = (255, 77, 109);
pub const GLOW_RGB: (u8, u8, u8) = (255, 117, 143);
pub const SPARKLE_RGB: (u8, u8, u8) = (255, 240, 245);

// Frame delta clamp; avoids a giant step after the tab was hidden
pub const MAX_FRAME_DT_MS: u64 = 250;
