// Host-side tests for constants and their mathematical relationships.

use heartbeat_sync::constants::*;
use heartbeat_sync::core::constants::*;
use heartbeat_sync::core::{interval_for_bpm, ExperienceConfig};

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    // Rates
    assert!(REST_RATE_BPM > 0.0);
    assert!(MIN_SCHEDULE_BPM > 0.0 && MIN_SCHEDULE_BPM <= REST_RATE_BPM);
    assert!(MAX_SCHEDULE_BPM > REST_RATE_BPM);

    // Probabilities and fades
    assert!(SPAWN_CHANCE_AT_REST > 0.0 && SPAWN_CHANCE_AT_REST <= 1.0);
    assert!(OPACITY_DECAY_PER_FRAME > 0.0 && OPACITY_DECAY_PER_FRAME < 1.0);
    assert!(MAX_PARTICLES > 0);

    // Geometry
    assert!(SPAWN_OFFSET_PX >= 0.0);
    assert!(TOP_MARGIN_PX >= 0.0);

    // Timing
    assert!(LOOKAHEAD_SEC > 0.0);
    assert!(TYPEWRITER_DELAY_MS > 0);
    assert!(SCHEDULER_PASS_MS > 0);
    assert!(MAX_FRAME_DT_MS > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn spawn_mix_shares_leave_room_for_sparkles() {
    assert!(HEART_SHARE > 0.0 && GLOW_SHARE > 0.0);
    assert!(HEART_SHARE + GLOW_SHARE < 1.0);
    assert!(HEART_SHARE > GLOW_SHARE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn thump_envelope_is_ordered() {
    assert!(THUMP_PITCH_END_HZ > 0.0);
    assert!(THUMP_PITCH_END_HZ < DUPP_FREQ_HZ && DUPP_FREQ_HZ < LUBB_FREQ_HZ);
    assert!(THUMP_GAIN_END > 0.0 && THUMP_GAIN_END < DUPP_VOLUME);
    assert!(DUPP_VOLUME < LUBB_VOLUME && LUBB_VOLUME <= 1.0);
    assert!(THUMP_PITCH_RAMP_SEC <= THUMP_GAIN_RAMP_SEC);
    assert!(THUMP_GAIN_RAMP_SEC <= THUMP_STOP_SEC);
}

#[test]
fn scheduler_keeps_up_with_every_variant_cap() {
    // A pass must run at least once per look-ahead window or beats slip.
    assert!((SCHEDULER_PASS_MS as f64) / 1000.0 < LOOKAHEAD_SEC);
    for config in [
        ExperienceConfig::heartbeat_sync(5),
        ExperienceConfig::scroll_story(5),
    ] {
        let interval = interval_for_bpm(config.effective_cap());
        assert!(DUPP_OFFSET_SEC + THUMP_GAIN_RAMP_SEC <= interval);
        assert!(config.effective_cap() <= MAX_SCHEDULE_BPM);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn glow_limits_exceed_their_base() {
    assert!(GLOW_SCALE_PER_INTERACTION > 0.0);
    assert!(GLOW_SCALE_MAX > 1.0);
    assert!(GLOW_BLUR_MAX_PX > GLOW_BLUR_BASE_PX);
    assert!(GLOW_BLUR_PER_INTERACTION_PX > 0.0);
}

#[test]
fn element_ids_are_distinct() {
    let ids = [
        CANVAS_ID,
        START_SCREEN_ID,
        START_BUTTON_ID,
        STAGE_ID,
        HEART_ID,
        HEART_GLOW_ID,
        QUOTE_ID,
        FINALE_ID,
        RESET_BUTTON_ID,
        AUDIO_TOGGLE_ID,
        HUD_RATE_ID,
        HUD_LEVEL_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
