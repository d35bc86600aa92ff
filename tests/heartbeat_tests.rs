// Host-side tests for the look-ahead beat schedule and heartbeat envelope.

use heartbeat_sync::core::constants::{DUPP_OFFSET_SEC, LOOKAHEAD_SEC};
use heartbeat_sync::core::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Run scheduler passes every 50 ms until `until_sec`, collecting beat times.
fn run_passes(schedule: &mut BeatSchedule, from_sec: f64, until_sec: f64) -> Vec<f64> {
    let mut out = Vec::new();
    let mut t = from_sec;
    while t < until_sec {
        out.extend(schedule.due(t).iter().map(|b| b.at_sec));
        t += 0.05;
    }
    out
}

#[test]
fn interval_matches_bpm() {
    assert!(approx(interval_for_bpm(60.0), 1.0));
    assert!(approx(interval_for_bpm(120.0), 0.5));
    assert!(approx(interval_for_bpm(160.0), 0.375));
}

#[test]
fn degenerate_bpm_is_clamped() {
    assert!(interval_for_bpm(0.0).is_finite());
    assert!(interval_for_bpm(-10.0) > 0.0);
    assert!(approx(interval_for_bpm(f32::NAN), 1.0));
    assert!(interval_for_bpm(1.0e9) >= 0.1);
}

#[test]
fn first_pass_anchors_to_now() {
    let mut s = BeatSchedule::new(60.0, LOOKAHEAD_SEC);
    assert_eq!(s.next_beat_sec(), None);
    let beats = s.due(3.0);
    assert_eq!(beats.len(), 1);
    assert!(approx(beats[0].at_sec, 3.0));
    assert!(approx(s.next_beat_sec().unwrap(), 4.0));
}

#[test]
fn beats_are_only_emitted_inside_lookahead() {
    let mut s = BeatSchedule::new(60.0, LOOKAHEAD_SEC);
    s.due(0.0);
    assert!(s.due(0.5).is_empty());
    assert!(s.due(0.85).is_empty());
    let beats = s.due(0.95);
    assert_eq!(beats.len(), 1);
    assert!(approx(beats[0].at_sec, 1.0));
}

#[test]
fn steady_rate_gives_even_spacing_without_duplicates() {
    let mut s = BeatSchedule::new(90.0, LOOKAHEAD_SEC);
    let beats = run_passes(&mut s, 0.0, 10.0);
    assert!(beats.len() >= 14);
    for w in beats.windows(2) {
        assert!((w[1] - w[0] - 60.0 / 90.0).abs() < 1e-9);
    }
}

#[test]
fn rate_change_applies_forward_only() {
    let mut s = BeatSchedule::new(60.0, LOOKAHEAD_SEC);
    let first = s.due(0.0);
    assert!(approx(first[0].at_sec, 0.0));
    assert!(approx(first[0].interval_sec, 1.0));

    s.set_rate(120.0);
    // Beat at 1.0 was placed under the old interval and keeps its time.
    let beats = run_passes(&mut s, 0.05, 3.0);
    assert!(approx(beats[0], 1.0));
    for w in beats.windows(2) {
        assert!(approx(w[1] - w[0], 0.5), "spacing {}", w[1] - w[0]);
    }
}

#[test]
fn reset_starts_fresh_schedule() {
    let mut s = BeatSchedule::new(60.0, LOOKAHEAD_SEC);
    s.due(0.0);
    s.reset();
    assert_eq!(s.next_beat_sec(), None);
    // New clock starts near zero again.
    let beats = s.due(0.02);
    assert!(approx(beats[0].at_sec, 0.02));
}

#[test]
fn stalled_schedule_reanchors_instead_of_bursting() {
    let mut s = BeatSchedule::new(120.0, LOOKAHEAD_SEC);
    s.due(0.0);
    // Tab was hidden for a minute.
    let beats = s.due(60.0);
    assert_eq!(beats.len(), 1);
    assert!(approx(beats[0].at_sec, 60.0));
}

#[test]
fn heartbeat_unit_is_lubb_then_dupp() {
    let [lubb, dupp] = heartbeat_unit(2.0);
    assert!(approx(lubb.start_sec, 2.0));
    assert!(approx(dupp.start_sec, 2.0 + DUPP_OFFSET_SEC));
    assert!(lubb.freq_hz > dupp.freq_hz);
    assert!(lubb.volume > dupp.volume);
    for t in [lubb, dupp] {
        assert!(t.pitch_end_hz > 0.0 && t.pitch_end_hz < t.freq_hz);
        assert!(t.gain_end > 0.0 && t.gain_end < t.volume);
        assert!(t.pitch_ramp_end_sec > t.start_sec);
        assert!(t.gain_ramp_end_sec > t.start_sec);
        assert!(t.stop_sec >= t.gain_ramp_end_sec);
        assert!(t.stop_sec - t.start_sec <= 0.2 + 1e-9);
    }
}

#[test]
fn units_do_not_overlap_at_cap_rate() {
    let interval = interval_for_bpm(160.0);
    let [_, dupp] = heartbeat_unit(0.0);
    let [next_lubb, _] = heartbeat_unit(interval);
    assert!(dupp.gain_ramp_end_sec <= next_lubb.start_sec);
}
