// Host-side tests for the typewriter reveal.

use heartbeat_sync::core::*;
use std::time::Duration;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn reveals_love_and_completes_once() {
    let mut tw = Typewriter::new("Love", ms(10));
    assert_eq!(tw.tick(ms(0)), None);
    assert_eq!(tw.revealed(), "");

    let mut completions = 0;
    for _ in 0..4 {
        if tw.tick(ms(10)) == Some(TypewriterEvent::Completed) {
            completions += 1;
        }
    }
    assert_eq!(tw.revealed(), "Love");
    assert_eq!(completions, 1);

    // Left mounted for another 500 ms with no text change.
    for _ in 0..50 {
        assert_eq!(tw.tick(ms(10)), None);
    }
    assert_eq!(tw.revealed(), "Love");
}

#[test]
fn one_char_per_delay() {
    let mut tw = Typewriter::new("Love", ms(10));
    tw.tick(ms(10));
    assert_eq!(tw.revealed(), "L");
    tw.tick(ms(9));
    assert_eq!(tw.revealed(), "L");
    tw.tick(ms(1));
    assert_eq!(tw.revealed(), "Lo");
}

#[test]
fn large_step_reveals_several_chars() {
    let mut tw = Typewriter::new("Love", ms(10));
    assert_eq!(tw.tick(ms(25)), None);
    assert_eq!(tw.revealed(), "Lo");
    assert_eq!(tw.tick(ms(1000)), Some(TypewriterEvent::Completed));
    assert!(tw.is_complete());
}

#[test]
fn same_text_does_not_restart() {
    let mut tw = Typewriter::new("Love", ms(10));
    tw.tick(ms(40));
    assert!(!tw.set_text("Love"));
    assert_eq!(tw.revealed(), "Love");
    assert_eq!(tw.tick(ms(10)), None);
}

#[test]
fn new_text_restarts_from_empty_and_completes_again() {
    let mut tw = Typewriter::new("Love", ms(10));
    tw.tick(ms(40));
    assert!(tw.set_text("Heart"));
    assert_eq!(tw.revealed(), "");
    assert_eq!(tw.text(), "Heart");
    let mut completions = 0;
    for _ in 0..10 {
        if tw.tick(ms(10)).is_some() {
            completions += 1;
        }
    }
    assert_eq!(tw.revealed(), "Heart");
    assert_eq!(completions, 1);
}

#[test]
fn multibyte_text_is_cut_on_char_boundaries() {
    let mut tw = Typewriter::new("don’t…", ms(5));
    tw.tick(ms(20));
    assert_eq!(tw.revealed(), "don’");
    tw.tick(ms(10));
    assert_eq!(tw.revealed(), "don’t…");
}

#[test]
fn empty_text_completes_immediately() {
    let mut tw = Typewriter::new("", ms(10));
    assert_eq!(tw.tick(ms(0)), Some(TypewriterEvent::Completed));
    assert_eq!(tw.tick(ms(10)), None);
}

#[test]
fn zero_delay_reveals_everything_at_once() {
    let mut tw = Typewriter::new("Love", Duration::ZERO);
    assert_eq!(tw.tick(ms(0)), Some(TypewriterEvent::Completed));
    assert_eq!(tw.revealed(), "Love");
}

#[test]
fn default_cadence_is_thirty_ms() {
    let mut tw = Typewriter::with_default_delay("ab");
    tw.tick(ms(29));
    assert_eq!(tw.revealed(), "");
    tw.tick(ms(1));
    assert_eq!(tw.revealed(), "a");
}
