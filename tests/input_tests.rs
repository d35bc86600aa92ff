// Host-side tests for input sampling, scroll depth and listener bookkeeping.

use heartbeat_sync::core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

#[test]
fn throttle_accepts_at_most_one_event_per_interval() {
    let mut sampler = InputSampler::new(SamplingPolicy::Throttle {
        min_interval: Duration::from_millis(100),
    });
    let mut rng = StdRng::seed_from_u64(1);
    assert!(sampler.accept(0.0, &mut rng));
    assert!(!sampler.accept(50.0, &mut rng));
    assert!(!sampler.accept(99.9, &mut rng));
    assert!(sampler.accept(100.0, &mut rng));
    assert!(!sampler.accept(150.0, &mut rng));

    // One second of 60 Hz pointer events: about ten accepted.
    let mut sampler = InputSampler::new(SamplingPolicy::Throttle {
        min_interval: Duration::from_millis(100),
    });
    let accepted = (0..60)
        .filter(|i| sampler.accept(*i as f64 * 16.667, &mut rng))
        .count();
    assert!((9..=11).contains(&accepted), "accepted {accepted}");
}

#[test]
fn throttle_reset_forgets_last_event() {
    let mut sampler = InputSampler::new(SamplingPolicy::Throttle {
        min_interval: Duration::from_millis(100),
    });
    let mut rng = StdRng::seed_from_u64(1);
    assert!(sampler.accept(0.0, &mut rng));
    sampler.reset();
    assert!(sampler.accept(10.0, &mut rng));
}

#[test]
fn coin_flip_accepts_roughly_its_probability() {
    let mut sampler = InputSampler::new(SamplingPolicy::CoinFlip { probability: 0.05 });
    let mut rng = StdRng::seed_from_u64(42);
    let accepted = (0..10_000)
        .filter(|i| sampler.accept(*i as f64, &mut rng))
        .count();
    assert!((350..=650).contains(&accepted), "accepted {accepted}");
}

#[test]
fn coin_flip_extremes() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut never = InputSampler::new(SamplingPolicy::CoinFlip { probability: 0.0 });
    let mut always = InputSampler::new(SamplingPolicy::CoinFlip { probability: 2.0 });
    for i in 0..1000 {
        assert!(!never.accept(i as f64, &mut rng));
        assert!(always.accept(i as f64, &mut rng));
    }
}

#[test]
fn scroll_progress_is_clamped_percentage() {
    let m = |top: f32| ScrollMetrics {
        scroll_top: top,
        scroll_height: 3000.0,
        client_height: 1000.0,
    };
    assert_eq!(m(0.0).progress(), 0.0);
    assert_eq!(m(1000.0).progress(), 50.0);
    assert_eq!(m(2000.0).progress(), 100.0);
    assert_eq!(m(2600.0).progress(), 100.0);
    assert_eq!(m(-40.0).progress(), 0.0);
}

#[test]
fn unscrollable_page_reports_zero() {
    let flat = ScrollMetrics {
        scroll_top: 0.0,
        scroll_height: 800.0,
        client_height: 800.0,
    };
    assert_eq!(flat.progress(), 0.0);
    assert_eq!(ScrollMetrics::default().progress(), 0.0);
    let nan = ScrollMetrics {
        scroll_top: f32::NAN,
        ..flat
    };
    assert_eq!(nan.progress(), 0.0);
}

/// Flags when dropped, standing in for a DOM listener removal.
struct DropFlag(Rc<Cell<u32>>);

impl Drop for DropFlag {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

#[test]
fn registry_unsubscribe_drops_only_that_entry() {
    let dropped = Rc::new(Cell::new(0));
    let mut reg = ListenerRegistry::new();
    let a = reg.insert(DropFlag(dropped.clone()));
    let b = reg.insert(DropFlag(dropped.clone()));
    assert_ne!(a, b);
    assert_eq!(reg.len(), 2);

    drop(reg.remove(a));
    assert_eq!(dropped.get(), 1);
    assert!(!reg.contains(a));
    assert!(reg.contains(b));
    assert!(reg.remove(a).is_none());
}

#[test]
fn registry_clear_and_drop_release_everything() {
    let dropped = Rc::new(Cell::new(0));
    let mut reg = ListenerRegistry::new();
    for _ in 0..5 {
        reg.insert(DropFlag(dropped.clone()));
    }
    reg.clear();
    assert_eq!(dropped.get(), 5);
    assert!(reg.is_empty());

    for _ in 0..3 {
        reg.insert(DropFlag(dropped.clone()));
    }
    drop(reg);
    assert_eq!(dropped.get(), 8);
}
