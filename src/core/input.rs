use crate::core::constants::SCROLL_PROGRESS_MAX;
use crate::core::rng::RandomSource;
use fnv::FnvHashMap;
use std::time::Duration;

/// Filter for high-frequency input (pointer move, scroll) so that not every
/// pixel of movement counts as an interaction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SamplingPolicy {
    /// Accept each raw event with a fixed probability.
    CoinFlip { probability: f32 },
    /// Accept at most one event per `min_interval`.
    Throttle { min_interval: Duration },
}

#[derive(Clone, Debug)]
pub struct InputSampler {
    policy: SamplingPolicy,
    last_accepted_ms: Option<f64>,
}

impl InputSampler {
    pub fn new(policy: SamplingPolicy) -> Self {
        Self {
            policy,
            last_accepted_ms: None,
        }
    }

    pub fn policy(&self) -> SamplingPolicy {
        self.policy
    }

    /// Decide whether a raw event observed at `now_ms` should count.
    pub fn accept(&mut self, now_ms: f64, rng: &mut impl RandomSource) -> bool {
        match self.policy {
            SamplingPolicy::CoinFlip { probability } => rng.chance(probability.clamp(0.0, 1.0)),
            SamplingPolicy::Throttle { min_interval } => {
                let min_ms = min_interval.as_secs_f64() * 1000.0;
                match self.last_accepted_ms {
                    Some(last) if now_ms - last < min_ms => false,
                    _ => {
                        self.last_accepted_ms = Some(now_ms);
                        true
                    }
                }
            }
        }
    }

    pub fn reset(&mut self) {
        self.last_accepted_ms = None;
    }
}

/// Raw scroll geometry of the scrolling element, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f32,
    pub scroll_height: f32,
    pub client_height: f32,
}

impl ScrollMetrics {
    /// Scroll depth in `[0, 100]`. A page that cannot scroll reports 0.
    pub fn progress(&self) -> f32 {
        let range = self.scroll_height - self.client_height;
        if !(range > 0.0) || !self.scroll_top.is_finite() {
            return 0.0;
        }
        (self.scroll_top / range * SCROLL_PROGRESS_MAX).clamp(0.0, SCROLL_PROGRESS_MAX)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u32);

/// Bookkeeping for live event subscriptions.
///
/// Whatever `T` does on drop (the web layer removes its DOM listener) runs
/// when an entry is unsubscribed, cleared, or when the registry itself drops.
#[derive(Debug)]
pub struct ListenerRegistry<T> {
    next_id: u32,
    entries: FnvHashMap<SubscriptionId, T>,
}

impl<T> Default for ListenerRegistry<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: FnvHashMap::default(),
        }
    }
}

impl<T> ListenerRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entry: T) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.entries.insert(id, entry);
        id
    }

    pub fn remove(&mut self, id: SubscriptionId) -> Option<T> {
        self.entries.remove(&id)
    }

    pub fn contains(&self, id: SubscriptionId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
