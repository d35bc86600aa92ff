use rand::rngs::StdRng;
use rand::Rng;

/// Source of uniform samples in `[0, 1)`.
///
/// The particle field and input sampler draw every random decision through
/// this trait so tests can swap in a seeded or scripted sequence.
pub trait RandomSource {
    fn next_unit(&mut self) -> f32;

    /// Uniform sample in `[lo, hi)`.
    fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (hi - lo) * self.next_unit()
    }

    /// Bernoulli trial with the given probability.
    fn chance(&mut self, probability: f32) -> bool {
        self.next_unit() < probability
    }
}

impl RandomSource for StdRng {
    fn next_unit(&mut self) -> f32 {
        self.gen::<f32>()
    }
}
