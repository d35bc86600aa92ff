//! Floating particle field.
//!
//! Spawn rate and upward speed both scale with the supplied intensity (the
//! session heart rate), so the visual density follows the session without the
//! state machine knowing anything about rendering.

use crate::core::constants::*;
use crate::core::rng::RandomSource;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleKind {
    Heart,
    Glow,
    Sparkle,
}

impl ParticleKind {
    fn roll(u: f32) -> Self {
        if u < HEART_SHARE {
            ParticleKind::Heart
        } else if u < HEART_SHARE + GLOW_SHARE {
            ParticleKind::Glow
        } else {
            ParticleKind::Sparkle
        }
    }

    fn size_range(self) -> (f32, f32) {
        match self {
            ParticleKind::Heart => (5.0, 20.0),
            ParticleKind::Glow => (12.0, 32.0),
            ParticleKind::Sparkle => (2.0, 6.0),
        }
    }

    fn opacity_range(self) -> (f32, f32) {
        match self {
            ParticleKind::Heart => (0.2, 0.7),
            ParticleKind::Glow => (0.1, 0.35),
            ParticleKind::Sparkle => (0.4, 0.9),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub id: u64,
    pub kind: ParticleKind,
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    pub opacity: f32,
    /// Degrees.
    pub rotation: f32,
}

impl Particle {
    #[inline]
    pub fn is_expired(&self, top_margin: f32) -> bool {
        self.opacity <= 0.0 || self.position.y < -top_margin
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleConfig {
    pub max_particles: usize,
    /// Spawn probability per frame when intensity equals `rest_intensity`.
    pub spawn_chance: f32,
    pub rest_intensity: f32,
    pub spawn_offset: f32,
    pub top_margin: f32,
    pub opacity_decay: f32,
    pub drift_amplitude: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            max_particles: MAX_PARTICLES,
            spawn_chance: SPAWN_CHANCE_AT_REST,
            rest_intensity: REST_RATE_BPM,
            spawn_offset: SPAWN_OFFSET_PX,
            top_margin: TOP_MARGIN_PX,
            opacity_decay: OPACITY_DECAY_PER_FRAME,
            drift_amplitude: DRIFT_AMPLITUDE_PX,
        }
    }
}

/// Drawing target for the field. Implemented by the canvas renderer.
pub trait ParticleSurface {
    fn clear(&mut self, width: f32, height: f32);
    fn draw_particle(&mut self, particle: &Particle);
}

pub struct ParticleField<R: RandomSource> {
    config: ParticleConfig,
    rng: R,
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    next_id: u64,
}

impl<R: RandomSource> ParticleField<R> {
    pub fn new(config: ParticleConfig, rng: R) -> Self {
        let cap = config.max_particles;
        Self {
            config,
            rng,
            particles: Vec::with_capacity(cap),
            width: 0.0,
            height: 0.0,
            next_id: 0,
        }
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Resync to the drawing surface; later spawns use these dimensions.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// One animation frame. Without a surface the frame is skipped entirely.
    pub fn tick<S: ParticleSurface>(
        &mut self,
        surface: Option<&mut S>,
        intensity: f32,
        now_ms: f64,
        retired: &mut Vec<Particle>,
    ) {
        let Some(surface) = surface else {
            return;
        };
        self.step(intensity, now_ms, retired);
        self.draw(surface);
    }

    /// Spawn, move, fade and retire. Retired particles are appended to `retired`.
    pub fn step(&mut self, intensity: f32, now_ms: f64, retired: &mut Vec<Particle>) {
        let scale = self.intensity_scale(intensity);
        if self.particles.len() < self.config.max_particles
            && self.width > 0.0
            && self.rng.chance(self.config.spawn_chance * scale)
        {
            let p = self.spawn(scale);
            self.particles.push(p);
        }

        let phase_t = (now_ms as f32) * DRIFT_FREQ_PER_MS;
        let mut i = 0;
        while i < self.particles.len() {
            let p = &mut self.particles[i];
            p.position += p.velocity;
            p.position.x += (phase_t + p.id as f32 * 0.7).sin() * self.config.drift_amplitude;
            p.opacity -= self.config.opacity_decay;
            if p.kind == ParticleKind::Sparkle {
                p.rotation = (p.rotation + SPARKLE_SPIN_DEG_PER_FRAME) % 360.0;
            }
            if p.is_expired(self.config.top_margin) {
                retired.push(self.particles.swap_remove(i));
            } else {
                i += 1;
            }
        }
    }

    pub fn draw<S: ParticleSurface>(&self, surface: &mut S) {
        surface.clear(self.width, self.height);
        for p in &self.particles {
            surface.draw_particle(p);
        }
    }

    fn intensity_scale(&self, intensity: f32) -> f32 {
        let rest = self.config.rest_intensity.max(1.0);
        if intensity.is_finite() {
            (intensity / rest).max(0.0)
        } else {
            1.0
        }
    }

    fn spawn(&mut self, scale: f32) -> Particle {
        let kind = ParticleKind::roll(self.rng.next_unit());
        let (size_lo, size_hi) = kind.size_range();
        let (op_lo, op_hi) = kind.opacity_range();
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        Particle {
            id,
            kind,
            position: Vec2::new(
                self.rng.range(0.0, self.width),
                self.height + self.config.spawn_offset,
            ),
            velocity: Vec2::new(
                self.rng.range(-0.75, 0.75),
                -self.rng.range(1.0, 3.0) * scale,
            ),
            size: self.rng.range(size_lo, size_hi),
            opacity: self.rng.range(op_lo, op_hi),
            rotation: self.rng.range(0.0, 360.0),
        }
    }
}
