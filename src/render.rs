use crate::constants::{GLOW_RGB, HEART_RGB, SPARKLE_RGB};
use crate::core::{Particle, ParticleKind, ParticleSurface};
use crate::error::WebError;
use std::f64::consts::{PI, TAU};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas 2D target for the particle field.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn acquire(canvas: &web::HtmlCanvasElement) -> Result<Self, WebError> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or(WebError::SurfaceUnavailable)?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| WebError::SurfaceUnavailable)?;
        Ok(Self { ctx })
    }

    fn fill_rgba(&self, (r, g, b): (u8, u8, u8), alpha: f32) {
        self.ctx
            .set_fill_style_str(&format!("rgba({r}, {g}, {b}, {:.3})", alpha.clamp(0.0, 1.0)));
    }

    // Two lobes and a point, drawn in a `size` box anchored at the origin.
    fn heart_path(&self, d: f64) {
        let c = &self.ctx;
        c.begin_path();
        c.move_to(0.0, d / 4.0);
        c.quadratic_curve_to(0.0, 0.0, d / 4.0, 0.0);
        c.quadratic_curve_to(d / 2.0, 0.0, d / 2.0, d / 4.0);
        c.quadratic_curve_to(d / 2.0, 0.0, 3.0 * d / 4.0, 0.0);
        c.quadratic_curve_to(d, 0.0, d, d / 4.0);
        c.quadratic_curve_to(d, d / 2.0, d / 2.0, 3.0 * d / 4.0);
        c.quadratic_curve_to(0.0, d / 2.0, 0.0, d / 4.0);
    }

    fn glow_orb(&self, size: f64, opacity: f32) {
        // Concentric discs approximate a soft falloff without gradients.
        for (k, scale) in [1.0_f64, 0.66, 0.33].iter().enumerate() {
            self.fill_rgba(GLOW_RGB, opacity * (0.35 + 0.3 * k as f32));
            self.ctx.begin_path();
            _ = self.ctx.arc(0.0, 0.0, size * 0.5 * scale, 0.0, TAU);
            self.ctx.fill();
        }
    }

    fn sparkle(&self, size: f64, opacity: f32) {
        self.fill_rgba(SPARKLE_RGB, opacity);
        let r = size;
        let w = size * 0.25;
        for _ in 0..2 {
            self.ctx.fill_rect(-w / 2.0, -r, w, 2.0 * r);
            _ = self.ctx.rotate(PI / 2.0);
        }
    }
}

impl ParticleSurface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn draw_particle(&mut self, p: &Particle) {
        let opacity = p.opacity.max(0.0);
        let size = p.size.max(0.0) as f64;
        if opacity <= 0.0 || size <= 0.0 {
            return;
        }
        self.ctx.save();
        _ = self
            .ctx
            .translate(p.position.x as f64, p.position.y as f64);
        match p.kind {
            ParticleKind::Heart => {
                self.heart_path(size);
                self.fill_rgba(HEART_RGB, opacity);
                self.ctx.fill();
            }
            ParticleKind::Glow => self.glow_orb(size, opacity),
            ParticleKind::Sparkle => {
                _ = self.ctx.rotate((p.rotation as f64).to_radians());
                self.sparkle(size, opacity);
            }
        }
        self.ctx.restore();
    }
}
