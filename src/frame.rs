use crate::app::SharedExperience;
use crate::constants::{COOLDOWN_POLL_MS, MAX_FRAME_DT_MS, QUOTE_ID};
use crate::content;
use crate::core::{
    ElapsedClock, Particle, ParticleField, SessionSnapshot, Typewriter, TypewriterEvent,
};
use crate::dom;
use crate::overlay;
use crate::render::CanvasSurface;
use crate::timers::{AnimationLoop, Interval};
use instant::Instant;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use web_sys as web;

pub type SharedFrame = Rc<RefCell<FrameContext>>;

/// Everything the animation frame touches. Reads the session snapshot and
/// never writes session state.
pub struct FrameContext {
    pub experience: SharedExperience,
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub surface: Option<CanvasSurface>,
    pub field: ParticleField<StdRng>,
    pub typewriter: Option<Typewriter>,
    pub shown_index: Option<usize>,
    pub shown_chars: usize,
    pub last_snapshot: Option<SessionSnapshot>,
    pub retired: Vec<Particle>,
    pub origin: Instant,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn new(
        experience: SharedExperience,
        document: web::Document,
        canvas: web::HtmlCanvasElement,
        field: ParticleField<StdRng>,
    ) -> Self {
        let now = Instant::now();
        let mut ctx = Self {
            experience,
            document,
            canvas,
            surface: None,
            field,
            typewriter: None,
            shown_index: None,
            shown_chars: 0,
            last_snapshot: None,
            retired: Vec::new(),
            origin: now,
            last_instant: now,
        };
        ctx.sync_surface();
        ctx
    }

    /// Resync canvas size with the viewport and (re)acquire the 2D context.
    pub fn sync_surface(&mut self) {
        let (w, h) = dom::sync_canvas_to_viewport(&self.canvas);
        self.field.resize(w as f32, h as f32);
        if self.surface.is_none() {
            match CanvasSurface::acquire(&self.canvas) {
                Ok(s) => self.surface = Some(s),
                Err(e) => log::warn!("[particles] {}", e),
            }
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).min(Duration::from_millis(MAX_FRAME_DT_MS));
        self.last_instant = now;
        let now_ms = (now - self.origin).as_secs_f64() * 1000.0;

        let snap = self.experience.borrow().controller().snapshot();

        self.field
            .tick(self.surface.as_mut(), snap.heart_rate, now_ms, &mut self.retired);
        self.retired.clear();

        self.update_narrative(&snap, dt);

        if self.last_snapshot != Some(snap) {
            overlay::update_heart(&self.document, &snap);
            overlay::update_hud(&self.document, &snap);
            self.last_snapshot = Some(snap);
        }
    }

    /// Forget what is on screen so the next frame redraws from the reset state.
    pub fn reset_presentation(&mut self) {
        self.typewriter = None;
        self.shown_index = None;
        self.shown_chars = 0;
        self.last_snapshot = None;
        self.field.clear();
        dom::set_text(&self.document, QUOTE_ID, "");
    }

    fn update_narrative(&mut self, snap: &SessionSnapshot, dt: Duration) {
        if snap.narrative_index != self.shown_index {
            self.shown_index = snap.narrative_index;
            self.shown_chars = 0;
            match snap.narrative_index.and_then(content::quote) {
                Some(text) => match &mut self.typewriter {
                    Some(tw) => {
                        tw.set_text(text);
                    }
                    None => self.typewriter = Some(Typewriter::with_default_delay(text)),
                },
                None => self.typewriter = None,
            }
            dom::set_text(&self.document, QUOTE_ID, "");
        }

        let Some(tw) = &mut self.typewriter else {
            return;
        };
        if let Some(TypewriterEvent::Completed) = tw.tick(dt) {
            log::debug!("[typewriter] completed entry {:?}", self.shown_index);
        }
        let visible = tw.revealed();
        let chars = visible.chars().count();
        if chars != self.shown_chars {
            self.shown_chars = chars;
            dom::set_text(&self.document, QUOTE_ID, visible);
        }
    }
}

pub fn start_loop(frame_ctx: SharedFrame) -> AnimationLoop {
    AnimationLoop::start(move || {
        frame_ctx.borrow_mut().frame();
    })
}

/// Drive the session cool-down from real elapsed time, apart from the frame
/// loop. Keeps running while rAF is paused in a hidden tab.
pub fn start_cooldown_clock(experience: SharedExperience) -> Option<Interval> {
    let origin = Instant::now();
    let mut clock = ElapsedClock::new();
    clock.elapsed(0.0);
    Interval::new(COOLDOWN_POLL_MS, move || {
        let now_ms = origin.elapsed().as_secs_f64() * 1000.0;
        let elapsed = clock.elapsed(now_ms);
        experience.borrow_mut().tick(elapsed);
    })
}
