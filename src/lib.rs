pub mod constants;
pub mod content;
pub mod core;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod audio;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod error;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod overlay;
#[cfg(target_arch = "wasm32")]
mod render;
#[cfg(target_arch = "wasm32")]
mod timers;

#[cfg(target_arch = "wasm32")]
pub use web_entry::start;

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use crate::app::Experience;
    use crate::constants::{CANVAS_ID, VARIANT_ATTR};
    use crate::content::QUOTES;
    use crate::core::{ParticleConfig, ParticleField, Variant};
    use crate::events::{wire_input_handlers, InputSource, InputWiring};
    use crate::frame::{self, FrameContext};
    use crate::{dom, overlay};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::spawn_local;

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("heartbeat-sync starting");

        spawn_local(async move {
            if let Err(e) = init().await {
                log::error!("init error: {:?}", e);
            }
        });
        Ok(())
    }

    async fn init() -> anyhow::Result<()> {
        static STARTED: AtomicBool = AtomicBool::new(false);
        if STARTED.swap(true, Ordering::SeqCst) {
            log::warn!("init already ran; ignoring");
            return Ok(());
        }

        let window = dom::window()?;
        let document = window
            .document()
            .ok_or(crate::error::WebError::NoDocument)?;
        let canvas = dom::canvas(&document, CANVAS_ID)?;

        let variant = match dom::body_attribute(&document, VARIANT_ATTR) {
            Some(raw) => raw.parse::<Variant>().unwrap_or_else(|e| {
                log::warn!("{}; falling back to {}", e, Variant::default());
                Variant::default()
            }),
            None => Variant::default(),
        };

        let experience = Rc::new(RefCell::new(Experience::new(
            variant,
            QUOTES.len(),
            StdRng::from_entropy(),
        )));
        let field = ParticleField::new(ParticleConfig::default(), StdRng::from_entropy());
        let frame_ctx = Rc::new(RefCell::new(FrameContext::new(
            experience.clone(),
            document.clone(),
            canvas,
            field,
        )));

        overlay::show_start(&document);

        let wiring = InputWiring {
            window: window.clone(),
            document: document.clone(),
            experience: experience.clone(),
            frame: frame_ctx.clone(),
        };
        let input = Rc::new(RefCell::new(InputSource::new()));
        wire_input_handlers(&wiring, &mut input.borrow_mut());

        let animation = Rc::new(frame::start_loop(frame_ctx));
        let cooldown = Rc::new(RefCell::new(frame::start_cooldown_clock(experience.clone())));
        if cooldown.borrow().is_none() {
            log::warn!("[session] cool-down clock unavailable");
        }

        // Back/forward cache: release audio while hidden, re-acquire on return.
        let exp_show = experience.clone();
        input.borrow_mut().subscribe(&window, "pageshow", move |ev| {
            if is_persisted(&ev) {
                exp_show.borrow_mut().resume();
            }
        });

        // Final teardown: stop the frame loop and cool-down clock, release
        // audio, drop every listener. Deferred so the pagehide listener is not
        // dropped while it runs. The id doubles as a run-once guard.
        let pagehide_id = Rc::new(Cell::new(None));
        let input_td = input.clone();
        let pagehide_id_td = pagehide_id.clone();
        let id = input.borrow_mut().subscribe(&window, "pagehide", move |ev| {
            if is_persisted(&ev) {
                experience.borrow_mut().shutdown();
                log::info!("[session] suspended for back/forward cache");
                return;
            }
            let input = input_td.clone();
            let animation = animation.clone();
            let cooldown = cooldown.clone();
            let experience = experience.clone();
            let pagehide_id = pagehide_id_td.clone();
            spawn_local(async move {
                let Some(own_id) = pagehide_id.take() else {
                    return;
                };
                if animation.is_running() {
                    animation.cancel();
                }
                cooldown.borrow_mut().take();
                experience.borrow_mut().shutdown();
                let mut input = input.borrow_mut();
                input.unsubscribe(own_id);
                input.clear();
                log::info!("torn down");
            });
        });
        pagehide_id.set(id);

        log::info!("[init] ready (variant {})", variant);
        Ok(())
    }

    fn is_persisted(ev: &web_sys::Event) -> bool {
        ev.dyn_ref::<web_sys::PageTransitionEvent>()
            .is_some_and(|e| e.persisted())
    }
}
