use crate::constants::*;
use crate::core::{InteractionOutcome, SessionSnapshot};
use crate::dom;
use web_sys as web;

#[inline]
pub fn show_start(document: &web::Document) {
    dom::set_hidden(document, START_SCREEN_ID, false);
    dom::set_hidden(document, STAGE_ID, true);
    dom::set_hidden(document, FINALE_ID, true);
    dom::set_hidden(document, AUDIO_TOGGLE_ID, true);
}

#[inline]
pub fn show_stage(document: &web::Document) {
    dom::set_hidden(document, START_SCREEN_ID, true);
    dom::set_hidden(document, STAGE_ID, false);
    dom::set_hidden(document, AUDIO_TOGGLE_ID, false);
}

#[inline]
pub fn show_finale(document: &web::Document) {
    dom::set_hidden(document, FINALE_ID, false);
}

/// React to the result of a single input.
pub fn present(document: &web::Document, outcome: InteractionOutcome) {
    if outcome.finished_now {
        show_finale(document);
    }
}

pub fn set_audio_indicator(document: &web::Document, enabled: bool) {
    if let Some(el) = document.get_element_by_id(AUDIO_TOGGLE_ID) {
        _ = el.set_attribute("data-enabled", if enabled { "1" } else { "0" });
    }
}

/// Pulse period and glow follow the heart rate and interaction count.
pub fn update_heart(document: &web::Document, snap: &SessionSnapshot) {
    if let Some(heart) = dom::html_element(document, HEART_ID) {
        _ = heart
            .style()
            .set_property("--pulse-duration", &format!("{:.3}s", snap.pulse_period_sec()));
    }
    if let Some(glow) = dom::html_element(document, HEART_GLOW_ID) {
        let n = snap.interaction_count as f32;
        let scale = (1.0 + n * GLOW_SCALE_PER_INTERACTION).min(GLOW_SCALE_MAX);
        let blur = (GLOW_BLUR_BASE_PX + n * GLOW_BLUR_PER_INTERACTION_PX).min(GLOW_BLUR_MAX_PX);
        let style = glow.style();
        _ = style.set_property("transform", &format!("scale({scale:.2})"));
        _ = style.set_property("filter", &format!("blur({blur:.0}px)"));
    }
}

pub fn update_hud(document: &web::Document, snap: &SessionSnapshot) {
    dom::set_text(
        document,
        HUD_RATE_ID,
        &format!("SYNC RATE: {:.0} BPM", snap.heart_rate),
    );
    dom::set_text(
        document,
        HUD_LEVEL_ID,
        &format!("INTIMACY LVL: {}", snap.interaction_count),
    );
}
