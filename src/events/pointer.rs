use crate::app::SharedExperience;
use crate::constants::*;
use crate::dom;
use crate::events::InputSource;
use crate::frame::SharedFrame;
use crate::overlay;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub window: web::Window,
    pub document: web::Document,
    pub experience: SharedExperience,
    pub frame: SharedFrame,
}

pub fn wire_input_handlers(w: &InputWiring, source: &mut InputSource) {
    wire_buttons(w, source);
    wire_heart(w, source);
    wire_pointermove(w, source);
    wire_scroll(w, source);
    wire_resize(w, source);
}

fn wire_buttons(w: &InputWiring, source: &mut InputSource) {
    if let Some(el) = w.document.get_element_by_id(START_BUTTON_ID) {
        let w = w.clone();
        source.subscribe(&el, "click", move |_ev| {
            let outcome = w.experience.borrow_mut().start();
            if let Some(outcome) = outcome {
                log::info!("[gesture] start");
                overlay::show_stage(&w.document);
                overlay::set_audio_indicator(&w.document, true);
                overlay::present(&w.document, outcome);
            }
        });
    }

    if let Some(el) = w.document.get_element_by_id(RESET_BUTTON_ID) {
        let w = w.clone();
        source.subscribe(&el, "click", move |_ev| {
            w.experience.borrow_mut().reset();
            w.frame.borrow_mut().reset_presentation();
            dom::scroll_to_top();
            overlay::show_start(&w.document);
        });
    }

    if let Some(el) = w.document.get_element_by_id(AUDIO_TOGGLE_ID) {
        let w = w.clone();
        source.subscribe(&el, "click", move |_ev| {
            let enabled = w.experience.borrow_mut().toggle_audio();
            log::info!("[gesture] audio {}", if enabled { "on" } else { "off" });
            overlay::set_audio_indicator(&w.document, enabled);
        });
    }
}

fn wire_heart(w: &InputWiring, source: &mut InputSource) {
    let Some(el) = w.document.get_element_by_id(HEART_ID) else {
        log::warn!("[input] missing #{}", HEART_ID);
        return;
    };
    let w = w.clone();
    source.subscribe(&el, "click", move |_ev| {
        let outcome = w.experience.borrow_mut().click();
        overlay::present(&w.document, outcome);
    });
}

fn wire_pointermove(w: &InputWiring, source: &mut InputSource) {
    let target = w.window.clone();
    let w = w.clone();
    source.subscribe(&target, "pointermove", move |ev: web::Event| {
        let outcome = w.experience.borrow_mut().sampled_interaction(ev.time_stamp());
        overlay::present(&w.document, outcome);
    });
}

fn wire_scroll(w: &InputWiring, source: &mut InputSource) {
    let target = w.window.clone();
    let w = w.clone();
    source.subscribe(&target, "scroll", move |ev: web::Event| {
        let metrics = dom::scroll_metrics(&w.document);
        let outcome = w.experience.borrow_mut().scroll(metrics, ev.time_stamp());
        overlay::present(&w.document, outcome);
    });
}

fn wire_resize(w: &InputWiring, source: &mut InputSource) {
    let target = w.window.clone();
    let w = w.clone();
    source.subscribe(&target, "resize", move |_ev| {
        w.frame.borrow_mut().sync_surface();
    });
}
