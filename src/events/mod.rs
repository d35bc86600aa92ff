pub mod pointer;

pub use pointer::{wire_input_handlers, InputWiring};

use crate::core::{ListenerRegistry, SubscriptionId};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A live DOM listener. Dropping it removes the listener from its target.
pub struct EventSubscription {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

/// Owns every listener the experience installs; teardown is dropping it.
#[derive(Default)]
pub struct InputSource {
    subscriptions: ListenerRegistry<EventSubscription>,
}

impl InputSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(
        &mut self,
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<SubscriptionId> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        if let Err(e) = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        {
            log::warn!("[input] could not listen for {}: {:?}", kind, e);
            return None;
        }
        Some(self.subscriptions.insert(EventSubscription {
            target: target.clone(),
            kind,
            closure,
        }))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscriptions.remove(id).is_some()
    }

    pub fn clear(&mut self) {
        let n = self.subscriptions.len();
        self.subscriptions.clear();
        log::debug!("[input] removed {} listeners", n);
    }
}
