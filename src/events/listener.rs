use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A DOM event listener that is removed again when dropped.
pub struct EventListener<E: FromWasmAbi + 'static> {
    target: web::EventTarget,
    event: &'static str,
    closure: Option<Closure<dyn FnMut(E)>>,
}

impl<E: FromWasmAbi + 'static> EventListener<E> {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(E) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
        if let Err(e) =
            target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            log::warn!("[events] add {} listener failed: {:?}", event, e);
        }
        Self {
            target: target.clone(),
            event,
            closure: Some(closure),
        }
    }

    /// Remove the listener now. Later calls and the eventual drop are no-ops.
    pub fn remove(&mut self) {
        if let Some(closure) = self.closure.take() {
            _ = self
                .target
                .remove_event_listener_with_callback(self.event, closure.as_ref().unchecked_ref());
        }
    }
}

impl<E: FromWasmAbi + 'static> Drop for EventListener<E> {
    fn drop(&mut self) {
        self.remove();
    }
}
