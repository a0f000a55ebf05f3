use crate::debounce::TaskSlot;
use crate::platform::Scheduler;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// First element matching `selector`, if it is an HTML element.
pub fn query_html(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Like [`query_html`] but a missing element is an error.
pub fn require_html(document: &web::Document, selector: &str) -> anyhow::Result<web::HtmlElement> {
    query_html(document, selector).ok_or_else(|| anyhow::anyhow!("missing {}", selector))
}

/// `window.orientation`: 0, 90, -90 or 180 on devices that report it.
pub fn window_orientation() -> Option<f64> {
    let window = web::window()?;
    js_sys::Reflect::get(&window, &JsValue::from_str("orientation"))
        .ok()
        .and_then(|v| v.as_f64())
}

/// Run `handler` once the DOM is parsed, or right away if it already is.
pub fn on_dom_ready(document: &web::Document, mut handler: impl FnMut() + 'static) {
    if document.ready_state() != "loading" {
        handler();
        return;
    }
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = document
        .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// `Scheduler` backed by `setTimeout`.
///
/// Every JS callback is left to fire exactly once so wasm-bindgen frees it;
/// cancelling empties the shared slot instead of clearing the timer.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = TaskSlot;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Option<TaskSlot> {
        let window = web::window()?;
        let slot = TaskSlot::new(task);
        let fire = slot.clone();
        let callback = Closure::once_into_js(move || fire.run());
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay_ms.min(i32::MAX as u32) as i32,
        ) {
            Ok(_) => Some(slot),
            Err(e) => {
                log::error!("setTimeout failed: {:?}", e);
                slot.cancel();
                None
            }
        }
    }

    fn cancel(&self, handle: TaskSlot) {
        handle.cancel();
    }
}
