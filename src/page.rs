use crate::constants::{LANDSCAPE_CLOCKWISE_ORIENTATION, SENSOR_BODY_CLASS, WRAPPER_SELECTOR};
use crate::debug::DebugPanel;
use crate::dom;
use crate::platform::{DebugReadout, Layout, Page, ViewportMetrics};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The real page: the scrolling roots, the content wrapper and the debug panel.
pub struct BrowserPage {
    root: web::Element,
    body: Option<web::HtmlElement>,
    wrapper: web::HtmlElement,
    debug: DebugPanel,
    touch_locked: bool,
}

impl BrowserPage {
    pub fn from_document(document: &web::Document) -> anyhow::Result<Self> {
        let root = document
            .document_element()
            .ok_or_else(|| anyhow::anyhow!("no document element"))?;
        let wrapper = dom::require_html(document, WRAPPER_SELECTOR)?;
        let debug = DebugPanel::from_document(document);
        if debug.is_empty() {
            log::debug!("[page] no debug panel");
        }
        Ok(Self {
            root,
            body: document.body(),
            wrapper,
            debug,
            touch_locked: false,
        })
    }

    fn lock_touch_scroll(&mut self) {
        if self.touch_locked {
            return;
        }
        let closure = Closure::wrap(Box::new(|ev: web::TouchEvent| {
            ev.prevent_default();
            ev.stop_propagation();
        }) as Box<dyn FnMut(_)>);
        let options = web::AddEventListenerOptions::new();
        options.set_passive(false);
        match self
            .wrapper
            .add_event_listener_with_callback_and_add_event_listener_options(
                "touchmove",
                closure.as_ref().unchecked_ref(),
                &options,
            ) {
            Ok(()) => self.touch_locked = true,
            Err(e) => log::warn!("[page] touchmove lock failed: {:?}", e),
        }
        closure.forget();
    }
}

impl Page for BrowserPage {
    fn viewport_metrics(&self) -> ViewportMetrics {
        ViewportMetrics {
            content_height: self.wrapper.offset_height() as f64,
            content_width: self.wrapper.offset_width() as f64,
            screen_height: self.root.client_height() as f64,
        }
    }

    fn layout(&self) -> Layout {
        let is_landscape = self.root.client_height() < self.root.client_width();
        let is_rotated_clockwise = dom::window_orientation() == Some(LANDSCAPE_CLOCKWISE_ORIENTATION);
        Layout::from_flags(is_landscape, is_rotated_clockwise)
    }

    fn set_scroll_top(&mut self, top: i64) {
        // some engines scroll <html>, others <body>
        let top = top.clamp(i32::MIN as i64, i32::MAX as i64) as i32;
        self.root.set_scroll_top(top);
        if let Some(body) = &self.body {
            body.set_scroll_top(top);
        }
    }

    fn enable_sensor_mode(&mut self) {
        if let Some(body) = &self.body {
            _ = body.class_list().add_1(SENSOR_BODY_CLASS);
        }
        self.lock_touch_scroll();
    }

    fn show_debug(&mut self, readout: &DebugReadout) {
        self.debug.show(readout);
    }
}
