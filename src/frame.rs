use crate::constants::PARALLAX_SELECTOR;
use crate::dom;
use crate::parallax::Parallax;
use crate::platform::{BackgroundLayer, ScrollSource};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `window.pageYOffset`, 0 when unavailable.
pub struct WindowScroll;

impl ScrollSource for WindowScroll {
    fn scroll_offset(&self) -> f64 {
        web::window()
            .and_then(|w| w.page_y_offset().ok())
            .unwrap_or(0.0)
    }
}

pub struct BackgroundEl {
    el: web::HtmlElement,
}

impl BackgroundLayer for BackgroundEl {
    fn translate_y(&mut self, offset_px: i64) {
        _ = self
            .el
            .style()
            .set_property("transform", &format!("translate3d(0, {}px, 0)", offset_px));
    }
}

pub struct FrameContext {
    pub parallax: Parallax,
    pub scroll: WindowScroll,
    pub background: BackgroundEl,
}

impl FrameContext {
    pub fn from_document(document: &web::Document) -> anyhow::Result<Self> {
        let el = dom::require_html(document, PARALLAX_SELECTOR)?;
        Ok(Self {
            parallax: Parallax::new(),
            scroll: WindowScroll,
            background: BackgroundEl { el },
        })
    }

    pub fn frame(&mut self) {
        if self.parallax.update(&self.scroll, &mut self.background) {
            log::trace!("[parallax] scroll={}", self.parallax.last_scroll_offset);
        }
    }
}

/// Drive `frame_ctx` from `requestAnimationFrame` for the rest of the page's life.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_first = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    // position the background for the restored scroll before the first paint
    frame_ctx_first.borrow_mut().frame();
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
