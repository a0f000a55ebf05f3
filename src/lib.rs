#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod debounce;
mod debug;
mod dom;
mod events;
mod frame;
mod mapper;
mod page;
mod parallax;
mod platform;
mod tilt;

use mapper::OrientationMapper;
use page::BrowserPage;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("tilt-scroll starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    let doc_for_load = document.clone();
    dom::on_dom_ready(&document, move || load(&doc_for_load));
    Ok(())
}

fn load(document: &web::Document) {
    // the two effects are independent; one missing its element must not stop the other
    if let Err(e) = init_orientation(document) {
        log::warn!("tilt scrolling disabled: {:?}", e);
    }
    if let Err(e) = init_parallax(document) {
        log::warn!("parallax disabled: {:?}", e);
    }
}

fn init_orientation(document: &web::Document) -> anyhow::Result<()> {
    let mut page = BrowserPage::from_document(document)?;
    let mut mapper = OrientationMapper::new();
    mapper.load(&mut page);

    events::wire_orientation_handlers(events::OrientationWiring {
        mapper: Rc::new(RefCell::new(mapper)),
        page: Rc::new(RefCell::new(page)),
        scheduler: dom::TimeoutScheduler,
    });
    Ok(())
}

fn init_parallax(document: &web::Document) -> anyhow::Result<()> {
    let frame_ctx = frame::FrameContext::from_document(document)?;
    frame::start_loop(Rc::new(RefCell::new(frame_ctx)));
    Ok(())
}
