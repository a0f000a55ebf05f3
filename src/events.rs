use crate::constants::RESIZE_DEBOUNCE_MS;
use crate::debounce::Debouncer;
use crate::dom::TimeoutScheduler;
use crate::mapper::{handle_rotation_change, OrientationMapper};
use crate::page::BrowserPage;
use crate::platform::SensorReading;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct OrientationWiring {
    pub mapper: Rc<RefCell<OrientationMapper>>,
    pub page: Rc<RefCell<BrowserPage>>,
    pub scheduler: TimeoutScheduler,
}

pub fn wire_orientation_handlers(w: OrientationWiring) {
    wire_deviceorientation(&w);
    wire_orientationchange(&w);
}

fn wire_deviceorientation(w: &OrientationWiring) {
    let w = w.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::DeviceOrientationEvent| {
        let reading = SensorReading {
            alpha: ev.alpha(),
            beta: ev.beta(),
            gamma: ev.gamma(),
        };
        let outcome = w
            .mapper
            .borrow_mut()
            .handle_sensor(&reading, &mut *w.page.borrow_mut());
        if outcome.first_event {
            wire_resize(&w);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback(
            "deviceorientation",
            closure.as_ref().unchecked_ref(),
        );
    }

    closure.forget();
}

fn wire_orientationchange(w: &OrientationWiring) {
    let w = w.clone();

    let closure = Closure::wrap(Box::new(move || {
        handle_rotation_change(&w.scheduler, &w.mapper, &w.page);
    }) as Box<dyn FnMut()>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback(
            "orientationchange",
            closure.as_ref().unchecked_ref(),
        );
    }

    closure.forget();
}

// Only wired once the sensor is confirmed; resizes before that do not matter.
fn wire_resize(w: &OrientationWiring) {
    let w = w.clone();
    let debouncer = Debouncer::new(w.scheduler, RESIZE_DEBOUNCE_MS);

    let closure = Closure::wrap(Box::new(move || {
        let w = w.clone();
        debouncer.call(move || handle_rotation_change(&w.scheduler, &w.mapper, &w.page));
    }) as Box<dyn FnMut()>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }

    closure.forget();
    log::info!("[events] resize listener wired");
}
