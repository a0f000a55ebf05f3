use crate::constants::{
    DEBUG_ALPHA_SELECTOR, DEBUG_ANGLE_SELECTOR, DEBUG_BETA_SELECTOR, DEBUG_GAMMA_SELECTOR,
    DEBUG_TOP_SELECTOR,
};
use crate::platform::DebugReadout;
use web_sys as web;

/// Optional readout elements; pages without a debug panel have none of them.
#[derive(Default)]
pub struct DebugPanel {
    alpha: Option<web::Element>,
    beta: Option<web::Element>,
    gamma: Option<web::Element>,
    angle: Option<web::Element>,
    top: Option<web::Element>,
}

impl DebugPanel {
    pub fn from_document(document: &web::Document) -> Self {
        let find = |selector: &str| document.query_selector(selector).ok().flatten();
        Self {
            alpha: find(DEBUG_ALPHA_SELECTOR),
            beta: find(DEBUG_BETA_SELECTOR),
            gamma: find(DEBUG_GAMMA_SELECTOR),
            angle: find(DEBUG_ANGLE_SELECTOR),
            top: find(DEBUG_TOP_SELECTOR),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.alpha.is_none()
            && self.beta.is_none()
            && self.gamma.is_none()
            && self.angle.is_none()
            && self.top.is_none()
    }

    pub fn show(&self, readout: &DebugReadout) {
        set_value(&self.alpha, readout.alpha);
        set_value(&self.beta, readout.beta);
        set_value(&self.gamma, readout.gamma);
        set_value(&self.angle, readout.angle);
        set_value(&self.top, readout.top);
    }
}

#[inline]
fn set_value(el: &Option<web::Element>, value: Option<i64>) {
    if let Some(el) = el {
        let text = value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string());
        el.set_text_content(Some(&text));
    }
}
