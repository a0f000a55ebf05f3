// Orientation-to-scroll state machine.
//
// `OrientationMapper` owns the per-page tilt state and reacts to the three
// things that can happen to it: the page loading, a sensor sample arriving
// and the screen rotating. All page access goes through [`Page`], so the
// same code runs against the browser and against the host-side fakes.

use crate::constants::ROTATION_SETTLE_DELAY_MS;
use crate::platform::{DebugReadout, Layout, Page, Scheduler, SensorReading, ViewportMetrics};
use crate::tilt;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default, Clone, Debug, PartialEq)]
pub struct OrientationState {
    pub layout: Layout,
    /// Folded angle at the start of the current gesture; the scroll-bottom reference.
    pub baseline: Option<f64>,
    pub last_top: Option<i64>,
    pub sensor_confirmed: bool,
}

/// Result of feeding one sensor sample through the mapper.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct SensorOutcome {
    /// First sample ever seen; sensor mode was switched on.
    pub first_event: bool,
    pub angle: Option<f64>,
    pub top: Option<i64>,
}

#[derive(Default, Debug)]
pub struct OrientationMapper {
    pub state: OrientationState,
    pub metrics: ViewportMetrics,
}

impl OrientationMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture geometry and layout, then park the page at the bottom.
    pub fn load<P: Page>(&mut self, page: &mut P) -> i64 {
        self.metrics = page.viewport_metrics();
        self.state.layout = page.layout();
        let top = tilt::round_half_up(self.metrics.content_height);
        page.set_scroll_top(top);
        log::info!(
            "[tilt] loaded layout={:?} content={}x{} screen_h={}",
            self.state.layout,
            self.metrics.content_width,
            self.metrics.content_height,
            self.metrics.screen_height
        );
        top
    }

    pub fn handle_sensor<P: Page>(&mut self, reading: &SensorReading, page: &mut P) -> SensorOutcome {
        let first_event = !self.state.sensor_confirmed;
        if first_event {
            // Browsers advertise the event even without a gyroscope, so sensor
            // mode only starts once a real sample shows up.
            self.state.sensor_confirmed = true;
            page.enable_sensor_mode();
            // sensor mode may restyle the page
            self.metrics = page.viewport_metrics();
            log::info!("[tilt] orientation sensor confirmed");
        }

        let angle = tilt::normalised_angle(self.state.layout, reading);
        let top = angle.and_then(|a| self.next_top(a, reading));
        if let Some(top) = top {
            page.set_scroll_top(top);
            self.state.last_top = Some(top);
        }

        page.show_debug(&DebugReadout {
            alpha: reading.alpha.map(tilt::round_half_up),
            beta: reading.beta.map(tilt::round_half_up),
            gamma: reading.gamma.map(tilt::round_half_up),
            angle: angle.map(tilt::round_half_up),
            top,
        });
        log::debug!("[tilt] reading={:?} angle={:?} top={:?}", reading, angle, top);

        SensorOutcome {
            first_event,
            angle,
            top,
        }
    }

    fn next_top(&mut self, angle: f64, reading: &SensorReading) -> Option<i64> {
        // both layouts need raw beta: portrait maps it, landscape uses it to
        // tell which side of the horizon the device is on
        let raw_beta = reading.beta?;
        let raw_gamma = reading.gamma.unwrap_or_default();
        let baseline = *self.state.baseline.get_or_insert(angle);
        Some(self.scroll_target(angle, baseline, raw_beta, raw_gamma))
    }

    /// Scroll offset for a folded `angle` given the gesture `baseline`.
    pub fn scroll_target(&self, angle: f64, baseline: f64, raw_beta: f64, raw_gamma: f64) -> i64 {
        let layout = self.state.layout;
        let max = tilt::max_angle(baseline, layout);
        let clamped = tilt::clamp_angle(angle, baseline, max, layout, raw_beta, raw_gamma);
        let bottom = self.metrics.content_height - self.metrics.screen_height;
        let top = tilt::map_range(clamped, baseline, max, bottom, 0.0);
        let top = tilt::smooth_jitter(top, self.state.last_top.map(|t| t as f64), layout);
        let limit = self.metrics.scroll_range().floor() as i64;
        tilt::round_half_up(top).clamp(0, limit)
    }

    /// Re-read layout and geometry once the page has reflowed after a rotation.
    /// The next sample starts a new gesture.
    pub fn settle_rotation<P: Page>(&mut self, page: &P) {
        self.state.layout = page.layout();
        self.metrics = page.viewport_metrics();
        self.state.baseline = None;
        log::info!(
            "[tilt] rotation settled layout={:?} content_h={} screen_h={}",
            self.state.layout,
            self.metrics.content_height,
            self.metrics.screen_height
        );
    }
}

/// React to a rotation (or debounced resize): wait for layout to settle, then
/// re-baseline. State read inside the settle window may be stale.
pub fn handle_rotation_change<S, P>(
    scheduler: &S,
    mapper: &Rc<RefCell<OrientationMapper>>,
    page: &Rc<RefCell<P>>,
) where
    S: Scheduler,
    P: Page + 'static,
{
    let mapper = mapper.clone();
    let page = page.clone();
    let scheduled = scheduler.schedule(
        ROTATION_SETTLE_DELAY_MS,
        Box::new(move || {
            mapper.borrow_mut().settle_rotation(&*page.borrow());
        }),
    );
    if scheduled.is_none() {
        log::warn!("[tilt] could not schedule rotation settle");
    }
}
