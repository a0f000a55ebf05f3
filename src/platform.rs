// Page-facing data types and the seams between the effect logic and the browser.
//
// Nothing in here touches `web_sys`; the browser implementations live in
// `page.rs`, `dom.rs` and `frame.rs`, and the host tests provide fakes.

/// One `deviceorientation` sample in degrees. Browsers report `null` for
/// fields they cannot measure, hence the options.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct SensorReading {
    pub alpha: Option<f64>,
    pub beta: Option<f64>,
    pub gamma: Option<f64>,
}

/// How the screen is currently held.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    #[default]
    Portrait,
    LandscapeClockwise,
    LandscapeAntiClockwise,
}

impl Layout {
    pub fn from_flags(is_landscape: bool, is_rotated_clockwise: bool) -> Self {
        match (is_landscape, is_rotated_clockwise) {
            (false, _) => Layout::Portrait,
            (true, true) => Layout::LandscapeClockwise,
            (true, false) => Layout::LandscapeAntiClockwise,
        }
    }

    #[inline]
    pub fn is_landscape(self) -> bool {
        self != Layout::Portrait
    }

    #[inline]
    pub fn is_rotated_clockwise(self) -> bool {
        self == Layout::LandscapeClockwise
    }
}

/// Geometry the scroll mapping depends on, in CSS pixels.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct ViewportMetrics {
    pub content_height: f64,
    pub content_width: f64,
    pub screen_height: f64,
}

impl ViewportMetrics {
    /// Largest valid scroll-from-top offset.
    #[inline]
    pub fn scroll_range(&self) -> f64 {
        (self.content_height - self.screen_height).max(0.0)
    }
}

/// Values shown in the debug panel after each sensor event.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct DebugReadout {
    pub alpha: Option<i64>,
    pub beta: Option<i64>,
    pub gamma: Option<i64>,
    pub angle: Option<i64>,
    pub top: Option<i64>,
}

/// Everything the orientation mapper reads from or writes to the page.
pub trait Page {
    fn viewport_metrics(&self) -> ViewportMetrics;
    fn layout(&self) -> Layout;
    fn set_scroll_top(&mut self, top: i64);
    /// One-time switch into sensor mode: body marker class and touch-drag lock.
    fn enable_sensor_mode(&mut self);
    fn show_debug(&mut self, _readout: &DebugReadout) {}
}

/// Read side of the parallax effect.
pub trait ScrollSource {
    fn scroll_offset(&self) -> f64;
}

/// Write side of the parallax effect.
pub trait BackgroundLayer {
    fn translate_y(&mut self, offset_px: i64);
}

/// Deferred one-shot callbacks (a `setTimeout` in the browser).
pub trait Scheduler {
    type Handle;

    /// Returns `None` when the platform refused the timer.
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Option<Self::Handle>;
    fn cancel(&self, handle: Self::Handle);
}

impl<S: Scheduler + ?Sized> Scheduler for std::rc::Rc<S> {
    type Handle = S::Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Option<Self::Handle> {
        (**self).schedule(delay_ms, task)
    }

    fn cancel(&self, handle: Self::Handle) {
        (**self).cancel(handle)
    }
}
