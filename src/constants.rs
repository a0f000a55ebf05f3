/// Tilt and parallax tuning constants.
///
/// These constants express intended behavior (delays, angle limits,
/// smoothing factors) and keep magic numbers out of the handlers.
// Time to let the layout engine reflow after a rotation (milliseconds)
pub const ROTATION_SETTLE_DELAY_MS: u32 = 500;

// Quiet window for the resize debounce (milliseconds)
pub const RESIZE_DEBOUNCE_MS: u32 = 10;

// `window.orientation` value reported for a clockwise landscape rotation
pub const LANDSCAPE_CLOCKWISE_ORIENTATION: f64 = -90.0;

// Portrait beta above this (after folding into 0..360) reads as "just past zero"
pub const PORTRAIT_WRAP_CUTOFF_DEG: f64 = 270.0;

// Baselines at or below the horizon
pub const HORIZON_DEG: f64 = 90.0;
pub const MAX_ANGLE_BELOW_HORIZON_DEG: f64 = 140.0;

// Baselines above the horizon: portrait adds a quarter turn, landscape caps at gamma's ceiling
pub const MAX_ANGLE_ABOVE_HORIZON_SPAN_DEG: f64 = 90.0;
pub const LANDSCAPE_MAX_ANGLE_DEG: f64 = 180.0;

// Baselines past vertical (device overhead)
pub const OVERHEAD_BASELINE_DEG: f64 = 180.0;
pub const MAX_ANGLE_OVERHEAD_DEG: f64 = 250.0;

// Jitter smoothing: moves larger than the limit only apply (1 - adjustment) of the delta
pub const MOVEMENT_LIMIT_PX: f64 = 5.0;
pub const SCROLL_ADJUSTMENT: f64 = 0.9;

// Background moves at this fraction of the page scroll
pub const PARALLAX_MULTIPLIER: f64 = 0.4;

// DOM hooks
pub const WRAPPER_SELECTOR: &str = ".Wrapper";
pub const PARALLAX_SELECTOR: &str = ".Background-parallax";
pub const SENSOR_BODY_CLASS: &str = "has-deviceOrientation";

pub const DEBUG_ALPHA_SELECTOR: &str = ".Debug-value--alpha";
pub const DEBUG_BETA_SELECTOR: &str = ".Debug-value--beta";
pub const DEBUG_GAMMA_SELECTOR: &str = ".Debug-value--gamma";
pub const DEBUG_ANGLE_SELECTOR: &str = ".Debug-value--betaModified";
pub const DEBUG_TOP_SELECTOR: &str = ".Debug-value--top";
