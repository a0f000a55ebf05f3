// Angle math for turning device tilt into a scroll position.
//
// Raw sensor angles wrap around at awkward points (beta jumps from 179 to
// -179, gamma from 90 to -90 depending on rotation). Everything here works on
// a folded scale that increases steadily as the device tilts from face up
// towards face down.

use crate::constants::*;
use crate::platform::{Layout, SensorReading};

/// Fold portrait beta from [-180, 180] into [0, 270].
///
/// 0 (face up) stays 0, 90 (upright) stays 90, -179 becomes 181 and -90
/// becomes 270. Values past 270 (nearly face up, tilted backwards) collapse
/// to 0 so they read as "just past zero" instead of almost a full turn.
#[inline]
pub fn normalise_beta(beta: f64) -> f64 {
    let folded = if beta < 0.0 { 360.0 + beta } else { beta };
    if folded > PORTRAIT_WRAP_CUTOFF_DEG {
        0.0
    } else {
        folded
    }
}

/// Fold gamma from [-90, 90] into [0, 180] for a clockwise landscape hold.
///
/// -1 (face up) becomes 179, -89 becomes 91, positive values are kept.
#[inline]
pub fn normalise_gamma_clockwise(gamma: f64) -> f64 {
    if gamma < 0.0 {
        180.0 - gamma.abs()
    } else {
        gamma
    }
}

/// Mirror of [`normalise_gamma_clockwise`] for an anti-clockwise hold.
///
/// 1 (face up) becomes 179, 89 becomes 91, negative values lose their sign.
#[inline]
pub fn normalise_gamma_anticlockwise(gamma: f64) -> f64 {
    if gamma > 0.0 {
        180.0 - gamma
    } else {
        gamma.abs()
    }
}

/// Pick the angle that tracks forward tilt in the current layout and fold it.
/// `None` when the sensor did not report that angle.
pub fn normalised_angle(layout: Layout, reading: &SensorReading) -> Option<f64> {
    match layout {
        Layout::Portrait => reading.beta.map(normalise_beta),
        Layout::LandscapeClockwise => reading.gamma.map(normalise_gamma_clockwise),
        Layout::LandscapeAntiClockwise => reading.gamma.map(normalise_gamma_anticlockwise),
    }
}

/// Folded angle at which the page is fully scrolled to the top.
pub fn max_angle(baseline: f64, layout: Layout) -> f64 {
    if baseline <= HORIZON_DEG {
        MAX_ANGLE_BELOW_HORIZON_DEG
    } else if baseline <= OVERHEAD_BASELINE_DEG {
        if layout.is_landscape() {
            LANDSCAPE_MAX_ANGLE_DEG
        } else {
            baseline + MAX_ANGLE_ABOVE_HORIZON_SPAN_DEG
        }
    } else {
        MAX_ANGLE_OVERHEAD_DEG
    }
}

/// Whether raw gamma shows the device still turning in the scroll direction,
/// i.e. it has rolled past the point where the folded scale wraps.
#[inline]
fn gamma_past_wrap(layout: Layout, gamma: f64) -> bool {
    (layout.is_rotated_clockwise() && gamma > 0.0)
        || (!layout.is_rotated_clockwise() && gamma < 0.0)
}

/// Lock `angle` into `[baseline, max_angle]`.
///
/// Portrait simply clamps. Landscape has to tell an overshoot past the folded
/// range apart from a reversal, using the raw `beta`/`gamma` of the event.
pub fn clamp_angle(
    angle: f64,
    baseline: f64,
    max_angle: f64,
    layout: Layout,
    raw_beta: f64,
    raw_gamma: f64,
) -> f64 {
    let mut current = angle;

    // lock to top when moving beyond max angle
    if current > max_angle {
        current = if !layout.is_landscape() {
            max_angle
        } else if gamma_past_wrap(layout, raw_gamma) {
            baseline
        } else {
            max_angle
        };
    }

    // lock to bottom when moving below the baseline
    if current < baseline {
        current = if !layout.is_landscape() {
            baseline
        } else if raw_beta.abs() > HORIZON_DEG {
            // device is above the horizon
            if baseline > HORIZON_DEG {
                if gamma_past_wrap(layout, raw_gamma) {
                    max_angle
                } else {
                    baseline
                }
            } else {
                max_angle
            }
        } else {
            baseline
        };
    }

    current
}

/// Map `value` from `[from_min, from_max]` onto `[to_min, to_max]`.
/// A zero-width source range maps everything to `to_min`.
#[inline]
pub fn map_range(value: f64, from_min: f64, from_max: f64, to_min: f64, to_max: f64) -> f64 {
    let span = from_max - from_min;
    if span == 0.0 {
        return to_min;
    }
    (value - from_min) * (to_max - to_min) / span + to_min
}

/// Damp large jumps between consecutive portrait offsets.
///
/// When the offset moves by more than [`MOVEMENT_LIMIT_PX`] only
/// `1 - SCROLL_ADJUSTMENT` of the change is applied. Landscape is left alone.
pub fn smooth_jitter(top: f64, last_top: Option<f64>, layout: Layout) -> f64 {
    let Some(last) = last_top else {
        return top;
    };
    if layout.is_landscape() || top == last {
        return top;
    }
    if top > last && top - MOVEMENT_LIMIT_PX > last {
        top - (top - last) * SCROLL_ADJUSTMENT
    } else if top < last && top + MOVEMENT_LIMIT_PX < last {
        top + (last - top) * SCROLL_ADJUSTMENT
    } else {
        top
    }
}

/// Round half-way values towards positive infinity (-2.5 becomes -2).
#[inline]
pub fn round_half_up(v: f64) -> i64 {
    (v + 0.5).floor() as i64
}
