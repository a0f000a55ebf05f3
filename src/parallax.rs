use crate::constants::PARALLAX_MULTIPLIER;
use crate::platform::{BackgroundLayer, ScrollSource};
use crate::tilt::round_half_up;

/// Per-frame background offset tracker.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct Parallax {
    pub last_scroll_offset: f64,
}

impl Parallax {
    pub fn new() -> Self {
        Self::default()
    }

    /// Background translation for a page scroll offset.
    #[inline]
    pub fn offset_for(scroll_offset: f64) -> i64 {
        round_half_up(scroll_offset * PARALLAX_MULTIPLIER)
    }

    /// Move the background if the page scrolled since the last frame.
    /// Returns whether the layer was touched.
    pub fn update<S, B>(&mut self, source: &S, layer: &mut B) -> bool
    where
        S: ScrollSource + ?Sized,
        B: BackgroundLayer + ?Sized,
    {
        let scroll = source.scroll_offset();
        if scroll == self.last_scroll_offset {
            return false;
        }
        layer.translate_y(Self::offset_for(scroll));
        self.last_scroll_offset = scroll;
        true
    }
}
