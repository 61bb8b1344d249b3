//! Scrollbar thumb geometry and visibility transitions.
//!
//! The thumb is sized to the visible fraction of the content and positioned
//! by the scrolled fraction of the travel range. Fading is modeled as
//! explicit state transitions; whatever scheduler the caller uses drives
//! [`set_scrollbar_opacity`](ScrollState::set_scrollbar_opacity) over time.
//! There is no timer in here.

use crate::geometry::Axis;
use crate::state::ScrollState;

/// Smallest usable thumb length in pixels. A track-proportional thumb on
/// very long content would otherwise shrink to an ungrabbable sliver.
pub const MIN_THUMB_LEN: f32 = 20.0;

impl ScrollState {
    /// Returns the `(position, length)` of the scrollbar thumb on `axis`,
    /// in track pixels from the track start.
    ///
    /// `length` is the viewport scaled by the visible fraction
    /// (`viewport / content`), floored at [`MIN_THUMB_LEN`]. `position`
    /// distributes the remaining track in proportion to how far the offset
    /// has traveled. When the axis cannot scroll, the thumb fills the
    /// track: `(0, viewport)` signals "nothing to scroll".
    pub fn scrollbar_thumb(&self, axis: Axis) -> (f32, f32) {
        let (content_len, viewport_len) = match axis {
            Axis::Horizontal => (self.content_size().w, self.viewport_size().w),
            Axis::Vertical => (self.content_size().h, self.viewport_size().h),
        };

        if !self.is_scrollable(axis) {
            return (0.0, viewport_len);
        }

        let length = (viewport_len * (viewport_len / content_len))
            .max(MIN_THUMB_LEN)
            .min(viewport_len);

        // offset and max_offset are both non-positive, so the ratio runs
        // 0.0 at the start to 1.0 at the end of the travel range
        let offset = match axis {
            Axis::Horizontal => self.offset_x(),
            Axis::Vertical => self.offset_y(),
        };
        let max_offset = -self.max_travel(axis);
        let position = (offset / max_offset) * (viewport_len - length);

        (position, length)
    }

    /// Returns a state with the scrollbar fully shown.
    pub fn show_scrollbar(&self) -> Self {
        let mut next = self.clone();
        next.set_scrollbar(true, 1.0);
        next
    }

    /// Returns a state with the scrollbar fully hidden.
    pub fn hide_scrollbar(&self) -> Self {
        let mut next = self.clone();
        next.set_scrollbar(false, 0.0);
        next
    }

    /// Returns a state at an intermediate fade opacity, clamped into
    /// `[0, 1]`. The scrollbar counts as visible while any of it shows.
    pub fn set_scrollbar_opacity(&self, opacity: f32) -> Self {
        let opacity = opacity.clamp(0.0, 1.0);
        let mut next = self.clone();
        next.set_scrollbar(opacity > 0.0, opacity);
        next
    }
}
