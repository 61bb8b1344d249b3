//! Scroll-offset state and arithmetic for a single viewport.
//!
//! `ScrollState` is a plain value: every operation returns a new state and
//! never mutates the receiver. It has no knowledge of text buffers, timers,
//! or rendering; it is just bounds-respecting offset arithmetic, which makes
//! it fully testable without mocking.
//!
//! # Sign convention
//!
//! The stored offset is non-positive on both axes: `0.0` means the content
//! start is at the viewport start, and more negative means scrolled further
//! forward. A positive input delta to [`scroll_by`](ScrollState::scroll_by)
//! moves the visible window forward through the content, which *decreases*
//! the stored offset. This is a contract, not an implementation detail;
//! callers translate wheel/trackpad deltas against it.

use crate::geometry::{Axis, AxisPolicy, Rect, Size};

/// Scroll state for one viewport: offset, sizes, policy, and scrollbar
/// presentation.
///
/// Invariant, re-established by every operation: on each axis the offset is
/// within `[-(max(0, content - viewport)), 0]`, and an axis that cannot
/// scroll (policy-disabled, or content no larger than the viewport) sits at
/// exactly `0.0`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    offset_x: f32,
    offset_y: f32,
    content: Size,
    viewport: Size,
    policy: AxisPolicy,
    speed: f32,
    scrollbar_visible: bool,
    scrollbar_opacity: f32,
}

impl ScrollState {
    /// Creates a state at offset (0, 0) with empty content, unit speed, and
    /// a hidden scrollbar.
    pub fn new(viewport: Size, policy: AxisPolicy) -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            content: Size::ZERO,
            viewport,
            policy,
            speed: 1.0,
            scrollbar_visible: false,
            scrollbar_opacity: 0.0,
        }
    }

    /// Sets the wheel-delta multiplier applied by `scroll_by`.
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    // ==================== Accessors ====================

    pub fn offset_x(&self) -> f32 {
        self.offset_x
    }

    pub fn offset_y(&self) -> f32 {
        self.offset_y
    }

    pub fn content_size(&self) -> Size {
        self.content
    }

    pub fn viewport_size(&self) -> Size {
        self.viewport
    }

    pub fn policy(&self) -> AxisPolicy {
        self.policy
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn scrollbar_visible(&self) -> bool {
        self.scrollbar_visible
    }

    pub fn scrollbar_opacity(&self) -> f32 {
        self.scrollbar_opacity
    }

    /// How far the content can travel past the viewport on `axis`, in
    /// pixels. Zero when the content fits.
    pub fn max_travel(&self, axis: Axis) -> f32 {
        let (content, viewport) = match axis {
            Axis::Horizontal => (self.content.w, self.viewport.w),
            Axis::Vertical => (self.content.h, self.viewport.h),
        };
        (content - viewport).max(0.0)
    }

    /// True if `axis` is both policy-enabled and has content to scroll.
    pub fn is_scrollable(&self, axis: Axis) -> bool {
        self.policy.allows(axis) && self.max_travel(axis) > 0.0
    }

    fn offset(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.offset_x,
            Axis::Vertical => self.offset_y,
        }
    }

    // ==================== Size updates ====================

    /// Returns a state with the new content size, re-clamped.
    ///
    /// Called whenever the underlying content changes; shrinking content
    /// pulls an out-of-range offset back into bounds.
    pub fn with_content_size(&self, content: Size) -> Self {
        Self {
            content,
            ..self.clone()
        }
        .clamp()
    }

    /// Returns a state with the new viewport size, re-clamped.
    ///
    /// A viewport that grows reduces the maximum offset; without the
    /// re-clamp the visible window and the stored offset would disagree
    /// after a resize.
    pub fn with_viewport_size(&self, viewport: Size) -> Self {
        Self {
            viewport,
            ..self.clone()
        }
        .clamp()
    }

    // ==================== Scrolling ====================

    /// Applies a scroll delta, returning the clamped new state.
    ///
    /// Per axis: the delta is ignored when the policy disables the axis;
    /// the offset is forced to `0.0` when the content fits the viewport;
    /// otherwise the offset moves by `-delta * speed` and is clamped into
    /// `[-max_travel, 0]`. Positive delta scrolls forward (offset
    /// decreases).
    pub fn scroll_by(&self, dx: f32, dy: f32) -> Self {
        let mut next = self.clone();
        if self.policy.allows(Axis::Horizontal) {
            next.offset_x = self.step_axis(Axis::Horizontal, dx);
        }
        if self.policy.allows(Axis::Vertical) {
            next.offset_y = self.step_axis(Axis::Vertical, dy);
        }
        next
    }

    fn step_axis(&self, axis: Axis, delta: f32) -> f32 {
        let travel = self.max_travel(axis);
        if travel <= 0.0 {
            return 0.0;
        }
        (self.offset(axis) - delta * self.speed).clamp(-travel, 0.0)
    }

    /// Forces the offset back into bounds on every axis. Idempotent:
    /// `clamp(clamp(s)) == clamp(s)`.
    ///
    /// A policy-disabled axis is pinned to `0.0`, so the offset invariant
    /// holds uniformly regardless of how the state was produced.
    pub fn clamp(&self) -> Self {
        let mut next = self.clone();
        next.offset_x = self.clamped_offset(Axis::Horizontal);
        next.offset_y = self.clamped_offset(Axis::Vertical);
        next
    }

    fn clamped_offset(&self, axis: Axis) -> f32 {
        if !self.policy.allows(axis) {
            return 0.0;
        }
        let travel = self.max_travel(axis);
        if travel <= 0.0 {
            0.0
        } else {
            self.offset(axis).clamp(-travel, 0.0)
        }
    }

    pub(crate) fn set_scrollbar(&mut self, visible: bool, opacity: f32) {
        self.scrollbar_visible = visible;
        self.scrollbar_opacity = opacity;
    }

    /// Adjusts the offset so `rect`, padded by `margin`, is fully visible.
    ///
    /// Per enabled axis: if the rect's leading edge minus the margin
    /// precedes the window start, the offset snaps so the padded leading
    /// edge aligns with the window start; if the trailing edge plus the
    /// margin exceeds the window end, it snaps so the padded trailing edge
    /// aligns with the window end; otherwise the axis is untouched. The
    /// result is clamped, so a rect near the content edge never overshoots.
    pub fn scroll_to_show(&self, rect: Rect, margin: f32) -> Self {
        let mut next = self.clone();
        if self.policy.allows(Axis::Horizontal) {
            next.offset_x = show_axis(self.offset_x, rect.x, rect.w, self.viewport.w, margin);
        }
        if self.policy.allows(Axis::Vertical) {
            next.offset_y = show_axis(self.offset_y, rect.y, rect.h, self.viewport.h, margin);
        }
        next.clamp()
    }
}

/// One-axis scroll-to-show: returns the offset that brings
/// `[start, start + extent]`, padded by `margin`, inside the window.
fn show_axis(offset: f32, start: f32, extent: f32, viewport_len: f32, margin: f32) -> f32 {
    // The window covers [-offset, -offset + viewport_len] in content space
    let window_start = -offset;
    let window_end = window_start + viewport_len;

    if start - margin < window_start {
        // Align the padded leading edge with the window start
        -(start - margin)
    } else if start + extent + margin > window_end {
        // Align the padded trailing edge with the window end
        -(start + extent + margin - viewport_len)
    } else {
        offset
    }
}
