//! textpane-scroll: viewport scroll-offset arithmetic for textpane.
//!
//! This crate provides [`ScrollState`], a plain-value scroll engine for one
//! viewport: delta scrolling, axis-independent clamping, scroll-to-show for
//! an arbitrary content rectangle, and scrollbar thumb geometry. It has no
//! knowledge of text buffers or rendering and performs no I/O, which makes
//! it fully testable without mocking.
//!
//! Offsets are non-positive: `0.0` is the content start, and a positive
//! scroll delta moves the visible window forward by making the offset more
//! negative. See [`ScrollState::scroll_by`] for the full sign-convention
//! contract.
//!
//! # Example
//!
//! ```
//! use textpane_scroll::{AxisPolicy, Rect, ScrollState, Size};
//!
//! let state = ScrollState::new(Size::new(800.0, 100.0), AxisPolicy::Vertical)
//!     .with_content_size(Size::new(800.0, 1000.0));
//!
//! // Wheel down 40px: the window moves forward, the offset goes negative
//! let state = state.scroll_by(0.0, 40.0);
//! assert_eq!(state.offset_y(), -40.0);
//!
//! // Bring a rect near the bottom of the content into view
//! let state = state.scroll_to_show(Rect::new(0.0, 500.0, 10.0, 16.0), 4.0);
//! assert_eq!(state.offset_y(), -(500.0 + 16.0 + 4.0 - 100.0));
//! ```

mod geometry;
mod scrollbar;
mod state;

pub use geometry::{Axis, AxisPolicy, Rect, Size};
pub use scrollbar::MIN_THUMB_LEN;
pub use state::ScrollState;
