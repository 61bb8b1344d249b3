//! textpane: the platform-free core of a multi-line text pane.
//!
//! The crate is split the way the data flows:
//!
//! - [`textpane_buffer`] (re-exported here) holds the editable text model:
//!   a [`TextBuffer`] of 1-based lines with a single [`Cursor`], mutated by
//!   pure value-returning operations
//! - [`textpane_scroll`] (re-exported here) holds viewport arithmetic:
//!   a [`ScrollState`] of clamped non-positive offsets plus scrollbar thumb
//!   geometry
//! - [`PaneController`] ties one of each together and keeps the cursor
//!   visible after every edit, using a caller-injected metrics function for
//!   pixel positions
//!
//! Nothing in here renders, reads input devices, or touches the
//! filesystem; the embedding GUI layer owns all of that and drives this
//! core with [`EditIntent`] values and scroll deltas.
//!
//! ```
//! use textpane::{EditIntent, PaneController, Rect, ScrollState, Size, TextBuffer};
//! use textpane::AxisPolicy;
//!
//! // Fixed-cell metrics stand in for a real glyph layout
//! let metrics = |line: usize, col: usize| {
//!     Rect::new((col - 1) as f32 * 8.0, (line - 1) as f32 * 16.0, 8.0, 16.0)
//! };
//! let buffer = TextBuffer::open(1, "hello");
//! let scroll = ScrollState::new(Size::new(640.0, 480.0), AxisPolicy::Vertical);
//! let mut pane = PaneController::new(buffer, scroll, metrics);
//!
//! let result = pane.apply_edit(EditIntent::InsertText(", world".into()));
//! assert_eq!(pane.buffer().content(), ", worldhello");
//! assert_eq!(result.cursor_rect.x, 7.0 * 8.0);
//! ```

mod controller;
mod intent;

pub use controller::{EditResult, PaneController, DEFAULT_SCROLL_MARGIN};
pub use intent::EditIntent;

pub use textpane_buffer::{
    BufferId, Cursor, CursorMove, DirtyLines, EditMode, SaveError, TextBuffer,
};
pub use textpane_scroll::{Axis, AxisPolicy, Rect, ScrollState, Size, MIN_THUMB_LEN};
