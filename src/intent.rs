//! Decoded user intents that enter the pane controller.
//!
//! Decoding raw platform events (keystrokes, wheel ticks) into these is
//! the GUI layer's job; by the time an intent reaches the controller it is
//! already resolved to text, a backspace, or a movement. The caller
//! serializes all of its input sources (keyboard, test automation) into
//! one stream of these before dispatch.

use textpane_buffer::CursorMove;

/// An edit request against a pane's buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditIntent {
    /// Insert text at the cursor. May contain newlines; those split lines.
    InsertText(String),
    /// Delete the codepoint left of the cursor, joining lines at a line
    /// start.
    Backspace,
    /// Move the cursor without changing content.
    MoveCursor(CursorMove),
}
