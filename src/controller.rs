//! PaneController composes one buffer and one scroll state per displayed
//! pane.
//!
//! The controller is the single entry point for decoded intents: edits go
//! to the cursor engine, scroll deltas go to the scroll engine, and after
//! every edit the cursor's pixel rectangle — computed by a caller-injected
//! metrics function — is brought back into view so typing never pushes the
//! cursor off-screen.
//!
//! Everything here is a synchronous value transform. The controller holds
//! the current state; callers diff the state they read after an operation
//! against what they held before to decide what to redraw.

use tracing::{debug, trace};

use textpane_buffer::{DirtyLines, TextBuffer};
use textpane_scroll::{Rect, ScrollState, Size};

use crate::intent::EditIntent;

/// Default padding around the cursor rect for scroll-to-show, in pixels:
/// two caret widths, so the caret never sits flush against the viewport
/// edge.
pub const DEFAULT_SCROLL_MARGIN: f32 = 4.0;

/// The outcome of [`PaneController::apply_edit`].
#[derive(Debug, Clone, PartialEq)]
pub struct EditResult {
    /// Pixel rectangle of the cursor after the edit, per the injected
    /// metrics function.
    pub cursor_rect: Rect,
    /// Which buffer lines the edit changed.
    pub dirty: DirtyLines,
}

/// Controller for one displayed pane: a [`TextBuffer`], a [`ScrollState`],
/// and the metrics function that maps a 1-based `(line, col)` cursor to
/// its pixel rectangle in content coordinates.
///
/// Glyph and line metrics are the renderer's knowledge, so the function is
/// injected at construction and never computed here.
pub struct PaneController<M>
where
    M: Fn(usize, usize) -> Rect,
{
    buffer: TextBuffer,
    scroll: ScrollState,
    metrics: M,
    scroll_margin: f32,
}

impl<M> PaneController<M>
where
    M: Fn(usize, usize) -> Rect,
{
    pub fn new(buffer: TextBuffer, scroll: ScrollState, metrics: M) -> Self {
        Self {
            buffer,
            scroll,
            metrics,
            scroll_margin: DEFAULT_SCROLL_MARGIN,
        }
    }

    /// Overrides the scroll-to-show margin for this pane.
    pub fn with_scroll_margin(mut self, margin: f32) -> Self {
        self.scroll_margin = margin;
        self
    }

    // ==================== Accessors ====================

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    /// Pixel rectangle of the current cursor position.
    pub fn cursor_rect(&self) -> Rect {
        let cursor = self.buffer.cursor();
        (self.metrics)(cursor.line, cursor.col)
    }

    // ==================== Intents ====================

    /// Applies an edit intent, then scrolls so the new cursor rectangle
    /// (padded by the margin) is visible.
    pub fn apply_edit(&mut self, intent: EditIntent) -> EditResult {
        trace!(buffer = ?self.buffer.id(), ?intent, "apply_edit");

        let dirty = match intent {
            EditIntent::InsertText(text) => {
                let (buffer, dirty) = self.buffer.insert(&text);
                self.buffer = buffer;
                dirty
            }
            EditIntent::Backspace => {
                let (buffer, dirty) = self.buffer.backspace();
                self.buffer = buffer;
                dirty
            }
            EditIntent::MoveCursor(mv) => {
                self.buffer = self.buffer.move_cursor(mv);
                DirtyLines::None
            }
        };

        let cursor_rect = self.cursor_rect();
        self.scroll = self.scroll.scroll_to_show(cursor_rect, self.scroll_margin);

        EditResult { cursor_rect, dirty }
    }

    /// Applies a scroll delta. Edits and the cursor are untouched.
    pub fn apply_scroll(&mut self, dx: f32, dy: f32) -> &ScrollState {
        trace!(buffer = ?self.buffer.id(), dx, dy, "apply_scroll");
        self.scroll = self.scroll.scroll_by(dx, dy);
        &self.scroll
    }

    // ==================== Geometry updates ====================

    /// Updates the viewport size (e.g., after a window resize), re-clamping
    /// the offset to the new bounds.
    pub fn set_viewport_size(&mut self, size: Size) {
        debug!(buffer = ?self.buffer.id(), ?size, "set_viewport_size");
        self.scroll = self.scroll.with_viewport_size(size);
    }

    /// Updates the content size after the caller re-measures the buffer,
    /// re-clamping the offset.
    pub fn set_content_size(&mut self, size: Size) {
        self.scroll = self.scroll.with_content_size(size);
    }

    // ==================== Scrollbar ====================

    pub fn show_scrollbar(&mut self) {
        self.scroll = self.scroll.show_scrollbar();
    }

    pub fn hide_scrollbar(&mut self) {
        self.scroll = self.scroll.hide_scrollbar();
    }

    /// Fade step driven by the caller's scheduler.
    pub fn set_scrollbar_opacity(&mut self, opacity: f32) {
        self.scroll = self.scroll.set_scrollbar_opacity(opacity);
    }

    // ==================== Persistence ====================

    /// Renders the buffer for saving; the caller writes the bytes and
    /// reports success via [`mark_saved`](Self::mark_saved).
    pub fn save(&self) -> Result<Vec<u8>, textpane_buffer::SaveError> {
        self.buffer.save()
    }

    /// Records that the caller persisted the buffer successfully.
    pub fn mark_saved(&mut self) {
        self.buffer = self.buffer.mark_saved();
    }
}
