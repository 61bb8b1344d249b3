//! TextBuffer is the aggregate data model the cursor engine operates on.
//!
//! A buffer is a plain value: mutations return a new buffer (plus the
//! [`DirtyLines`] they caused) and never touch shared state. Callers that
//! want change notification diff the returned value against the one they
//! held before.

use std::path::{Path, PathBuf};

use crate::cursor;
use crate::types::{Cursor, CursorMove, DirtyLines};

/// Opaque handle identifying a buffer within its owning collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BufferId(pub u64);

impl From<u64> for BufferId {
    fn from(raw: u64) -> Self {
        BufferId(raw)
    }
}

/// Editing mode of a buffer. Nothing in this core branches on it; it rides
/// along for the GUI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EditMode {
    #[default]
    Insert,
    Overwrite,
}

/// Error from [`TextBuffer::save`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SaveError {
    /// The buffer was never associated with a file.
    #[error("buffer {id:?} has no source path")]
    NoSource { id: BufferId },
}

/// A multi-line editable text buffer with a single cursor.
///
/// Invariants, enforced by construction and checked in debug builds:
/// - `lines` is never empty; empty content is one empty line
/// - `cursor.line` is in `[1, line_count]`
/// - `cursor.col` is in `[1, line_len + 1]` for the cursor's line, counted
///   in codepoints
///
/// Every mutation returns a new `TextBuffer`; the receiver is unchanged.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextBuffer {
    id: BufferId,
    lines: Vec<String>,
    cursor: Cursor,
    dirty: bool,
    source: Option<PathBuf>,
    mode: EditMode,
}

impl TextBuffer {
    /// Creates a buffer from `text`, split on `"\n"`.
    ///
    /// Empty text produces a single empty line; a trailing newline produces
    /// a trailing empty line. The cursor starts at (1, 1) and the buffer is
    /// clean.
    pub fn open(id: impl Into<BufferId>, text: &str) -> Self {
        // split of "" yields one empty segment, so lines is never empty
        let lines: Vec<String> = text.split('\n').map(String::from).collect();
        let buf = Self {
            id: id.into(),
            lines,
            cursor: Cursor::default(),
            dirty: false,
            source: None,
            mode: EditMode::default(),
        };
        buf.debug_assert_invariants();
        buf
    }

    /// Like [`open`](Self::open), with a source path for later saves.
    pub fn open_from(id: impl Into<BufferId>, text: &str, source: impl Into<PathBuf>) -> Self {
        let mut buf = Self::open(id, text);
        buf.source = Some(source.into());
        buf
    }

    // ==================== Accessors ====================

    pub fn id(&self) -> BufferId {
        self.id
    }

    /// Number of lines. Always at least 1.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Content of 1-based line `line`, without any newline.
    pub fn line(&self, line: usize) -> Option<&str> {
        self.lines.get(line.checked_sub(1)?).map(String::as_str)
    }

    /// Codepoint length of 1-based line `line`, or 0 if out of range.
    pub fn line_len(&self, line: usize) -> usize {
        self.line(line).map(cursor::codepoint_len).unwrap_or(0)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// True if the buffer has been edited since open or the last
    /// [`mark_saved`](Self::mark_saved).
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    /// The full buffer content with lines joined by `"\n"`.
    pub fn content(&self) -> String {
        self.lines.join("\n")
    }

    // ==================== Mutations ====================

    /// Inserts `text` at the cursor. Returns the new buffer and the lines
    /// a renderer must repaint. Inserting `""` is a clean no-op.
    pub fn insert(&self, text: &str) -> (Self, DirtyLines) {
        if text.is_empty() {
            return (self.clone(), DirtyLines::None);
        }
        let start_line = self.cursor.line;
        let (lines, cursor) = cursor::insert(&self.lines, self.cursor, text);
        let dirty_lines = if text.contains('\n') {
            // A split shifts every subsequent line down
            DirtyLines::FromLineToEnd(start_line)
        } else {
            DirtyLines::Single(start_line)
        };
        (self.edited(lines, cursor), dirty_lines)
    }

    /// Deletes the codepoint left of the cursor, joining lines at a line
    /// start. A backspace at (1, 1) is a clean no-op.
    pub fn backspace(&self) -> (Self, DirtyLines) {
        if self.cursor == Cursor::new(1, 1) {
            return (self.clone(), DirtyLines::None);
        }
        let dirty_lines = if self.cursor.col == 1 {
            // Join pulls every subsequent line up
            DirtyLines::FromLineToEnd(self.cursor.line - 1)
        } else {
            DirtyLines::Single(self.cursor.line)
        };
        let (lines, cursor) = cursor::backspace(&self.lines, self.cursor);
        (self.edited(lines, cursor), dirty_lines)
    }

    /// Moves the cursor. Content and dirty flag are unchanged.
    pub fn move_cursor(&self, intent: CursorMove) -> Self {
        let cursor = cursor::move_cursor(&self.lines, self.cursor, intent);
        let buf = Self { cursor, ..self.clone() };
        buf.debug_assert_invariants();
        buf
    }

    fn edited(&self, lines: Vec<String>, cursor: Cursor) -> Self {
        let buf = Self {
            lines,
            cursor,
            dirty: true,
            ..self.clone()
        };
        buf.debug_assert_invariants();
        buf
    }

    // ==================== Persistence ====================

    /// Renders the buffer content as bytes for the caller to write.
    ///
    /// The core performs no file I/O itself; this fails only when the
    /// buffer has no source path. A failed (or never-attempted) write
    /// changes nothing in memory — the caller reports a successful write
    /// via [`mark_saved`](Self::mark_saved).
    pub fn save(&self) -> Result<Vec<u8>, SaveError> {
        if self.source.is_none() {
            return Err(SaveError::NoSource { id: self.id });
        }
        Ok(self.content().into_bytes())
    }

    /// Returns a clean copy, recording that the caller persisted the
    /// content successfully.
    pub fn mark_saved(&self) -> Self {
        Self {
            dirty: false,
            ..self.clone()
        }
    }

    /// Returns a copy associated with `source` for later saves.
    pub fn with_source(&self, source: impl Into<PathBuf>) -> Self {
        Self {
            source: Some(source.into()),
            ..self.clone()
        }
    }

    // ==================== Validation ====================

    /// Debug assertion: verifies the non-empty-lines and bounded-cursor
    /// invariants after a mutation. Compiled out in release builds.
    #[cfg(debug_assertions)]
    fn debug_assert_invariants(&self) {
        assert!(!self.lines.is_empty(), "buffer {:?} lost its last line", self.id);
        assert!(
            self.cursor.line >= 1 && self.cursor.line <= self.lines.len(),
            "cursor line {} out of [1, {}] in buffer {:?}",
            self.cursor.line,
            self.lines.len(),
            self.id,
        );
        let line_len = cursor::codepoint_len(&self.lines[self.cursor.line - 1]);
        assert!(
            self.cursor.col >= 1 && self.cursor.col <= line_len + 1,
            "cursor col {} out of [1, {}] on line {} in buffer {:?}",
            self.cursor.col,
            line_len + 1,
            self.cursor.line,
            self.id,
        );
    }

    #[cfg(not(debug_assertions))]
    fn debug_assert_invariants(&self) {}
}
