//! textpane-buffer: the line/cursor text buffer model for textpane.
//!
//! This crate provides a multi-line editable buffer with a single cursor
//! and dirty-line reporting. State is value-level: every mutation returns
//! a new [`TextBuffer`] and the [`DirtyLines`] it caused, so callers
//! repaint by diffing returned values instead of subscribing to a change
//! bus.
//!
//! # Overview
//!
//! The main type is [`TextBuffer`], which provides:
//! - Text insertion and backspace at the cursor position
//! - Clamped cursor movement via [`CursorMove`] intents
//! - Line-based access for rendering
//! - Plain-text save rendering (the caller owns the file write)
//!
//! The pure arithmetic lives in the [`cursor`] module and can be used
//! directly on any `(lines, cursor)` pair.
//!
//! # Example
//!
//! ```
//! use textpane_buffer::{Cursor, CursorMove, DirtyLines, TextBuffer};
//!
//! let buf = TextBuffer::open(1, "hello");
//! let buf = buf.move_cursor(CursorMove::Absolute { line: 1, col: 6 });
//!
//! let (buf, dirty) = buf.insert(", world");
//! assert_eq!(buf.content(), "hello, world");
//! assert_eq!(dirty, DirtyLines::Single(1));
//! assert_eq!(buf.cursor(), Cursor::new(1, 13));
//! ```
//!
//! # Coordinates
//!
//! Cursors are 1-based `(line, col)` pairs; `col` may equal
//! `line_len + 1`, meaning "after the last character". All column
//! arithmetic counts Unicode codepoints, never bytes. Out-of-range
//! positions are clamped, never rejected.

pub mod cursor;
mod text_buffer;
mod types;

pub use text_buffer::{BufferId, EditMode, SaveError, TextBuffer};
pub use types::{Cursor, CursorMove, DirtyLines};
