//! Integration tests for realistic editing sequences.
//!
//! These tests drive whole edit histories through the value-returning
//! buffer API and check that lines, cursor, and dirty flags stay
//! consistent end to end.

use textpane_buffer::{Cursor, CursorMove, DirtyLines, TextBuffer};

#[test]
fn type_word_then_delete_entirely() {
    let mut buf = TextBuffer::open(1, "");

    // Type "hello" one codepoint at a time
    for ch in "hello".chars() {
        let (next, dirty) = buf.insert(&ch.to_string());
        assert_eq!(dirty, DirtyLines::Single(1));
        buf = next;
    }
    assert_eq!(buf.content(), "hello");
    assert_eq!(buf.cursor(), Cursor::new(1, 6));

    // Delete it entirely with backspace
    for _ in 0..5 {
        let (next, _) = buf.backspace();
        buf = next;
    }
    assert_eq!(buf.content(), "");
    assert_eq!(buf.cursor(), Cursor::new(1, 1));

    // One more backspace at the very start is a no-op
    let (next, dirty) = buf.backspace();
    assert_eq!(dirty, DirtyLines::None);
    assert_eq!(next, buf);
}

#[test]
fn type_multiple_lines_and_navigate() {
    let mut buf = TextBuffer::open(1, "");

    let (next, _) = buf.insert("first line\nsecond line\nthird line");
    buf = next;

    assert_eq!(buf.line_count(), 3);
    assert_eq!(buf.line(1), Some("first line"));
    assert_eq!(buf.line(2), Some("second line"));
    assert_eq!(buf.line(3), Some("third line"));
    assert_eq!(buf.cursor(), Cursor::new(3, 11));

    // Navigate to the middle line, mid-word: "second |line"
    buf = buf.move_cursor(CursorMove::Absolute { line: 2, col: 8 });
    let (next, dirty) = buf.insert("awesome ");
    buf = next;
    assert_eq!(buf.line(2), Some("second awesome line"));
    assert_eq!(dirty, DirtyLines::Single(2));

    // Up one, then back down to the bottom
    buf = buf.move_cursor(CursorMove::Delta { dcol: 0, dline: -1 });
    assert_eq!(buf.cursor().line, 1);
    buf = buf.move_cursor(CursorMove::LastLine);
    assert_eq!(buf.cursor().line, 3);
}

#[test]
fn split_edit_and_rejoin() {
    let buf = TextBuffer::open(1, "helloworld");
    let buf = buf.move_cursor(CursorMove::Absolute { line: 1, col: 6 });

    // Split into two lines
    let (buf, dirty) = buf.insert("\n");
    assert_eq!(dirty, DirtyLines::FromLineToEnd(1));
    assert_eq!(buf.line(1), Some("hello"));
    assert_eq!(buf.line(2), Some("world"));
    assert_eq!(buf.cursor(), Cursor::new(2, 1));

    // Backspace joins them back together
    let (buf, dirty) = buf.backspace();
    assert_eq!(dirty, DirtyLines::FromLineToEnd(1));
    assert_eq!(buf.content(), "helloworld");
    assert_eq!(buf.cursor(), Cursor::new(1, 6));
}

#[test]
fn remembered_column_across_short_lines() {
    let buf = TextBuffer::open(1, "a long first line\nab\nanother long line");
    let buf = buf.move_cursor(CursorMove::Absolute { line: 1, col: 12 });

    // Moving through the short middle line clamps to its end...
    let buf = buf.move_cursor(CursorMove::Delta { dcol: 0, dline: 1 });
    assert_eq!(buf.cursor(), Cursor::new(2, 3));

    // ...and a further move lands inside the next long line again
    let buf = buf.move_cursor(CursorMove::Delta { dcol: 0, dline: 1 });
    assert_eq!(buf.cursor().line, 3);
}

#[test]
fn multibyte_round_trip() {
    let mut buf = TextBuffer::open(1, "naïve\n日本語");
    buf = buf.move_cursor(CursorMove::Absolute { line: 2, col: 4 });

    let (next, _) = buf.insert("です");
    buf = next;
    assert_eq!(buf.line(2), Some("日本語です"));
    assert_eq!(buf.cursor(), Cursor::new(2, 6));

    for _ in 0..2 {
        let (next, _) = buf.backspace();
        buf = next;
    }
    assert_eq!(buf.line(2), Some("日本語"));
    assert_eq!(buf.cursor(), Cursor::new(2, 4));
}

#[test]
fn edit_save_edit_lifecycle() {
    let buf = TextBuffer::open_from(9, "draft", "/tmp/draft.txt");
    assert!(!buf.is_dirty());

    let buf = buf.move_cursor(CursorMove::Absolute { line: 1, col: 6 });
    let (buf, _) = buf.insert(" two");
    assert!(buf.is_dirty());

    // The caller writes these bytes, then reports success
    let bytes = buf.save().expect("buffer has a source");
    assert_eq!(bytes, b"draft two".to_vec());
    let buf = buf.mark_saved();
    assert!(!buf.is_dirty());

    // Further edits dirty the buffer again
    let (buf, _) = buf.backspace();
    assert!(buf.is_dirty());
    assert_eq!(buf.content(), "draft tw");
}

#[test]
fn merged_dirty_lines_cover_a_typing_burst() {
    let mut buf = TextBuffer::open(1, "one\ntwo\nthree");
    let mut combined = DirtyLines::None;

    buf = buf.move_cursor(CursorMove::Absolute { line: 1, col: 4 });
    let (next, dirty) = buf.insert("!");
    buf = next;
    combined.merge(dirty);

    buf = buf.move_cursor(CursorMove::Absolute { line: 3, col: 6 });
    let (next, dirty) = buf.insert("!");
    buf = next;
    combined.merge(dirty);

    assert_eq!(combined, DirtyLines::Range { from: 1, to: 4 });
    assert_eq!(buf.content(), "one!\ntwo\nthree!");
}
