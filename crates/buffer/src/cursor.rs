//! Pure cursor/edit arithmetic over a line array.
//!
//! These functions are side-effect-free value transforms: they take the
//! current `(lines, cursor)` and return new values, never mutating their
//! inputs. All coordinate math is in Unicode codepoints (a `char` in the
//! line string), never bytes, so multi-byte content edits cleanly.
//!
//! All functions expect the line-array invariant: `lines` is never empty
//! (empty content is represented as one empty line). Out-of-range cursors
//! are clamped to the nearest valid position before the operation runs;
//! nothing here rejects input.

use crate::types::{Cursor, CursorMove};

/// Returns the codepoint length of a line.
pub fn codepoint_len(line: &str) -> usize {
    line.chars().count()
}

/// Returns the byte offset of 1-based column `col` in `line`.
///
/// `col - 1` is a codepoint index; a column past the last character maps
/// to the end of the line.
fn byte_of_col(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col.saturating_sub(1))
        .map(|(idx, _)| idx)
        .unwrap_or(line.len())
}

/// Clamps a cursor into the valid range for `lines`.
///
/// The line is clamped into `[1, line_count]` and the column into
/// `[1, line_len + 1]` for the clamped line.
pub fn clamp_cursor(lines: &[String], cursor: Cursor) -> Cursor {
    debug_assert!(!lines.is_empty(), "line array must never be empty");
    let line = cursor.line.clamp(1, lines.len());
    let col = cursor.col.clamp(1, codepoint_len(&lines[line - 1]) + 1);
    Cursor { line, col }
}

/// Inserts `text` at the cursor, returning the new lines and cursor.
///
/// Embedded newlines split the current line at the cursor: the text before
/// the first newline joins the head of the current line, interior segments
/// become whole lines spliced in after it, and the tail of the current line
/// moves behind the final segment. The cursor lands after the last inserted
/// codepoint. Inserting the empty string is a no-op.
pub fn insert(lines: &[String], cursor: Cursor, text: &str) -> (Vec<String>, Cursor) {
    let cursor = clamp_cursor(lines, cursor);
    if text.is_empty() {
        return (lines.to_vec(), cursor);
    }

    let mut out = lines.to_vec();
    let row = cursor.line - 1;
    let split_at = byte_of_col(&out[row], cursor.col);
    let tail = out[row].split_off(split_at);

    let mut segments = text.split('\n');
    // split always yields at least one segment
    let first = segments.next().unwrap_or("");
    out[row].push_str(first);

    let rest: Vec<&str> = segments.collect();
    if rest.is_empty() {
        // Single-line insertion: cursor advances within the same line
        out[row].push_str(&tail);
        let col = cursor.col + codepoint_len(first);
        return (out, Cursor::new(cursor.line, col));
    }

    // Interior segments become whole lines
    let mut insert_at = row + 1;
    for segment in &rest[..rest.len() - 1] {
        out.insert(insert_at, (*segment).to_string());
        insert_at += 1;
    }

    // Final segment picks up the tail of the split line
    let last = rest[rest.len() - 1];
    let mut last_line = String::with_capacity(last.len() + tail.len());
    last_line.push_str(last);
    last_line.push_str(&tail);
    out.insert(insert_at, last_line);

    let new_cursor = Cursor::new(cursor.line + rest.len(), codepoint_len(last) + 1);
    (out, new_cursor)
}

/// Deletes the codepoint left of the cursor, returning the new lines and
/// cursor.
///
/// At the start of a line (but not the first), the line is joined onto the
/// end of the previous one and the cursor lands at the join point. At the
/// very start of the buffer this is a no-op.
pub fn backspace(lines: &[String], cursor: Cursor) -> (Vec<String>, Cursor) {
    let cursor = clamp_cursor(lines, cursor);

    if cursor.col > 1 {
        // Delete within the line
        let mut out = lines.to_vec();
        let row = cursor.line - 1;
        let start = byte_of_col(&out[row], cursor.col - 1);
        let end = byte_of_col(&out[row], cursor.col);
        out[row].replace_range(start..end, "");
        return (out, Cursor::new(cursor.line, cursor.col - 1));
    }

    if cursor.line > 1 {
        // Join the current line onto the end of the previous one
        let mut out = lines.to_vec();
        let removed = out.remove(cursor.line - 1);
        let prev = &mut out[cursor.line - 2];
        let join_col = codepoint_len(prev) + 1;
        prev.push_str(&removed);
        return (out, Cursor::new(cursor.line - 1, join_col));
    }

    // At (1, 1): nothing to the left
    (lines.to_vec(), cursor)
}

/// Resolves a movement intent to a new, valid cursor.
///
/// The candidate line is clamped into `[1, line_count]`. The column is
/// clamped in two passes: first against the longest line in the buffer
/// (a cheap bound that preserves horizontal intent), then re-clamped
/// against the resolved target line's actual length, snapping to
/// `line_len + 1` on overshoot. Never past end-of-line, never an error.
pub fn move_cursor(lines: &[String], cursor: Cursor, intent: CursorMove) -> Cursor {
    debug_assert!(!lines.is_empty(), "line array must never be empty");
    let cursor = clamp_cursor(lines, cursor);

    let (line, col): (isize, isize) = match intent {
        CursorMove::Delta { dcol, dline } => (
            cursor.line as isize + dline,
            cursor.col as isize + dcol,
        ),
        CursorMove::Absolute { line, col } => (line, col),
        CursorMove::FirstLine => (1, cursor.col as isize),
        CursorMove::LastLine => (lines.len() as isize, cursor.col as isize),
    };

    let line = line.clamp(1, lines.len() as isize) as usize;

    // First pass: bound by the longest line in the buffer
    let longest = lines.iter().map(|l| codepoint_len(l)).max().unwrap_or(0);
    let col = col.clamp(1, longest as isize + 1) as usize;

    // Second pass: re-clamp against the resolved target line
    let target_len = codepoint_len(&lines[line - 1]);
    let col = col.min(target_len + 1);

    Cursor { line, col }
}
