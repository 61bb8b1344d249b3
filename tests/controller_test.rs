//! End-to-end tests driving a pane the way a GUI event loop would:
//! decoded intents and wheel deltas in, buffer/scroll state out.

use textpane::{
    AxisPolicy, Cursor, CursorMove, DirtyLines, EditIntent, PaneController, Rect, ScrollState,
    Size, TextBuffer,
};

const LINE_H: f32 = 16.0;
const CHAR_W: f32 = 8.0;
const VIEW_W: f32 = 320.0;
const VIEW_H: f32 = 160.0; // ten lines tall

fn cell_metrics(line: usize, col: usize) -> Rect {
    Rect::new(
        (col - 1) as f32 * CHAR_W,
        (line - 1) as f32 * LINE_H,
        CHAR_W,
        LINE_H,
    )
}

fn pane_with(text: &str) -> PaneController<fn(usize, usize) -> Rect> {
    let buffer = TextBuffer::open(1, text);
    let content = Size::new(VIEW_W, buffer.line_count() as f32 * LINE_H);
    let scroll = ScrollState::new(Size::new(VIEW_W, VIEW_H), AxisPolicy::Vertical)
        .with_content_size(content);
    PaneController::new(buffer, scroll, cell_metrics)
}

fn numbered_lines(n: usize) -> String {
    (1..=n)
        .map(|i| format!("line {i}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn window_contains(pane: &PaneController<fn(usize, usize) -> Rect>, rect: Rect) -> bool {
    let start = -pane.scroll().offset_y();
    rect.y >= start && rect.y + rect.h <= start + VIEW_H
}

// ==================== Typing ====================

#[test]
fn typing_a_sentence_updates_buffer_and_cursor() {
    let mut pane = pane_with("");
    for ch in ["h", "e", "l", "l", "o"] {
        pane.apply_edit(EditIntent::InsertText(ch.into()));
    }
    assert_eq!(pane.buffer().content(), "hello");
    assert_eq!(pane.buffer().cursor(), Cursor::new(1, 6));
}

#[test]
fn newline_splits_and_backspace_rejoins() {
    let mut pane = pane_with("alpha beta");
    pane.apply_edit(EditIntent::MoveCursor(CursorMove::Absolute {
        line: 1,
        col: 6,
    }));
    let result = pane.apply_edit(EditIntent::InsertText("\n".into()));
    assert_eq!(pane.buffer().lines(), &["alpha", " beta"]);
    assert_eq!(pane.buffer().cursor(), Cursor::new(2, 1));
    assert_eq!(result.dirty, DirtyLines::FromLineToEnd(1));

    let result = pane.apply_edit(EditIntent::Backspace);
    assert_eq!(pane.buffer().content(), "alpha beta");
    assert_eq!(pane.buffer().cursor(), Cursor::new(1, 6));
    assert_eq!(result.dirty, DirtyLines::FromLineToEnd(1));
}

#[test]
fn multibyte_text_round_trips_through_edits() {
    let mut pane = pane_with("");
    pane.apply_edit(EditIntent::InsertText("café ☕".into()));
    assert_eq!(pane.buffer().cursor(), Cursor::new(1, 7));
    pane.apply_edit(EditIntent::Backspace);
    pane.apply_edit(EditIntent::Backspace);
    assert_eq!(pane.buffer().content(), "café");
}

// ==================== Cursor visibility ====================

#[test]
fn typing_past_the_bottom_keeps_the_cursor_visible() {
    let mut pane = pane_with("");
    for i in 0..40 {
        // Measure the line the insert is about to create, the way an
        // embedder re-measures before handing the intent over
        let next_lines = (pane.buffer().line_count() + 1) as f32;
        pane.set_content_size(Size::new(VIEW_W, next_lines * LINE_H));

        let result = pane.apply_edit(EditIntent::InsertText(format!("row {i}\n")));
        assert!(result.dirty.start_line().is_some());
        let rect = pane.cursor_rect();
        assert!(window_contains(&pane, rect), "cursor left the window at row {i}");
    }
    assert!(pane.scroll().offset_y() < 0.0);
}

#[test]
fn jumping_to_the_first_line_scrolls_back_up() {
    let mut pane = pane_with(&numbered_lines(100));
    pane.apply_edit(EditIntent::MoveCursor(CursorMove::LastLine));
    assert!(pane.scroll().offset_y() < 0.0);

    let result = pane.apply_edit(EditIntent::MoveCursor(CursorMove::FirstLine));
    assert_eq!(pane.scroll().offset_y(), 0.0);
    assert!(window_contains(&pane, result.cursor_rect));
}

#[test]
fn margin_keeps_a_gap_between_cursor_and_edge() {
    let mut pane = pane_with(&numbered_lines(100)).with_scroll_margin(LINE_H);
    pane.apply_edit(EditIntent::MoveCursor(CursorMove::Absolute {
        line: 50,
        col: 1,
    }));
    let rect = pane.cursor_rect();
    let window_end = -pane.scroll().offset_y() + VIEW_H;
    // One full line of slack below the cursor
    assert_eq!(rect.y + rect.h + LINE_H, window_end);
}

// ==================== Scrolling ====================

#[test]
fn wheel_scrolling_moves_only_the_viewport() {
    let mut pane = pane_with(&numbered_lines(100));
    let cursor_before = pane.buffer().cursor();

    pane.apply_scroll(0.0, 300.0);
    assert_eq!(pane.scroll().offset_y(), -300.0);
    assert_eq!(pane.buffer().cursor(), cursor_before);

    pane.apply_scroll(0.0, -1000.0);
    assert_eq!(pane.scroll().offset_y(), 0.0);
}

#[test]
fn resize_reclamps_a_deep_scroll_position() {
    let mut pane = pane_with(&numbered_lines(100));
    pane.apply_scroll(0.0, 10_000.0);
    let bottom = pane.scroll().offset_y();
    assert_eq!(bottom, -(100.0 * LINE_H - VIEW_H));

    // Taller window: less travel, offset must follow
    pane.set_viewport_size(Size::new(VIEW_W, 100.0 * LINE_H));
    assert_eq!(pane.scroll().offset_y(), 0.0);
}

// ==================== Persistence ====================

#[test]
fn edit_save_mark_saved_lifecycle() {
    let buffer = TextBuffer::open_from(9, "draft", "/tmp/draft.txt");
    let scroll = ScrollState::new(Size::new(VIEW_W, VIEW_H), AxisPolicy::Vertical);
    let mut pane = PaneController::new(buffer, scroll, cell_metrics);
    assert!(!pane.buffer().is_dirty());

    pane.apply_edit(EditIntent::MoveCursor(CursorMove::Absolute {
        line: 1,
        col: 6,
    }));
    pane.apply_edit(EditIntent::InsertText(" two".into()));
    assert!(pane.buffer().is_dirty());

    let bytes = pane.save().unwrap();
    assert_eq!(bytes, b"draft two".to_vec());
    pane.mark_saved();
    assert!(!pane.buffer().is_dirty());
    assert_eq!(pane.buffer().content(), "draft two");
}
