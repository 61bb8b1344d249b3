/// Position in a buffer as 1-based (line, column).
///
/// `line` ranges over `[1, line_count]`. `col` ranges over
/// `[1, line_len + 1]`; a column of `line_len + 1` means "after the last
/// character" and is where typed text lands at end of line. Columns count
/// Unicode codepoints, never bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cursor {
    pub line: usize,
    pub col: usize,
}

impl Cursor {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

impl Default for Cursor {
    /// Start of the buffer: line 1, column 1.
    fn default() -> Self {
        Self { line: 1, col: 1 }
    }
}

impl PartialOrd for Cursor {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cursor {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Compare by line first, then by column
        match self.line.cmp(&other.line) {
            std::cmp::Ordering::Equal => self.col.cmp(&other.col),
            ord => ord,
        }
    }
}

/// A decoded cursor-movement request.
///
/// Every variant resolves to the nearest valid position rather than
/// failing: the target line is clamped into `[1, line_count]` and the
/// column is clamped against the resolved line's length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CursorMove {
    /// Relative movement by (columns, lines). Signed, so `-1` moves
    /// left/up.
    Delta { dcol: isize, dline: isize },
    /// Jump to an absolute (line, column). Signed so that out-of-range
    /// requests (including negative ones) clamp instead of wrapping.
    Absolute { line: isize, col: isize },
    /// Jump to the first line, keeping the current column intent.
    FirstLine,
    /// Jump to the last line, keeping the current column intent.
    LastLine,
}

/// Information about which lines were changed by a mutation.
///
/// Buffers don't broadcast change notifications; each mutation returns one
/// of these so the caller can decide what to repaint. Lines are 1-based,
/// matching [`Cursor`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DirtyLines {
    /// No visual change (e.g., a no-op backspace at the buffer start).
    None,
    /// A single line changed (most insertions and deletions).
    Single(usize),
    /// A range of lines changed, half-open `[from, to)`.
    Range { from: usize, to: usize },
    /// Everything from a line to the end of the buffer changed.
    /// Produced when a line is split or two lines are joined, shifting all
    /// subsequent lines.
    FromLineToEnd(usize),
}

impl DirtyLines {
    /// Returns true if no lines were dirtied.
    pub fn is_none(&self) -> bool {
        matches!(self, DirtyLines::None)
    }

    /// Returns the first dirty line, if any.
    pub fn start_line(&self) -> Option<usize> {
        match self {
            DirtyLines::None => None,
            DirtyLines::Single(line) => Some(*line),
            DirtyLines::Range { from, .. } => Some(*from),
            DirtyLines::FromLineToEnd(line) => Some(*line),
        }
    }

    /// Merges another dirty region into this one, producing the smallest
    /// region that covers both.
    ///
    /// Callers that coalesce several edits before repainting merge the
    /// per-edit results and render once at the end.
    pub fn merge(&mut self, other: DirtyLines) {
        *self = match (&*self, &other) {
            // None is the identity element
            (DirtyLines::None, _) => other,
            (_, DirtyLines::None) => return,

            // FromLineToEnd absorbs everything; take the earlier start
            (DirtyLines::FromLineToEnd(a), DirtyLines::FromLineToEnd(b)) => {
                DirtyLines::FromLineToEnd((*a).min(*b))
            }
            (DirtyLines::FromLineToEnd(a), other) | (other, DirtyLines::FromLineToEnd(a)) => {
                // None was handled above, so a start line always exists
                let b = other.start_line().unwrap_or(*a);
                DirtyLines::FromLineToEnd((*a).min(b))
            }

            // Two singles
            (DirtyLines::Single(a), DirtyLines::Single(b)) => {
                if a == b {
                    DirtyLines::Single(*a)
                } else {
                    DirtyLines::Range {
                        from: (*a).min(*b),
                        to: (*a).max(*b) + 1,
                    }
                }
            }

            // Single + Range in either order
            (DirtyLines::Single(a), DirtyLines::Range { from, to })
            | (DirtyLines::Range { from, to }, DirtyLines::Single(a)) => DirtyLines::Range {
                from: (*from).min(*a),
                to: (*to).max(*a + 1),
            },

            // Two ranges
            (DirtyLines::Range { from: a, to: b }, DirtyLines::Range { from: c, to: d }) => {
                DirtyLines::Range {
                    from: (*a).min(*c),
                    to: (*b).max(*d),
                }
            }
        };
    }
}
