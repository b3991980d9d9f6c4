//! Width boundary scan shared by every slicing operation

use crate::width::char_width;

/// Where a target width falls in a text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Boundary {
    /// Target width was zero or negative
    Nothing,
    /// Width reached the target exactly after character `index`
    Exact { index: usize, end: usize },
    /// Character `index` (bytes `start..end`) pushed the width past the target
    Straddle {
        index: usize,
        start: usize,
        end: usize,
    },
    /// Text is narrower than the target
    Exhausted { count: usize },
}

impl Boundary {
    /// Byte offset ending the prefix
    pub(crate) fn cut_offset(self, text: &str, include_cut: bool) -> usize {
        match self {
            Boundary::Nothing => 0,
            Boundary::Exact { end, .. } => end,
            Boundary::Straddle { start, end, .. } => {
                if include_cut {
                    end
                } else {
                    start
                }
            }
            Boundary::Exhausted { .. } => text.len(),
        }
    }

    /// Character count of the prefix
    fn cut_index(self, include_cut: bool) -> usize {
        match self {
            Boundary::Nothing => 0,
            Boundary::Exact { index, .. } => index + 1,
            Boundary::Straddle { index, .. } => {
                if include_cut {
                    index + 1
                } else {
                    index
                }
            }
            Boundary::Exhausted { count } => count,
        }
    }
}

/// Scan `text` left to right until the accumulated width reaches `target`.
pub(crate) fn locate(text: &str, target: isize) -> Boundary {
    if target <= 0 {
        return Boundary::Nothing;
    }
    let target = target.unsigned_abs();

    let mut width = 0;
    let mut count = 0;
    for (index, (start, c)) in text.char_indices().enumerate() {
        width += char_width(c);
        let end = start + c.len_utf8();
        if width == target {
            return Boundary::Exact { index, end };
        }
        if width > target {
            return Boundary::Straddle { index, start, end };
        }
        count = index + 1;
    }

    Boundary::Exhausted { count }
}

/// Return the exclusive end index, in characters, of the prefix of `text`
/// that fits in `width` columns.
///
/// A double-width character straddling `width` is kept only when
/// `include_cut` is set. A non-positive `width` gives 0; a `width` wider than
/// the text gives the full character count.
pub fn slice_boundary(text: &str, width: isize, include_cut: bool) -> usize {
    locate(text, width).cut_index(include_cut)
}

/// Return the index of the character whose inclusion makes the accumulated
/// width reach or cross `width`.
///
/// When a double-width character straddles `width` and `include_cut` is not
/// set, the character before it is reported instead.
///
/// Returns `None` for a non-positive `width`, when the text is narrower than
/// `width`, or when nothing precedes an excluded straddling character.
pub fn index_of_width(text: &str, width: isize, include_cut: bool) -> Option<usize> {
    match locate(text, width) {
        Boundary::Nothing | Boundary::Exhausted { .. } => None,
        Boundary::Exact { index, .. } => Some(index),
        Boundary::Straddle { index, .. } => {
            if include_cut {
                Some(index)
            } else {
                index.checked_sub(1)
            }
        }
    }
}
