//! Padding to a target width, and the slice-then-pad composition used for
//! fixed-width columns

use std::iter;

use crate::slice::slice;
use crate::width::str_width;

/// Fill character used when the caller has no preference
pub const DEFAULT_FILL: char = ' ';

/// Side on which fill characters are added
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadSide {
    /// Fill before the text (right-aligned output)
    Left,
    /// Fill after the text (left-aligned output)
    Right,
}

/// Columns missing from `text` to reach `total_width`
fn deficit(text: &str, total_width: isize) -> usize {
    usize::try_from(total_width).map_or(0, |total| total.saturating_sub(str_width(text)))
}

fn pad(text: &str, total_width: isize, fill: char, side: PadSide) -> String {
    let missing = deficit(text, total_width);
    let mut out = String::with_capacity(text.len() + missing * fill.len_utf8());
    match side {
        PadSide::Left => {
            out.extend(iter::repeat(fill).take(missing));
            out.push_str(text);
        }
        PadSide::Right => {
            out.push_str(text);
            out.extend(iter::repeat(fill).take(missing));
        }
    }
    out
}

/// Prepend `fill` until `text` is `total_width` columns wide.
///
/// Text already at or over `total_width` is returned unchanged. `fill` is
/// counted as one column.
pub fn left_pad(text: &str, total_width: isize, fill: char) -> String {
    pad(text, total_width, fill, PadSide::Left)
}

/// Append `fill` until `text` is `total_width` columns wide.
///
/// Text already at or over `total_width` is returned unchanged. `fill` is
/// counted as one column.
pub fn right_pad(text: &str, total_width: isize, fill: char) -> String {
    pad(text, total_width, fill, PadSide::Right)
}

/// Slice `text` to `width` columns (dropping a straddling character), then
/// pad on `side` when given.
///
/// Without a side the slice is returned as is and may be one column short.
/// A non-positive `width` yields an empty string.
pub fn fit(text: &str, width: isize, side: Option<PadSide>, fill: char) -> String {
    if width <= 0 {
        return String::new();
    }

    let head = slice(text, width, false);
    match side {
        Some(side) => pad(head, width, fill, side),
        None => head.to_string(),
    }
}

/// Slice `text` to `width` columns and pad it back to exactly `width`.
pub fn slice_pad(text: &str, width: isize, side: PadSide, fill: char) -> String {
    fit(text, width, Some(side), fill)
}

/// [`slice_pad`] filling on the left.
pub fn slice_lpad(text: &str, width: isize, fill: char) -> String {
    slice_pad(text, width, PadSide::Left, fill)
}

/// [`slice_pad`] filling on the right.
pub fn slice_rpad(text: &str, width: isize, fill: char) -> String {
    slice_pad(text, width, PadSide::Right, fill)
}
