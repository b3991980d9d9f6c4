//! Width-based slicing and splitting
//!
//! Every function here cuts through [`locate`], so the straddle policy is the
//! same for prefixes, tails, ranges and chunks.

use crate::boundary::locate;

/// Split `text` into the prefix fitting in `width` columns and the rest.
///
/// A double-width character straddling `width` goes to the prefix when
/// `include_cut` is set, otherwise it starts the rest.
pub fn split_at_width(text: &str, width: isize, include_cut: bool) -> (&str, &str) {
    let offset = locate(text, width).cut_offset(text, include_cut);
    text.split_at(offset)
}

/// Return the prefix of `text` fitting in `width` columns.
///
/// ```
/// assert_eq!(colwidth::slice(",好ＬｶaA", 4, false), ",好");
/// assert_eq!(colwidth::slice(",好ＬｶaA", 4, true), ",好Ｌ");
/// ```
pub fn slice(text: &str, width: isize, include_cut: bool) -> &str {
    split_at_width(text, width, include_cut).0
}

/// Return what remains of `text` after [`slice`] with the same arguments.
pub fn tail_after_slice(text: &str, width: isize, include_cut: bool) -> &str {
    split_at_width(text, width, include_cut).1
}

/// Skip `after_width` columns, then slice `slicing_width` columns.
///
/// `include_first_cut` decides whether a character straddling `after_width`
/// belongs to the result, so it is inverted for the skipped prefix.
/// A non-positive `after_width` skips nothing; a non-positive `slicing_width`
/// yields an empty string.
pub fn slice_range(
    text: &str,
    after_width: isize,
    slicing_width: isize,
    include_first_cut: bool,
    include_second_cut: bool,
) -> &str {
    let tail = tail_after_slice(text, after_width, !include_first_cut);
    slice(tail, slicing_width, include_second_cut)
}

/// Split `text` into consecutive chunks of at most `width` columns.
///
/// Stops at the first chunk that comes out empty, which happens when a
/// double-width character can never fit and `include_cut` is not set.
/// A non-positive `width` gives no chunks.
pub fn split(text: &str, width: isize, include_cut: bool) -> Vec<&str> {
    let mut chunks = Vec::new();
    if width <= 0 {
        return chunks;
    }

    let mut rest = text;
    while !rest.is_empty() {
        let (head, tail) = split_at_width(rest, width, include_cut);
        if head.is_empty() {
            break;
        }
        chunks.push(head);
        rest = tail;
    }

    chunks
}
