//! Display width of characters and strings
//!
//! Width is decided by a fixed table: half-width Latin/Latin-1 and half-width
//! Kana take one column, everything else takes two.

use std::ops::{Bound, RangeBounds, RangeInclusive};

use crate::error::WidthError;

/// Codepoint ranges rendered in a single column
const HALF_WIDTH: [RangeInclusive<char>; 2] = [
    // Latin, control characters and Latin-1 supplement
    '\u{0000}'..='\u{00FF}',
    // Half-width Katakana and punctuation
    '\u{FF61}'..='\u{FF9F}',
];

/// Return the display width of a single character: 1 or 2.
#[inline]
pub fn char_width(c: char) -> usize {
    if HALF_WIDTH.iter().any(|range| range.contains(&c)) {
        1
    } else {
        2
    }
}

/// Return the display width of a string.
#[inline]
pub fn str_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

/// Return the display width of a character subrange of `text`.
///
/// Indices count characters, not bytes. Both `begin..end` and `begin..` forms
/// are accepted.
///
/// # Errors
/// * `WidthError::OutOfRange` - `begin > end` or `end` past the last character
pub fn range_width<R: RangeBounds<usize>>(text: &str, range: R) -> Result<usize, WidthError> {
    let len = text.chars().count();
    let begin = match range.start_bound() {
        Bound::Included(&b) => b,
        Bound::Excluded(&b) => b.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&e) => e.saturating_add(1),
        Bound::Excluded(&e) => e,
        Bound::Unbounded => len,
    };

    if begin > end || end > len {
        return Err(WidthError::OutOfRange { begin, end, len });
    }

    Ok(text
        .chars()
        .skip(begin)
        .take(end - begin)
        .map(char_width)
        .sum())
}

/// Types with a display width in columns
pub trait ColumnWidth {
    fn column_width(&self) -> usize;
}

impl ColumnWidth for char {
    fn column_width(&self) -> usize {
        char_width(*self)
    }
}

impl ColumnWidth for str {
    fn column_width(&self) -> usize {
        str_width(self)
    }
}
