//! colwidth - Display-width aware slicing, splitting and padding
//!
//! Half-width characters (`U+0000..=U+00FF` and half-width Kana
//! `U+FF61..=U+FF9F`) take one column; every other character takes two.
//! All operations cut text by columns instead of characters so fixed-width
//! reports line up when CJK and Latin text are mixed.
//!
//! # Width Example
//! ```
//! use colwidth::{char_width, range_width, str_width, ColumnWidth};
//!
//! assert_eq!(char_width('好'), 2);
//! assert_eq!(str_width(",好ＬｶaA"), 8);
//! assert_eq!(range_width(",好ＬｶaA", 1..3), Ok(4));
//! assert_eq!("ｶa".column_width(), 2);
//! ```
//!
//! # Slicing Example
//! ```
//! use colwidth::{slice, slice_range, split, tail_after_slice};
//!
//! // 'Ｌ' straddles column 4: dropped unless the cut character is included
//! assert_eq!(slice(",好ＬｶaA", 4, false), ",好");
//! assert_eq!(slice(",好ＬｶaA", 4, true), ",好Ｌ");
//! assert_eq!(tail_after_slice(",好ＬｶaA", 4, true), "ｶaA");
//! assert_eq!(slice_range(",好ＬｶaA", 2, 3, true, true), "好Ｌ");
//! assert_eq!(split("a好好好", 2, true), vec!["a好", "好", "好"]);
//! ```
//!
//! # Padding Example
//! ```
//! use colwidth::{left_pad, slice_rpad, DEFAULT_FILL};
//!
//! assert_eq!(left_pad("123", 5, 'x'), "xx123");
//! assert_eq!(slice_rpad("喔A一一Ｌ", 4, DEFAULT_FILL), "喔A ");
//! ```
//!
//! # Column Layout Example
//! ```
//! use colwidth::ColumnLayout;
//!
//! let layout = ColumnLayout::parse(r#"6 4> sep="|""#).unwrap();
//! assert_eq!(layout.format_row(&["東京都", "12"]).unwrap(), "東京都|  12");
//! ```

mod boundary;
mod columns;
mod error;
mod pad;
mod slice;
mod width;

pub use boundary::{index_of_width, slice_boundary};
pub use columns::{Align, Column, ColumnLayout};
pub use error::WidthError;
pub use pad::{fit, left_pad, right_pad, slice_lpad, slice_pad, slice_rpad, PadSide, DEFAULT_FILL};
pub use slice::{slice, slice_range, split, split_at_width, tail_after_slice};
pub use width::{char_width, range_width, str_width, ColumnWidth};
