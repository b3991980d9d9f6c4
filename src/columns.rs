//! Fixed-width column layouts
//!
//! A layout is written as a list of columns, each `<width>[<align>][:<fill>]`,
//! separated by commas or whitespace, optionally followed by `sep="<text>"`:
//!
//! ```text
//! 8<:. 5> 4| sep="|"
//! ```
//!
//! `<` keeps text on the left (the default), `>` keeps it on the right and
//! `|` only clips without padding.

use winnow::ascii::{digit1, multispace0, multispace1};
use winnow::combinator::{alt, cut_err, delimited, eof, opt, preceded};
use winnow::error::{ErrMode, StrContext};
use winnow::token::{any, take_while};
use winnow::ModalResult;
use winnow::Parser;

use crate::error::WidthError;
use crate::pad::{fit, PadSide, DEFAULT_FILL};
use crate::slice::split_at_width;
use crate::width::str_width;

/// Placement of text inside a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// Text on the left, fill on the right
    #[default]
    Left,
    /// Text on the right, fill on the left
    Right,
    /// Clip to the column width without filling
    Clip,
}

impl Align {
    fn pad_side(self) -> Option<PadSide> {
        match self {
            Align::Left => Some(PadSide::Right),
            Align::Right => Some(PadSide::Left),
            Align::Clip => None,
        }
    }
}

/// A single fixed-width field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub width: usize,
    pub align: Align,
    pub fill: char,
}

impl Column {
    /// Create a left-aligned, space-filled column
    pub fn new(width: usize) -> Self {
        Self {
            width,
            align: Align::default(),
            fill: DEFAULT_FILL,
        }
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn with_fill(mut self, fill: char) -> Self {
        self.fill = fill;
        self
    }

    fn signed_width(&self) -> isize {
        isize::try_from(self.width).unwrap_or(isize::MAX)
    }

    /// Fit `text` into this column
    pub fn format(&self, text: &str) -> String {
        fit(text, self.signed_width(), self.align.pad_side(), self.fill)
    }
}

/// An ordered set of columns forming one record per line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    pub columns: Vec<Column>,
    pub separator: String,
}

impl ColumnLayout {
    /// Create a layout with no separator between fields
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            separator: String::new(),
        }
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Parse a layout description such as `8<:. 5> 4| sep="|"`.
    ///
    /// # Errors
    /// * `WidthError::Layout` - malformed description or a zero-width column
    pub fn parse(src: &str) -> Result<Self, WidthError> {
        let mut input = src;
        let (raw_columns, separator) = w_layout(&mut input).map_err(|err| {
            let expected = match err {
                ErrMode::Backtrack(ctx) | ErrMode::Cut(ctx) => ctx.context().find_map(|c| match c {
                    StrContext::Label(label) => Some(*label),
                    _ => None,
                }),
                ErrMode::Incomplete(_) => None,
            };
            WidthError::Layout {
                position: src.len() - input.len(),
                message: match expected {
                    Some(label) => format!("expected {}", label),
                    None => "expected columns like `8`, `8>` or `8|:.`, then an optional sep=\"..\""
                        .to_string(),
                },
            }
        })?;

        let mut columns = Vec::with_capacity(raw_columns.len());
        for raw in raw_columns {
            if raw.column.width == 0 {
                return Err(WidthError::Layout {
                    position: src.len() - raw.remaining,
                    message: "column width must be positive".to_string(),
                });
            }
            columns.push(raw.column);
        }

        Ok(Self {
            columns,
            separator: separator.unwrap_or_default(),
        })
    }

    /// Width of a formatted row, separators included
    pub fn total_width(&self) -> usize {
        let fields: usize = self.columns.iter().map(|c| c.width).sum();
        let gaps = self.columns.len().saturating_sub(1);
        fields + gaps * str_width(&self.separator)
    }

    /// Format one record, one field per column.
    ///
    /// # Errors
    /// * `WidthError::ColumnCount` - `fields` and columns differ in number
    pub fn format_row<S: AsRef<str>>(&self, fields: &[S]) -> Result<String, WidthError> {
        if fields.len() != self.columns.len() {
            return Err(WidthError::ColumnCount {
                expected: self.columns.len(),
                found: fields.len(),
            });
        }

        let cells: Vec<String> = self
            .columns
            .iter()
            .zip(fields)
            .map(|(column, field)| column.format(field.as_ref()))
            .collect();
        Ok(cells.join(&self.separator))
    }

    /// Cut a formatted line back into its fields.
    ///
    /// Fields keep their fill characters. A line shorter than the layout
    /// yields empty trailing fields.
    ///
    /// # Errors
    /// * `WidthError::ClipColumn` - a `Clip` column may be narrower than its
    ///   width, so later field boundaries cannot be found
    pub fn unpack_row<'a>(&self, line: &'a str) -> Result<Vec<&'a str>, WidthError> {
        if let Some(index) = self.columns.iter().position(|c| c.align == Align::Clip) {
            return Err(WidthError::ClipColumn { index });
        }

        let separator_width = isize::try_from(str_width(&self.separator)).unwrap_or(isize::MAX);
        let mut fields = Vec::with_capacity(self.columns.len());
        let mut rest = line;

        for (i, column) in self.columns.iter().enumerate() {
            if i > 0 {
                rest = split_at_width(rest, separator_width, true).1;
            }
            let (field, tail) = split_at_width(rest, column.signed_width(), true);
            fields.push(field);
            rest = tail;
        }

        Ok(fields)
    }
}

// ===== Winnow parsers =====

/// Column plus the input length left when it started, for error offsets
struct RawColumn {
    column: Column,
    remaining: usize,
}

/// Parse `<width>[<align>][:<fill>]`
fn w_column(input: &mut &str) -> ModalResult<RawColumn> {
    let remaining = input.len();
    let width: usize = digit1.parse_to().parse_next(input)?;
    let align = opt(alt((
        '<'.value(Align::Left),
        '>'.value(Align::Right),
        '|'.value(Align::Clip),
    )))
    .parse_next(input)?;
    // Once `:` is seen the fill is mandatory; the error stays after the `:`
    let fill = opt(preceded(
        ':',
        cut_err(any.context(StrContext::Label("fill character after `:`"))),
    ))
    .parse_next(input)?;
    Ok(RawColumn {
        column: Column {
            width,
            align: align.unwrap_or_default(),
            fill: fill.unwrap_or(DEFAULT_FILL),
        },
        remaining,
    })
}

/// Parse the gap between columns: a comma with optional spacing, or spacing alone
fn w_gap(input: &mut &str) -> ModalResult<()> {
    alt(((multispace0, ',', multispace0).void(), multispace1.void())).parse_next(input)
}

/// Parse `sep="<text>"`
fn w_separator(input: &mut &str) -> ModalResult<String> {
    let _ = "sep=".parse_next(input)?;
    let text: &str = delimited('"', take_while(0.., |c: char| c != '"'), '"').parse_next(input)?;
    Ok(text.to_string())
}

/// Parse a whole layout description
fn w_layout(input: &mut &str) -> ModalResult<(Vec<RawColumn>, Option<String>)> {
    let _ = multispace0.parse_next(input)?;
    let mut columns = vec![w_column.parse_next(input)?];
    while let Some(column) = opt(preceded(w_gap, w_column)).parse_next(input)? {
        columns.push(column);
    }
    let separator = opt(preceded(w_gap, w_separator)).parse_next(input)?;
    let _ = multispace0.parse_next(input)?;
    let _ = eof.parse_next(input)?;
    Ok((columns, separator))
}
