use std::fmt;

/// Errors returned by the width-aware text operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidthError {
    /// Character subrange outside the text
    OutOfRange {
        begin: usize,
        end: usize,
        len: usize,
    },
    /// Column layout description could not be parsed
    Layout { position: usize, message: String },
    /// Row has a different number of fields than the layout has columns
    ColumnCount { expected: usize, found: usize },
    /// Layout has a clip-only column, so field boundaries are unknown
    ClipColumn { index: usize },
}

impl fmt::Display for WidthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidthError::OutOfRange { begin, end, len } => {
                write!(
                    f,
                    "Range {}..{} out of bounds for text of {} characters",
                    begin, end, len
                )
            }
            WidthError::Layout { position, message } => {
                write!(f, "Layout error at offset {}: {}", position, message)
            }
            WidthError::ColumnCount { expected, found } => {
                write!(f, "Expected {} fields, found {}", expected, found)
            }
            WidthError::ClipColumn { index } => {
                write!(f, "Column {} is clip-only and cannot be unpacked", index)
            }
        }
    }
}

impl std::error::Error for WidthError {}
