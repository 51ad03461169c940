//! Error types for SMS format operations

/// Broad classification of an error, independent of its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The byte stream does not follow the SMS grammar
    Format,
    /// A coordinate lies outside the declared matrix dimensions
    Range,
    /// The caller supplied an unusable configuration
    Configuration,
    /// The underlying stream failed
    Io,
}

impl core::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            ErrorCategory::Format => "format",
            ErrorCategory::Range => "range",
            ErrorCategory::Configuration => "configuration",
            ErrorCategory::Io => "I/O",
        };
        write!(f, "{name}")
    }
}

/// Errors that can occur while parsing or validating SMS data
///
/// Line numbers are 1-based positions in the input stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmsError {
    /// Header dimensions missing or not non-negative integers
    MalformedHeader { line: u64 },
    /// Header dimensions parsed but the `M` marker is absent or wrong
    MissingMarker { line: u64 },
    /// Entry line does not consist of `row col value`
    MalformedEntry { line: u64 },
    /// Stream ended before the `0 0 0` terminator
    UnexpectedEof { line: u64 },
    /// Row coordinate outside `1..=nrows`
    RowOutOfRange { row: usize, nrows: usize },
    /// Column coordinate outside `1..=ncols`
    ColumnOutOfRange { col: usize, ncols: usize },
    /// Declared dimensions cannot be held in memory
    DimensionsTooLarge { nrows: usize, ncols: usize },
    /// Every reordering weight is zero
    DegenerateWeights,
}

impl SmsError {
    /// Classify this error
    pub const fn category(&self) -> ErrorCategory {
        match self {
            SmsError::MalformedHeader { .. }
            | SmsError::MissingMarker { .. }
            | SmsError::MalformedEntry { .. }
            | SmsError::UnexpectedEof { .. } => ErrorCategory::Format,
            SmsError::RowOutOfRange { .. }
            | SmsError::ColumnOutOfRange { .. }
            | SmsError::DimensionsTooLarge { .. } => ErrorCategory::Range,
            SmsError::DegenerateWeights => ErrorCategory::Configuration,
        }
    }
}

impl core::fmt::Display for SmsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SmsError::MalformedHeader { line } => write!(f, "Malformed SMS header at line {line}"),
            SmsError::MissingMarker { line } => {
                write!(f, "Malformed SMS header at line {line}: expected marker 'M'")
            }
            SmsError::MalformedEntry { line } => write!(f, "Malformed matrix entry at line {line}"),
            SmsError::UnexpectedEof { line } => {
                write!(f, "Unexpected end of stream after line {line}: missing '0 0 0' terminator")
            }
            SmsError::RowOutOfRange { row, nrows } => {
                write!(f, "Row index {row} out of range 1..={nrows}")
            }
            SmsError::ColumnOutOfRange { col, ncols } => {
                write!(f, "Column index {col} out of range 1..={ncols}")
            }
            SmsError::DimensionsTooLarge { nrows, ncols } => {
                write!(f, "Matrix dimensions {nrows} x {ncols} are too large to allocate")
            }
            SmsError::DegenerateWeights => {
                write!(f, "Reordering weights must not all be zero")
            }
        }
    }
}

impl core::error::Error for SmsError {}

/// Result type for SMS format operations
pub type Result<T> = core::result::Result<T, SmsError>;
