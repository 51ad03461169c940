//! Format constants for the SMS format

/// Literal token closing the header line
pub const MARKER: &str = "M";

/// Line that ends the entry stream
pub const TERMINATOR: &str = "0 0 0";

/// Reserved coordinate used only by the terminator
pub const RESERVED_INDEX: usize = 0;

/// Number of whitespace-separated fields on every header and entry line
pub const FIELDS_PER_LINE: usize = 3;
