//! Text format definitions for the SMS exchange format
//!
//! This module contains pure data structure definitions for the SMS wire
//! format. No I/O operations - only the shapes of header and entry lines.

pub mod constants;
pub mod entry;
pub mod header;

// Re-export format definitions
pub use entry::{is_terminator, Entry};
pub use header::SmsHeader;
