//! Format validation utilities for the SMS format
//!
//! This module contains pure parsing and validation functions with no I/O
//! dependencies. Readers feed them one line at a time.

pub mod bounds;
pub mod parsing;

pub use bounds::validate_coordinates;
pub use parsing::{parse_entry_line, parse_header_line, parse_index};
