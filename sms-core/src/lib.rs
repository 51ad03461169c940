#![no_std]

//! SMS Core - Sparse Matrix Stream Format Definitions
//!
//! This crate provides the format definitions, value traits and validation
//! helpers for the line-oriented SMS sparse matrix exchange format. It does
//! no I/O; readers and writers live in the `sms` crate.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
pub mod format;
pub mod traits;
pub mod validation;

pub use error::*;
pub use format::*;
pub use traits::*;
pub use validation::{parse_entry_line, parse_header_line, validate_coordinates};
