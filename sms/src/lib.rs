//! SMS - Streaming Sparse Matrix Tools
//!
//! This library reads and writes sparse matrices in the line-oriented SMS
//! exchange format and reorders rows and columns of a matrix so that rank
//! computation by Gaussian elimination produces less fill-in.
//!
//! ## Architecture
//!
//! - **sms-core**: format definitions, value traits and validation (no I/O)
//! - **sms**: codec over std streams, the in-memory store, the reorderer and
//!   the small tools built on them
//!
//! ## Quick Start
//!
//! ```rust
//! use sms::{reorder_stream, ReorderConfig};
//!
//! fn example() -> sms::Result<()> {
//!     let input = "2 2 M\n1 2 1\n2 1 1\n0 0 0\n";
//!     let mut output = Vec::new();
//!     let report = reorder_stream(input.as_bytes(), &mut output, &ReorderConfig::default())?;
//!     println!("{} rows placed", report.steps.len());
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Format
//!
//! ```text
//! 3 3 M        header: rows, columns, literal M
//! 1 3 1        entries: row col value, 1-based
//! 2 1 1
//! 0 0 0        terminator
//! ```

// Re-export core abstractions and format definitions
pub use sms_core::{
    // Core traits
    MatrixElement, SparseMatrix, Token,
    // Format definitions
    Entry, SmsHeader,
    // Error handling
    ErrorCategory, SmsError,
};

// Implementation modules
pub mod codec;
pub mod config;
pub mod error;
#[cfg(feature = "mmap")]
pub mod file;
pub mod info;
pub mod pipeline;
pub mod reorder;
pub mod store;
pub mod transpose;

// Public exports
pub use codec::{SmsReader, SmsWriter};
pub use config::{ReorderConfig, Weights};
pub use error::{Error, Result};
pub use info::MatrixInfo;
pub use pipeline::{load_and_reorder, reorder_stream};
pub use reorder::{reorder, ReorderReport, ReorderStep, Reorderer};
pub use store::{SparseRow, SparseStore};
pub use transpose::{load_and_transpose, transpose_stream, TransposeMode};

// Memory mapping features
#[cfg(feature = "mmap")]
pub use file::SmsFile;
