//! Abstract interfaces for the SMS format
//!
//! Traits are pure interfaces - the concrete store lives in the `sms` crate.

pub mod element;
pub mod matrix;

pub use element::MatrixElement;
#[cfg(feature = "alloc")]
pub use element::Token;
pub use matrix::SparseMatrix;
