//! Matrix transposition over SMS streams

use crate::codec::SmsReader;
use crate::error::{Error, Result};
use crate::store::SparseStore;
use sms_core::{MatrixElement, SmsHeader};
use std::io::{BufRead, Write};

/// Which shapes get transposed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransposeMode {
    /// Always transpose
    #[default]
    Always,
    /// Only transpose if the result has at least as many rows as columns
    Tall,
    /// Only transpose if the result has at least as many columns as rows
    Wide,
}

impl TransposeMode {
    /// Build a mode from the `--tall` / `--wide` flags
    pub fn from_flags(tall: bool, wide: bool) -> Result<Self> {
        match (tall, wide) {
            (true, true) => Err(Error::InvalidOption(
                "only one of '--tall' and '--wide' can be given at a time".into(),
            )),
            (true, false) => Ok(TransposeMode::Tall),
            (false, true) => Ok(TransposeMode::Wide),
            (false, false) => Ok(TransposeMode::Always),
        }
    }

    /// Whether a matrix with `header` should be transposed
    pub fn applies_to(&self, header: SmsHeader) -> bool {
        match self {
            TransposeMode::Always => true,
            TransposeMode::Tall => header.nrows <= header.ncols,
            TransposeMode::Wide => header.ncols <= header.nrows,
        }
    }
}

/// Read the matrix on `input`, transposed if `mode` says so
///
/// Returns the store and whether the matrix was transposed.
pub fn load_and_transpose<R, V>(input: R, mode: TransposeMode) -> Result<(SparseStore<V>, bool)>
where
    R: BufRead,
    V: MatrixElement,
{
    let reader = SmsReader::<_, V>::open(input)?;
    let transpose = mode.applies_to(reader.header());
    let store = SparseStore::from_reader(reader)?;
    if transpose {
        Ok((store.transposed(), true))
    } else {
        Ok((store, false))
    }
}

/// Copy the matrix on `input` to `output`, transposed if `mode` says so
///
/// Values are carried through unchanged. Returns whether the matrix was
/// transposed.
pub fn transpose_stream<R, W, V>(input: R, output: W, mode: TransposeMode) -> Result<bool>
where
    R: BufRead,
    W: Write,
    V: MatrixElement,
{
    let (store, transposed) = load_and_transpose::<_, V>(input, mode)?;
    store.write_to(output)?;
    Ok(transposed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sms_core::Token;

    fn run(input: &str, mode: TransposeMode) -> (bool, String) {
        let mut output = Vec::new();
        let done = transpose_stream::<_, _, Token>(input.as_bytes(), &mut output, mode).unwrap();
        (done, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_transpose() {
        let (done, out) = run("2 3 M\n1 3 a\n2 1 b\n0 0 0\n", TransposeMode::Always);
        assert!(done);
        assert_eq!(out, "3 2 M\n1 2 b\n3 1 a\n0 0 0\n");
    }

    #[test]
    fn test_tall_skips_already_tall() {
        let (done, out) = run("3 2 M\n3 1 x\n0 0 0\n", TransposeMode::Tall);
        assert!(!done);
        assert_eq!(out, "3 2 M\n3 1 x\n0 0 0\n");

        let (done, _) = run("3 2 M\n3 1 x\n0 0 0\n", TransposeMode::Wide);
        assert!(done);
    }

    #[test]
    fn test_load_and_transpose() {
        let (store, done) =
            load_and_transpose::<_, Token>("1 2 M\n1 2 z\n0 0 0\n".as_bytes(), TransposeMode::Always)
                .unwrap();
        assert!(done);
        assert_eq!(store.header(), SmsHeader::new(2, 1));
        assert_eq!(store.get(2, 1), Some(&Token("z".into())));
    }

    #[test]
    fn test_conflicting_flags() {
        assert!(TransposeMode::from_flags(true, true).is_err());
        assert_eq!(TransposeMode::from_flags(false, true).unwrap(), TransposeMode::Wide);
    }
}
