//! Read → reorder → write driver
//!
//! The phases never interleave: the input is drained into a
//! [`SparseStore`] before reordering starts, and nothing is written until
//! reordering is complete. Configuration is validated before either stream
//! is touched. Callers that must not create the output before the input is
//! known to be good (the output may be the input file) use
//! [`load_and_reorder`] and write the store themselves.

use crate::codec::SmsReader;
use crate::config::ReorderConfig;
use crate::error::Result;
use crate::reorder::{ReorderReport, Reorderer};
use crate::store::SparseStore;
use std::io::{BufRead, Write};

/// Value type used by the reordering pipeline
pub type Value = f64;

/// Read the SMS matrix on `input` and reorder it in memory
pub fn load_and_reorder<R: BufRead>(
    input: R,
    config: &ReorderConfig,
) -> Result<(SparseStore<Value>, ReorderReport)> {
    config.weights.normalized()?;

    let reader = SmsReader::<_, Value>::open(input)?;
    let mut store = SparseStore::from_reader(reader)?;

    let report = Reorderer::new(config, &store)?.run(&mut store);
    Ok((store, report))
}

/// Reorder the SMS matrix on `input` and write the result to `output`
pub fn reorder_stream<R, W>(input: R, output: W, config: &ReorderConfig) -> Result<ReorderReport>
where
    R: BufRead,
    W: Write,
{
    let (store, report) = load_and_reorder(input, config)?;
    store.write_to(output)?;
    Ok(report)
}
