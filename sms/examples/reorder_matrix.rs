//! Reorder a small random matrix and show which rows moved where

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sms::{ReorderConfig, Reorderer, SparseStore};

fn main() -> sms::Result<()> {
    let (nrows, ncols) = (8, 10);
    let mut rng = StdRng::seed_from_u64(2010);
    let mut store = SparseStore::new(nrows, ncols);
    for i in 1..=nrows {
        for _ in 0..rng.gen_range(1..=4) {
            store.set(i, rng.gen_range(1..=ncols), rng.gen_range(1..=9) as f64)?;
        }
    }

    println!("Input ({} nonzeros):", store.nnz());
    print!("{}", String::from_utf8_lossy(&store.write_to(Vec::new())?));

    let report = Reorderer::new(&ReorderConfig::default(), &store)?.run(&mut store);
    for step in &report.steps {
        println!(
            "cursor {:>2}: row {:>2} pivot {:>4} badness {:.3}",
            step.cursor,
            step.row,
            step.pivot.map_or("-".to_string(), |p| p.to_string()),
            step.badness
        );
    }
    println!("Row permutation: {:?}", &report.row_permutation()[1..]);

    println!("Output:");
    print!("{}", String::from_utf8_lossy(&store.write_to(Vec::new())?));
    Ok(())
}
