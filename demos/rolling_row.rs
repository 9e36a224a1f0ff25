//! Example: the single-row solver next to the full tables.
//!
//! Run with:
//! `cargo run --example rolling_row`

use knapsack_dp::formulations::{prefix, suffix};
use knapsack_dp::{ConsistencyChecker, KnapsackError, KnapsackInstance};

fn main() -> Result<(), KnapsackError> {
    let instance = KnapsackInstance::new(vec![3, 4, 5], vec![30, 50, 60], 8)?;

    let checker = ConsistencyChecker::builder().with_rolling_row().build();
    let results = checker.check(&instance)?;
    println!("{results}");

    let forward = prefix::fill_table(&instance);
    println!("\ng(k, w), first k items under budget w:");
    for k in 0..forward.rows() {
        println!("  k={k}: {:?}", forward.row(k));
    }

    let backward = suffix::fill_table(&instance);
    println!("\nf(i, c), items i..n with c remaining:");
    for i in 0..backward.rows() {
        println!("  i={i}: {:?}", backward.row(i));
    }
    Ok(())
}
