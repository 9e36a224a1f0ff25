//! Example: solve one instance with all four methods.
//!
//! Run with:
//! `cargo run --example solve_all`

use knapsack_dp::{solve_all, KnapsackError, KnapsackInstance};

fn main() -> Result<(), KnapsackError> {
    let weights = vec![10, 20, 30];
    let values = vec![60, 100, 120];
    let capacity = 50;

    let instance = KnapsackInstance::new(weights, values, capacity)?;
    let results = solve_all(&instance)?;

    for (method, value) in results.iter() {
        println!("{method}: {value}");
    }
    println!(
        "Optimal value: {}",
        results.agreed_value().unwrap_or_default()
    );

    // Mismatched input is rejected before any solver runs.
    if let Err(err) = KnapsackInstance::new(vec![1, 2], vec![3], 4) {
        println!("Rejected: {err}");
    }
    Ok(())
}
