//! Count lattice cells within a few radii, including one past the ceiling.
//!
//! ```bash
//! RUST_LOG=debug cargo run --example count_cells
//! ```
use radial_pattern::prelude::*;

fn main() {
    env_logger::init();

    let table = PatternTable::build(119);
    println!("Pattern holds {} cells up to radius {}", table.len(), table.max_pattern_radius());

    for radius in [0.0, 1.0, 1.5, 2.0, 10.5, 118.999, 119.0] {
        println!("r = {radius:>8}: {} cells", table.count_within_radius(radius));
    }

    // Saturates and logs an error: the pattern does not reach that far
    let saturated = table.count_within_radius(150.0);
    assert_eq!(saturated, table.len(), "Radii past the ceiling should saturate");

    // The first ring beyond the origin
    for (point, radius) in table.points()[1..5].iter().zip(&table.radii()[1..5]) {
        println!("({:>2}, {:>2}) at {radius}", point.x, point.z);
    }
}
