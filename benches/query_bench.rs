//! Benchmark for cell counting queries
//!
//! Sweeps radii from 1 to the ceiling in steps of 0.01 through each counting strategy,
//! then repeats the bracketed search from several threads sharing one table.

use radial_pattern::analytic::analytic_count;
use radial_pattern::parity::{has_odd_edge_parity, has_odd_edge_parity_reference};
use radial_pattern::strategy::{CellCounter, EstimateCounter, HuxleyCounter, LinearScanCounter};
use radial_pattern::PatternTable;
use std::hint::black_box;
use std::sync::Arc;
use std::thread;
use std::time::Instant;

const MAX_RADIUS: u32 = 119;

fn sweep() -> Vec<f32> {
    (100..MAX_RADIUS * 100).map(|i| i as f32 * 0.01).collect()
}

fn bench_counter(name: &str, radii: &[f32], count: impl Fn(f32) -> usize) {
    let start = Instant::now();
    let mut total = 0usize;
    for &radius in radii {
        total = total.wrapping_add(count(black_box(radius)));
    }
    let elapsed = start.elapsed();
    black_box(total);
    println!(
        "{:<16} {} queries: {:.3}ms ({:.1}ns/query)",
        name,
        radii.len(),
        elapsed.as_secs_f64() * 1000.0,
        elapsed.as_secs_f64() * 1e9 / radii.len() as f64
    );
}

fn main() {
    println!("Radial Pattern Query Benchmark");
    println!("==============================\n");

    let table = Arc::new(PatternTable::build(MAX_RADIUS));
    let estimate = EstimateCounter::new(Arc::clone(&table));
    let huxley = HuxleyCounter::new(Arc::clone(&table));
    let scan = LinearScanCounter::new(Arc::clone(&table));
    let radii = sweep();

    println!("Running query benchmarks:");
    println!("-----------------------");
    bench_counter("bracketed", &radii, |r| table.count_within_radius(r));
    bench_counter("estimate", &radii, |r| estimate.num_cells_in_radius(r));
    bench_counter("error bound", &radii, |r| huxley.num_cells_in_radius(r));
    bench_counter("analytic", &radii, analytic_count);
    bench_counter("linear scan", &radii, |r| scan.num_cells_in_radius(r));
    println!();

    println!("Running parity benchmarks:");
    println!("-----------------------");
    bench_counter("parity bits", &radii, |r| usize::from(has_odd_edge_parity(r)));
    bench_counter("parity casts", &radii, |r| usize::from(has_odd_edge_parity_reference(r)));
    println!();

    let num_threads = 8;
    println!("Running {num_threads} threads on one shared table:");
    println!("-----------------------");
    let start = Instant::now();
    let handles: Vec<_> = (0..num_threads)
        .map(|_| {
            let table = Arc::clone(&table);
            let radii = radii.clone();
            thread::spawn(move || radii.iter().map(|&r| table.count_within_radius(r)).sum::<usize>())
        })
        .collect();
    for handle in handles {
        black_box(handle.join().expect("query thread panicked"));
    }
    println!(
        "{} queries: {:.3}ms",
        num_threads * radii.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );
}
