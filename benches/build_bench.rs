//! Benchmark for pattern construction
//!
//! Times the one-octant build against a straightforward full-disc build that
//! enumerates every lattice point and sorts the whole set, for several ceilings.

use radial_pattern::{LatticePoint, PatternTable};
use std::hint::black_box;
use std::time::Instant;

/// Full-disc build: every point in the bounding square, filtered and fully sorted
fn build_full_sort(max_radius: i32) -> (Vec<LatticePoint>, Vec<f32>) {
    let max_radius_squared = max_radius * max_radius;
    let mut points = Vec::new();
    for x in -max_radius..=max_radius {
        for z in -max_radius..=max_radius {
            let point = LatticePoint::new(x, z);
            if point.length_squared() <= max_radius_squared {
                points.push(point);
            }
        }
    }
    points.sort_by_key(|point| point.length_squared());
    let radii = points.iter().map(|point| point.length()).collect();
    (points, radii)
}

fn bench_build(max_radius: u32, iterations: u32) {
    let start = Instant::now();
    for _ in 0..iterations {
        black_box(PatternTable::build(black_box(max_radius)));
    }
    let octant_time = start.elapsed();

    let start = Instant::now();
    for _ in 0..iterations {
        black_box(build_full_sort(black_box(max_radius as i32)));
    }
    let full_time = start.elapsed();

    println!(
        "max radius {:>4}: octant build {:.3}ms, full sort {:.3}ms (x{:.1})",
        max_radius,
        octant_time.as_secs_f64() * 1000.0 / iterations as f64,
        full_time.as_secs_f64() * 1000.0 / iterations as f64,
        full_time.as_secs_f64() / octant_time.as_secs_f64()
    );
}

fn main() {
    println!("Radial Pattern Build Benchmark");
    println!("==============================\n");

    bench_build(50, 200);
    bench_build(119, 100);
    bench_build(200, 50);
    bench_build(500, 10);
    bench_build(1000, 3);
    println!();
}
