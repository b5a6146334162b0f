//! Route a host's slow cell counting through the precomputed pattern.
use std::sync::Arc;

use radial_pattern::prelude::*;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // The host ships a small stock pattern and scans it linearly
    let stock = Arc::new(PatternTable::build(56));
    let stock_len = stock.len();
    let mut hook = CellCountHook::new(Arc::new(LinearScanCounter::new(stock)));
    println!("Stock: {} cells within 40", hook.num_cells_in_radius(40.0));
    println!("Stock: {} cells within 100 (saturated)", hook.num_cells_in_radius(100.0));

    // Build once, install, then every query goes through the bracketed search
    let table = Arc::new(PatternTable::build_default());
    hook.install(table, stock_len).expect("stock pattern should be untouched");
    println!("Installed: {} cells within 40", hook.num_cells_in_radius(40.0));
    println!("Installed: {} cells within 100", hook.num_cells_in_radius(100.0));

    // An install against a pattern someone else already replaced is refused
    let mut replaced = CellCountHook::new(Arc::new(AnalyticCounter::new(80)));
    let refused = replaced.install(Arc::new(PatternTable::build(119)), stock_len);
    assert!(refused.is_err(), "Install over a replaced pattern should be refused");
    println!("Refused: {}", refused.unwrap_err());
}
