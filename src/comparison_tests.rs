//! Comparison tests between the counting strategies (bracketed search, area estimate,
//! error-bound bracket, linear scan, column summation)

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rand::{Rng, SeedableRng};

    use crate::analytic::analytic_count;
    use crate::parity::{has_odd_edge_parity, has_odd_edge_parity_reference};
    use crate::strategy::{AnalyticCounter, CellCounter, EstimateCounter, HuxleyCounter, LinearScanCounter};
    use crate::PatternTable;

    const MAX_RADIUS: u32 = 119;

    /// Helper to build one shared table and every strategy over it
    fn setup_counters() -> (Arc<PatternTable>, EstimateCounter, LinearScanCounter) {
        let table = Arc::new(PatternTable::build(MAX_RADIUS));
        let estimate = EstimateCounter::new(Arc::clone(&table));
        let scan = LinearScanCounter::new(Arc::clone(&table));
        (table, estimate, scan)
    }

    #[test]
    fn test_huxley_agrees_on_tenth_steps() {
        let (table, _, scan) = setup_counters();
        let huxley = HuxleyCounter::new(Arc::clone(&table));
        for i in 0..=(MAX_RADIUS + 2) * 10 {
            let radius = i as f32 * 0.1;
            assert_eq!(
                huxley.num_cells_in_radius(radius),
                scan.num_cells_in_radius(radius),
                "error-bound search differs at r = {radius}"
            );
        }
    }

    #[test]
    fn test_huxley_agrees_on_random_radii() {
        let (table, _, scan) = setup_counters();
        let huxley = HuxleyCounter::new(Arc::clone(&table));
        let mut rng = rand::rngs::StdRng::seed_from_u64(2003);
        for _ in 0..20_000 {
            let radius: f32 = rng.random_range(-1.0..MAX_RADIUS as f32 + 1.0);
            assert_eq!(
                huxley.num_cells_in_radius(radius),
                scan.num_cells_in_radius(radius),
                "error-bound search differs at r = {radius}"
            );
        }
    }

    #[test]
    fn test_strategies_agree_on_tenth_steps() {
        let (table, estimate, scan) = setup_counters();
        for i in 0..=MAX_RADIUS * 10 {
            let radius = i as f32 * 0.1;
            let expected = scan.num_cells_in_radius(radius);
            assert_eq!(table.num_cells_in_radius(radius), expected, "search differs at r = {radius}");
            assert_eq!(estimate.num_cells_in_radius(radius), expected, "estimate differs at r = {radius}");
        }
    }

    #[test]
    fn test_strategies_agree_on_random_radii() {
        let (table, estimate, scan) = setup_counters();
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for _ in 0..20_000 {
            let radius: f32 = rng.random_range(-1.0..MAX_RADIUS as f32 + 1.0);
            let expected = scan.num_cells_in_radius(radius);
            assert_eq!(table.count_within_radius(radius), expected, "search differs at r = {radius}");
            assert_eq!(
                estimate.num_cells_in_radius(radius),
                expected,
                "estimate differs at r = {radius}"
            );
        }
    }

    #[test]
    fn test_analytic_close_to_table() {
        let (table, _, _) = setup_counters();
        let mut worst = 0;
        for i in 10..MAX_RADIUS * 10 {
            let radius = i as f32 * 0.1;
            let exact = table.count_within_radius(radius);
            let approx = analytic_count(radius);
            worst = worst.max(exact.abs_diff(approx));
        }
        assert!(worst <= 2, "analytic count off by {worst} cells");
    }

    #[test]
    fn test_analytic_counter_matches_table_ceiling() {
        let (table, _, _) = setup_counters();
        let analytic = AnalyticCounter::new(MAX_RADIUS);
        assert_eq!(analytic.pattern_len(), table.len());
        assert_eq!(analytic.max_pattern_radius(), table.max_pattern_radius());
        assert_eq!(analytic.num_cells_in_radius(150.0), table.num_cells_in_radius(150.0));
    }

    #[test]
    fn test_parity_oracle_agrees_on_table_range() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        for _ in 0..100_000 {
            let radius: f32 = rng.random_range(0.0..MAX_RADIUS as f32);
            assert_eq!(
                has_odd_edge_parity(radius),
                has_odd_edge_parity_reference(radius),
                "parity differs at r = {radius}"
            );
        }
    }

    #[test]
    fn test_parity_predicts_count_residue() {
        let (table, _, _) = setup_counters();
        let mut rng = rand::rngs::StdRng::seed_from_u64(1234);
        for _ in 0..10_000 {
            let radius: f32 = rng.random_range(0.0..MAX_RADIUS as f32);
            let residue = if has_odd_edge_parity(radius) { 5 } else { 1 };
            assert_eq!(table.count_within_radius(radius) % 8, residue, "r = {radius}");
        }
    }
}
