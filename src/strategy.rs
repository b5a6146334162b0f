//! Interchangeable cell counting strategies and the slot a host installs them into.
//!
//! A host that owns a slow default counter exposes a [`CellCountHook`]; installing a
//! [`CellCounter`] into it redirects every count through the faster implementation.

use std::fmt;
use std::sync::Arc;

use crate::analytic::analytic_count;
use crate::lattice::lattice_point_count;
use crate::pattern::PatternTable;
use crate::query::{check_radius, small_radius_count};

/// Counts lattice cells within a radius of the origin
pub trait CellCounter: Send + Sync {
    /// Number of lattice points within `radius`
    fn num_cells_in_radius(&self, radius: f32) -> usize;

    /// Largest radius the counter answers exactly
    fn max_pattern_radius(&self) -> f32;

    /// Number of cells at the ceiling, i.e. the saturated count
    fn pattern_len(&self) -> usize;
}

/// Binary search then parity-guided stepping over a shared table
impl CellCounter for PatternTable {
    fn num_cells_in_radius(&self, radius: f32) -> usize {
        self.count_within_radius(radius)
    }

    fn max_pattern_radius(&self) -> f32 {
        Self::max_pattern_radius(self)
    }

    fn pattern_len(&self) -> usize {
        self.len()
    }
}

/// Area estimate then bidirectional stepping over a shared table
#[derive(Clone, Debug)]
pub struct EstimateCounter {
    table: Arc<PatternTable>,
}

impl EstimateCounter {
    /// Wraps a shared table
    pub fn new(table: Arc<PatternTable>) -> Self {
        Self { table }
    }
}

impl CellCounter for EstimateCounter {
    fn num_cells_in_radius(&self, radius: f32) -> usize {
        self.table.count_within_radius_estimate(radius)
    }

    fn max_pattern_radius(&self) -> f32 {
        self.table.max_pattern_radius()
    }

    fn pattern_len(&self) -> usize {
        self.table.len()
    }
}

/// Error-bound bracket around `pi * r^2`, binary search, then a short scan over a
/// shared table
#[derive(Clone, Debug)]
pub struct HuxleyCounter {
    table: Arc<PatternTable>,
}

impl HuxleyCounter {
    /// Wraps a shared table
    pub fn new(table: Arc<PatternTable>) -> Self {
        Self { table }
    }
}

impl CellCounter for HuxleyCounter {
    fn num_cells_in_radius(&self, radius: f32) -> usize {
        self.table.count_within_radius_huxley(radius)
    }

    fn max_pattern_radius(&self) -> f32 {
        self.table.max_pattern_radius()
    }

    fn pattern_len(&self) -> usize {
        self.table.len()
    }
}

/// Column summation without a table, saturating at a ceiling like the table counters.
///
/// Inherits the rounding caveats of [`analytic_count`].
#[derive(Clone, Copy, Debug)]
pub struct AnalyticCounter {
    max_radius: u32,
    pattern_len: usize,
}

impl AnalyticCounter {
    /// Counter saturating at `max_radius`
    pub fn new(max_radius: u32) -> Self {
        Self {
            max_radius,
            pattern_len: lattice_point_count(max_radius),
        }
    }
}

impl CellCounter for AnalyticCounter {
    fn num_cells_in_radius(&self, radius: f32) -> usize {
        if radius >= self.max_radius as f32 {
            check_radius(radius, self.max_radius);
            return self.pattern_len;
        }
        analytic_count(radius)
    }

    fn max_pattern_radius(&self) -> f32 {
        self.max_radius as f32
    }

    fn pattern_len(&self) -> usize {
        self.pattern_len
    }
}

/// Scans the radii from the start until one exceeds the radius.
///
/// This is how a host without a precomputed search answers the query; it serves as the
/// baseline the other counters are measured and checked against.
#[derive(Clone, Debug)]
pub struct LinearScanCounter {
    table: Arc<PatternTable>,
}

impl LinearScanCounter {
    /// Wraps a shared table
    pub fn new(table: Arc<PatternTable>) -> Self {
        Self { table }
    }
}

impl CellCounter for LinearScanCounter {
    fn num_cells_in_radius(&self, radius: f32) -> usize {
        if let Some(count) = small_radius_count(radius) {
            return count;
        }
        self.table.radii().iter().take_while(|&&r| r <= radius).count()
    }

    fn max_pattern_radius(&self) -> f32 {
        self.table.max_pattern_radius()
    }

    fn pattern_len(&self) -> usize {
        self.table.len()
    }
}

/// Errors raised when installing a counter into a [`CellCountHook`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum HookError {
    /// The host's pattern no longer has the stock length, so another party replaced it
    #[error("host pattern holds {found} cells, expected {expected}; leaving it to whoever replaced it")]
    PatternConflict {
        /// Stock pattern length the installer was written against
        expected: usize,
        /// Pattern length the host currently reports
        found: usize,
    },
}

/// Slot through which a host routes its cell counting.
///
/// Starts out dispatching to the host's default counter. Reads take `&self`, so a hook
/// behind an `Arc` can serve queries from any number of threads.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use radial_pattern::strategy::{CellCountHook, LinearScanCounter};
/// use radial_pattern::PatternTable;
///
/// let stock = Arc::new(PatternTable::build(20));
/// let mut hook = CellCountHook::new(Arc::new(LinearScanCounter::new(stock.clone())));
/// hook.install(Arc::new(PatternTable::build(119)), stock.len()).unwrap();
/// assert!(hook.is_installed());
/// assert_eq!(hook.num_cells_in_radius(50.0), 7_845);
/// ```
pub struct CellCountHook {
    default: Arc<dyn CellCounter>,
    installed: Option<Arc<dyn CellCounter>>,
}

impl CellCountHook {
    /// Hook dispatching to the host's default counter
    pub fn new(default: Arc<dyn CellCounter>) -> Self {
        Self {
            default,
            installed: None,
        }
    }

    /// Routes counting through `counter`.
    ///
    /// `stock_len` is the length the host's default pattern had when the counter was
    /// written against it. If the default reports anything else, the pattern was
    /// replaced by someone else and the install is refused.
    ///
    /// # Errors
    /// Returns [`HookError::PatternConflict`] if the default pattern length differs.
    pub fn install(&mut self, counter: Arc<dyn CellCounter>, stock_len: usize) -> Result<(), HookError> {
        let found = self.default.pattern_len();
        if found != stock_len {
            log::warn!("host pattern was replaced ({found} cells, expected {stock_len}), skipping to avoid conflicts");
            return Err(HookError::PatternConflict {
                expected: stock_len,
                found,
            });
        }
        log::info!(
            "cell counting redirected: {} cells up to radius {}",
            counter.pattern_len(),
            counter.max_pattern_radius()
        );
        self.installed = Some(counter);
        Ok(())
    }

    /// Restores the default counter, returning the one that was installed
    pub fn uninstall(&mut self) -> Option<Arc<dyn CellCounter>> {
        self.installed.take()
    }

    /// Whether an override is active
    pub fn is_installed(&self) -> bool {
        self.installed.is_some()
    }

    fn active(&self) -> &dyn CellCounter {
        self.installed.as_deref().unwrap_or(&*self.default)
    }

    /// Counts through the active counter
    pub fn num_cells_in_radius(&self, radius: f32) -> usize {
        self.active().num_cells_in_radius(radius)
    }

    /// Ceiling of the active counter
    pub fn max_pattern_radius(&self) -> f32 {
        self.active().max_pattern_radius()
    }
}

impl fmt::Debug for CellCountHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellCountHook")
            .field("installed", &self.is_installed())
            .field("max_pattern_radius", &self.max_pattern_radius())
            .finish_non_exhaustive()
    }
}
