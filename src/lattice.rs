//! Integer lattice points and the exact Gauss circle count used to size a pattern.

/// A point on the 2D integer lattice.
///
/// The pattern lives on the horizontal plane, so the coordinates are named `x` and `z`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LatticePoint {
    /// Horizontal coordinate
    pub x: i32,
    /// Depth coordinate
    pub z: i32,
}

impl LatticePoint {
    /// Creates a lattice point from its two coordinates
    ///
    /// # Example
    /// ```
    /// use radial_pattern::LatticePoint;
    /// let p = LatticePoint::new(3, -4);
    /// assert_eq!(p.length_squared(), 25);
    /// ```
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Squared Euclidean distance from the origin
    pub const fn length_squared(self) -> i32 {
        self.x * self.x + self.z * self.z
    }

    /// Euclidean distance from the origin, rounded to `f32` the same way the pattern radii are
    pub fn length(self) -> f32 {
        (self.length_squared() as f32).sqrt()
    }
}

/// Exact number of lattice points `(x, z)` with `x² + z² <= max_radius²`.
///
/// Computed column by column with integer square roots, so it is suitable for
/// sizing a pattern ahead of the build and for checking a precomputed length.
///
/// # Example
/// ```
/// use radial_pattern::lattice_point_count;
/// assert_eq!(lattice_point_count(0), 1);
/// assert_eq!(lattice_point_count(1), 5);
/// assert_eq!(lattice_point_count(2), 13);
/// assert_eq!(lattice_point_count(119), 44_469);
/// assert_eq!(lattice_point_count(200), 125_629);
/// ```
pub const fn lattice_point_count(max_radius: u32) -> usize {
    let r = max_radius as u64;
    let r_squared = r * r;
    // One quadrant without the axes, then the four half-axes and the origin
    let mut quadrant = 0u64;
    let mut x = 1;
    while x <= r {
        quadrant += (r_squared - x * x).isqrt();
        x += 1;
    }
    (4 * (quadrant + r) + 1) as usize
}
