//! Edge parity of the Gauss circle count.
//!
//! Off-axis, off-diagonal lattice points come in groups of 8. Within radius `r` there
//! are `a = floor(r)` points on each half-axis and `d = floor(r * sqrt(1/2))` on each
//! half-diagonal, so the count is always `1 + 4a + 4d + 8n`: of the form `8n + 1` when
//! `a + d` is even and `8n + 5` when it is odd.
//!
//! [`has_odd_edge_parity`] reads that parity straight out of the IEEE-754 layout of `r`
//! and `r * sqrt(1/2)`, without converting either value to an integer.

use std::f32::consts::FRAC_1_SQRT_2;

const MANTISSA_MASK: u32 = 0x007F_FFFF;
const IMPLICIT_BIT: u32 = 0x0080_0000;
const MANTISSA_BITS: i32 = 23;
const EXPONENT_BIAS: i32 = 127;
/// Headroom so that values up to 2^31 shift right, never left
const PRE_SHIFT: i32 = 8;

/// Returns true when `floor(r) + floor(r * sqrt(1/2))` is odd, i.e. the lattice count
/// within `r` is `8n + 5` rather than `8n + 1`.
///
/// Valid for `0 <= r < 2^31`.
///
/// # Example
/// ```
/// use radial_pattern::parity::has_odd_edge_parity;
/// assert!(!has_odd_edge_parity(0.5)); // 1 point
/// assert!(has_odd_edge_parity(1.0)); // 5 points
/// assert!(!has_odd_edge_parity(1.5)); // 9 points
/// assert!(has_odd_edge_parity(2.0)); // 13 points
/// ```
#[inline]
pub fn has_odd_edge_parity(r: f32) -> bool {
    let d = r * FRAC_1_SQRT_2;
    (truncated_low_bit(r.to_bits()) ^ truncated_low_bit(d.to_bits())) != 0
}

/// Lowest bit of the truncated integer part of a non-negative `f32` given as raw bits.
#[inline(always)]
fn truncated_low_bit(bits: u32) -> u64 {
    // Mantissa with the implicit leading one restored
    let mantissa = u64::from((bits & MANTISSA_MASK) | IMPLICIT_BIT);
    let exponent = ((bits >> MANTISSA_BITS) & 0xFF) as i32;
    // Number of fraction bits below the binary point
    let shift = MANTISSA_BITS + EXPONENT_BIAS - exponent;
    let shift = (shift + PRE_SHIFT).clamp(0, 63) as u32;
    ((mantissa << PRE_SHIFT) >> shift) & 1
}

/// Direct computation of [`has_odd_edge_parity`] with float-to-int conversions.
///
/// Reference oracle for tests and benchmarks; the query path uses the bit version.
pub fn has_odd_edge_parity_reference(r: f32) -> bool {
    let d = r * FRAC_1_SQRT_2;
    (r as i64).wrapping_add(d as i64) % 2 != 0
}
