//! Angle utilities for edge orientation.
//!
//! Edges are undirected: an edge at θ and one at θ + π render with the same
//! glyph, so orientations live in [0, π).
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, FRAC_PI_8, PI};

/// Normalizes an angle into the range [0, π).
#[inline]
pub fn normalize_half_pi(angle: f32) -> f32 {
    let mut norm = angle.rem_euclid(PI);
    if norm >= PI {
        norm -= PI;
    }
    if norm >= PI - 1e-6 {
        0.0
    } else {
        norm
    }
}

/// Orientation of the edge line for a gradient direction `atan2(gy, gx)`:
/// perpendicular to the gradient, folded into [0, π).
#[inline]
pub fn edge_orientation(gradient_angle: f32) -> f32 {
    normalize_half_pi(gradient_angle + FRAC_PI_2)
}

/// Orientation sector of a line at `theta` ∈ [0, π), in image coordinates
/// (y grows downward). Four π/4-wide sectors centred on the glyph angles:
///
/// - `0`: horizontal (θ ≈ 0)
/// - `1`: diagonal running down-right (θ ≈ π/4)
/// - `2`: vertical (θ ≈ π/2)
/// - `3`: diagonal running up-right (θ ≈ 3π/4)
#[inline]
pub fn orientation_sector(theta: f32) -> usize {
    let theta = normalize_half_pi(theta);
    (((theta + FRAC_PI_8) / FRAC_PI_4).floor() as usize) % 4
}
