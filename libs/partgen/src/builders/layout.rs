//! Shared placement helpers for features spaced around a circle.

use std::f64::consts::TAU;

/// A point on a circle in the horizontal plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarSlot {
    /// Angle from +X towards +Z, radians
    pub angle: f64,
    pub x: f64,
    pub z: f64,
}

/// `count` evenly spaced slots on a circle of `radius`, starting at angle 0.
///
/// Slot `i` sits at `2π·i/count`. An empty iterator for `count == 0`.
pub fn polar_slots(count: u32, radius: f64) -> impl Iterator<Item = PolarSlot> {
    (0..count).map(move |i| {
        let angle = TAU * i as f64 / count as f64;
        PolarSlot {
            angle,
            x: angle.cos() * radius,
            z: angle.sin() * radius,
        }
    })
}
