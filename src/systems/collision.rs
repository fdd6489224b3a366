//! Collision Detector
//!
//! Stride-sampled conjunction test against a single target:
//! - only indices 0, stride, 2*stride, ... are inspected
//! - hit when squared lat/lon distance (raw degrees) < threshold
//! - scanning stops at the first hit, so at most one collision per tick
//!
//! Raw degree distance ignores longitude compression near the poles. That is
//! an accepted simplification for a visual approximation, not a bug.

use crate::domain::{DebrisParticle, Target};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    /// Index of the struck particle in the debris slice
    pub index: usize,
    pub distance_sq: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Scan {
    pub hit: Option<Hit>,
    /// Particles actually tested (for perf stats)
    pub sampled: u32,
}

/// Zeroth target with finite coordinates; `None` skips detection this tick.
pub fn first_valid_target(targets: &[Target]) -> Option<Target> {
    targets.iter().copied().find(Target::is_valid)
}

#[inline]
pub fn distance_sq(d: &DebrisParticle, target: &Target) -> f64 {
    let dx = d.longitude - target.longitude;
    let dy = d.latitude - target.latitude;
    dx * dx + dy * dy
}

/// A stride of 0 is treated as 1.
pub fn detect(debris: &[DebrisParticle], target: Target, stride: usize, threshold_sq: f64) -> Scan {
    let mut sampled = 0u32;
    for index in (0..debris.len()).step_by(stride.max(1)) {
        sampled += 1;
        let distance_sq = distance_sq(&debris[index], &target);
        if distance_sq < threshold_sq {
            return Scan {
                hit: Some(Hit { index, distance_sq }),
                sampled,
            };
        }
    }
    Scan { hit: None, sampled }
}
