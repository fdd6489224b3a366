//! Per-tick systems, run in this order by the step pipeline:
//! motion -> collision -> cascade (+ explosion lifecycle)

pub mod cascade;
pub mod collision;
pub mod motion;
