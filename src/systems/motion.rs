//! Motion Integrator
//!
//! Cheap precession model, no orbital elements:
//! 1. longitude += velocity * dt
//! 2. latitude   = sin(longitude in radians + phase) * inclination
//! 3. spin      += spin_speed (cosmetic)
//! 4. longitude wraps back into [-180, 180]
//!
//! Each particle depends only on its own state, so the pass runs in parallel
//! when the `parallel` feature is enabled. Results are identical either way.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::domain::DebrisParticle;

/// Advance every particle by one tick scaled by `dt` (nominally 1.0)
pub fn integrate(debris: &mut [DebrisParticle], dt: f64) {
    #[cfg(feature = "parallel")]
    {
        debris.par_iter_mut().for_each(|d| advance(d, dt));
    }
    #[cfg(not(feature = "parallel"))]
    {
        debris.iter_mut().for_each(|d| advance(d, dt));
    }
}

#[inline]
pub fn advance(d: &mut DebrisParticle, dt: f64) {
    d.longitude += d.velocity * dt;
    d.latitude = (d.longitude.to_radians() + d.phase).sin() * d.inclination;
    d.spin += d.spin_speed;
    d.longitude = wrap_longitude(d.longitude);
}

/// One +/-360 correction covers any normal step; large `dt` falls back to a
/// full modulo so the result is always within [-180, 180].
#[inline]
pub fn wrap_longitude(mut lon: f64) -> f64 {
    if lon > 180.0 {
        lon -= 360.0;
    }
    if lon < -180.0 {
        lon += 360.0;
    }
    if !(-180.0..=180.0).contains(&lon) {
        lon = (lon + 180.0).rem_euclid(360.0) - 180.0;
    }
    lon
}
