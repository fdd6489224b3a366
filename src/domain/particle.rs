//! Debris particles
//!
//! Two origins:
//! - `Debris`: seeded by `activate()` at a random position
//! - `Fragment`: spawned by a cascade at the struck particle's position
//!
//! Altitude, spin and size are cosmetic; motion and collision use only
//! longitude/latitude/velocity/inclination/phase.

use std::f64::consts::TAU;

use rand::Rng;
use serde::Serialize;

use super::settings::{EngineSettings, VelocityBand};

pub type ParticleId = u64;

const ALTITUDE_MIN_KM: f64 = 350.0;
const ALTITUDE_SPAN_KM: f64 = 2000.0;
const INCLINATION_LIMIT: f64 = 80.0;
const SEED_LATITUDE_LIMIT: f64 = 80.0;
const SPIN_SPEED_LIMIT: f64 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticleKind {
    Debris,
    Fragment,
}

/// Coarse visual weight
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeClass {
    Small,
    Medium,
    Large,
    Fragment,
}

impl SizeClass {
    /// Relative render scale
    pub fn scale(self) -> f32 {
        match self {
            SizeClass::Small => 0.35,
            SizeClass::Medium => 0.6,
            SizeClass::Large => 1.0,
            SizeClass::Fragment => 0.2,
        }
    }

    /// Large debris gets its own sprite
    #[inline]
    pub fn is_large(self) -> bool {
        matches!(self, SizeClass::Large)
    }

    // ~3% large, then ~12% of the rest medium
    fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen::<f64>() > 0.97 {
            SizeClass::Large
        } else if rng.gen::<f64>() > 0.88 {
            SizeClass::Medium
        } else {
            SizeClass::Small
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebrisParticle {
    pub id: ParticleId,
    /// Degrees, kept within [-180, 180] by the motion pass
    pub longitude: f64,
    pub latitude: f64,
    /// Kilometers, cosmetic
    pub altitude: f64,
    /// Signed degrees per tick; flips on collision
    pub velocity: f64,
    /// Latitude oscillation amplitude
    pub inclination: f64,
    /// Radians
    pub phase: f64,
    pub spin: f64,
    pub spin_speed: f64,
    pub size: SizeClass,
    /// Sticky once the particle has been part of a collision
    pub heat: bool,
    pub kind: ParticleKind,
}

impl DebrisParticle {
    /// Fresh non-fragment particle at a random position
    pub fn seeded<R: Rng + ?Sized>(id: ParticleId, settings: &EngineSettings, rng: &mut R) -> Self {
        Self {
            id,
            longitude: rng.gen_range(-180.0..180.0),
            latitude: rng.gen_range(-SEED_LATITUDE_LIMIT..SEED_LATITUDE_LIMIT),
            altitude: ALTITUDE_MIN_KM + rng.gen::<f64>() * ALTITUDE_SPAN_KM,
            velocity: sample_band(&settings.debris_velocity, rng),
            inclination: rng.gen_range(-INCLINATION_LIMIT..INCLINATION_LIMIT),
            phase: rng.gen::<f64>() * TAU,
            spin: rng.gen::<f64>() * 360.0,
            spin_speed: rng.gen_range(-SPIN_SPEED_LIMIT..SPIN_SPEED_LIMIT),
            size: SizeClass::roll(rng),
            heat: rng.gen::<f64>() < settings.initial_heat_probability,
            kind: ParticleKind::Debris,
        }
    }

    /// Cascade product: parent's position and altitude, faster velocity band,
    /// inclination jittered around the parent's, fresh phase.
    pub fn fragment_of<R: Rng + ?Sized>(
        parent: &DebrisParticle,
        id: ParticleId,
        settings: &EngineSettings,
        rng: &mut R,
    ) -> Self {
        let jitter = settings.fragment_inclination_jitter;
        let inclination_offset = if jitter > 0.0 {
            rng.gen_range(-jitter..jitter)
        } else {
            0.0
        };

        Self {
            id,
            longitude: parent.longitude,
            latitude: parent.latitude,
            altitude: parent.altitude,
            velocity: sample_band(&settings.fragment_velocity, rng),
            inclination: parent.inclination + inclination_offset,
            phase: rng.gen::<f64>() * TAU,
            spin: rng.gen::<f64>() * 360.0,
            spin_speed: rng.gen_range(-SPIN_SPEED_LIMIT..SPIN_SPEED_LIMIT),
            size: SizeClass::Fragment,
            heat: rng.gen::<f64>() < settings.initial_heat_probability,
            kind: ParticleKind::Fragment,
        }
    }

    #[inline]
    pub fn is_fragment(&self) -> bool {
        self.kind == ParticleKind::Fragment
    }
}

#[inline]
fn sample_band<R: Rng + ?Sized>(band: &VelocityBand, rng: &mut R) -> f64 {
    band.base + rng.gen::<f64>() * band.spread
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng;

    #[test]
    fn seeded_particles_stay_in_their_bands() {
        let settings = EngineSettings::default();
        let mut rng = rng::seeded(1);
        for id in 0..500 {
            let p = DebrisParticle::seeded(id, &settings, &mut rng);
            assert_eq!(p.kind, ParticleKind::Debris);
            assert_ne!(p.size, SizeClass::Fragment);
            assert!((-180.0..180.0).contains(&p.longitude));
            assert!((350.0..2350.0).contains(&p.altitude));
            assert!(p.velocity >= 0.08 && p.velocity < 0.30 + 1e-12);
            assert!(p.inclination.abs() <= 80.0);
            assert!((0.0..TAU).contains(&p.phase));
        }
    }

    #[test]
    fn fragment_inherits_parent_position() {
        let settings = EngineSettings::default();
        let mut rng = rng::seeded(2);
        let mut parent = DebrisParticle::seeded(0, &settings, &mut rng);
        parent.longitude = 12.5;
        parent.latitude = -3.25;
        parent.inclination = 40.0;

        for id in 1..50 {
            let f = DebrisParticle::fragment_of(&parent, id, &settings, &mut rng);
            assert!(f.is_fragment());
            assert_eq!(f.size, SizeClass::Fragment);
            assert_eq!((f.longitude, f.latitude), (12.5, -3.25));
            assert_eq!(f.altitude, parent.altitude);
            assert!(f.velocity >= 0.2 && f.velocity < 0.6 + 1e-12);
            assert!((f.inclination - 40.0).abs() <= 20.0);
        }
    }

    #[test]
    fn zero_jitter_copies_inclination() {
        let settings = EngineSettings {
            fragment_inclination_jitter: 0.0,
            ..EngineSettings::default()
        };
        let mut rng = rng::seeded(3);
        let parent = DebrisParticle::seeded(0, &settings, &mut rng);
        let f = DebrisParticle::fragment_of(&parent, 1, &settings, &mut rng);
        assert_eq!(f.inclination, parent.inclination);
    }

    #[test]
    fn size_scales() {
        assert!(SizeClass::Large.is_large());
        assert!(!SizeClass::Medium.is_large());
        assert_eq!(SizeClass::Fragment.scale(), 0.2);
    }
}
