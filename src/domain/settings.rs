//! Engine settings
//!
//! Every tunable constant of the cascade lives here. Settings load from a JSON
//! document (camelCase keys, every field optional) the same way content
//! bundles do, and are validated before an engine is built from them.

use serde::{Deserialize, Serialize};

/// Upper bound accepted for `maxDebris`
pub const MAX_DEBRIS_LIMIT: usize = 1_000_000;
/// Upper bound accepted for `fragmentsPerCollision`
pub const MAX_FRAGMENTS_PER_COLLISION: usize = 64;

/// Angular speed band: `base + U[0, 1) * spread` degrees per tick
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VelocityBand {
    pub base: f64,
    pub spread: f64,
}

impl VelocityBand {
    pub const fn new(base: f64, spread: f64) -> Self {
        Self { base, spread }
    }

    /// Largest speed this band can produce
    pub fn max(&self) -> f64 {
        self.base + self.spread
    }

    fn is_valid(&self) -> bool {
        self.base.is_finite() && self.spread.is_finite() && self.base >= 0.0 && self.spread >= 0.0
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineSettings {
    /// Hard population cap; fragments past it are dropped
    pub max_debris: usize,
    /// Population seeded by `activate_default()`
    pub seed_count: usize,
    /// Squared degree-space distance below which a sample hits the target
    pub collision_threshold_sq: f64,
    /// Only every Nth particle (by index) is tested against the target
    pub sample_stride: usize,
    pub fragments_per_collision: usize,
    /// Explosion lifetime in ticks
    pub explosion_max_age: u32,
    /// Chance that an explosion is classified Thermal rather than Kinetic
    pub thermal_probability: f64,
    /// Chance that a freshly created particle starts with the heat flag
    pub initial_heat_probability: f64,
    pub debris_velocity: VelocityBand,
    pub fragment_velocity: VelocityBand,
    /// Fragments take the parent's inclination +/- this many degrees
    pub fragment_inclination_jitter: f64,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            max_debris: 1400,
            seed_count: 900,
            collision_threshold_sq: 5.0,
            sample_stride: 3,
            fragments_per_collision: 3,
            explosion_max_age: 45,
            thermal_probability: 0.6,
            initial_heat_probability: 0.015,
            debris_velocity: VelocityBand::new(0.08, 0.22),
            fragment_velocity: VelocityBand::new(0.2, 0.4),
            fragment_inclination_jitter: 20.0,
        }
    }
}

impl EngineSettings {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let settings: EngineSettings = serde_json::from_str(json).map_err(|e| e.to_string())?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.max_debris > MAX_DEBRIS_LIMIT {
            return Err(format!(
                "maxDebris must be at most {MAX_DEBRIS_LIMIT}, got {}",
                self.max_debris
            ));
        }
        if self.fragments_per_collision > MAX_FRAGMENTS_PER_COLLISION {
            return Err(format!(
                "fragmentsPerCollision must be at most {MAX_FRAGMENTS_PER_COLLISION}, got {}",
                self.fragments_per_collision
            ));
        }
        if self.sample_stride == 0 {
            return Err("sampleStride must be at least 1".to_string());
        }
        if !self.collision_threshold_sq.is_finite() || self.collision_threshold_sq <= 0.0 {
            return Err(format!(
                "collisionThresholdSq must be a positive number, got {}",
                self.collision_threshold_sq
            ));
        }
        for (name, p) in [
            ("thermalProbability", self.thermal_probability),
            ("initialHeatProbability", self.initial_heat_probability),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(format!("{name} must be within [0, 1], got {p}"));
            }
        }
        if !self.debris_velocity.is_valid() {
            return Err("debrisVelocity base/spread must be finite and non-negative".to_string());
        }
        if !self.fragment_velocity.is_valid() {
            return Err("fragmentVelocity base/spread must be finite and non-negative".to_string());
        }
        if !self.fragment_inclination_jitter.is_finite() || self.fragment_inclination_jitter < 0.0 {
            return Err("fragmentInclinationJitter must be finite and non-negative".to_string());
        }
        Ok(())
    }
}
