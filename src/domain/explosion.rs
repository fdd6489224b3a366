use rand::Rng;
use serde::Serialize;

use super::target::Target;

pub type ExplosionId = u64;

/// Cosmetic classification picked at creation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExplosionKind {
    Kinetic,
    Thermal,
}

impl ExplosionKind {
    /// Thermal with probability `thermal_probability`, Kinetic otherwise.
    /// A NaN probability always yields Kinetic.
    pub fn roll<R: Rng + ?Sized>(thermal_probability: f64, rng: &mut R) -> Self {
        if rng.gen::<f64>() < thermal_probability {
            ExplosionKind::Thermal
        } else {
            ExplosionKind::Kinetic
        }
    }

    /// Numeric tag used in packed render buffers
    #[inline]
    pub fn render_tag(self) -> f32 {
        match self {
            ExplosionKind::Kinetic => 0.0,
            ExplosionKind::Thermal => 1.0,
        }
    }
}

/// A collision flash, aged one tick per step and retired once `age > max_age`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Explosion {
    pub id: ExplosionId,
    /// Target position at impact
    pub longitude: f64,
    pub latitude: f64,
    pub age: u32,
    pub max_age: u32,
    pub kind: ExplosionKind,
}

impl Explosion {
    pub fn new(id: ExplosionId, at: Target, max_age: u32, kind: ExplosionKind) -> Self {
        Self {
            id,
            longitude: at.longitude,
            latitude: at.latitude,
            age: 0,
            max_age,
            kind,
        }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.age = self.age.saturating_add(1);
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.age > self.max_age
    }

    /// 0.0 at birth, 1.0 on the last visible tick
    pub fn progress(&self) -> f32 {
        if self.max_age == 0 {
            return 1.0;
        }
        (self.age as f32 / self.max_age as f32).min(1.0)
    }
}
