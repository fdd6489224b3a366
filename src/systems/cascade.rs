//! Cascade Spawner & Explosion Lifecycle
//!
//! On a detected hit:
//! 1. struck particle reverses direction and is marked hot for good
//! 2. one explosion is recorded at the target position
//! 3. `fragments_per_collision` fragments spawn from the struck particle,
//!    each subject to the store's cap (overflow is dropped, never queued)
//!
//! Every tick, collision or not, explosions age by one and those past
//! `max_age` are retired.

use rand::Rng;

use crate::domain::{DebrisParticle, EngineSettings, Explosion, ExplosionKind, Target};
use crate::store::Population;

#[derive(Clone, Debug, PartialEq)]
pub struct CascadeReport {
    pub explosion: Explosion,
    pub fragments_spawned: u32,
    pub fragments_dropped: u32,
}

/// Apply one collision. Returns `None` only if `index` is out of range.
pub fn resolve_collision<R: Rng + ?Sized>(
    population: &mut Population,
    index: usize,
    target: Target,
    settings: &EngineSettings,
    rng: &mut R,
) -> Option<CascadeReport> {
    let parent = {
        let struck = population.debris_mut().get_mut(index)?;
        struck.velocity = -struck.velocity;
        struck.heat = true;
        struck.clone()
    };

    let kind = ExplosionKind::roll(settings.thermal_probability, rng);
    let explosion = population
        .push_explosion(|id| Explosion::new(id, target, settings.explosion_max_age, kind))
        .clone();

    let mut fragments_spawned = 0u32;
    let mut fragments_dropped = 0u32;
    for _ in 0..settings.fragments_per_collision {
        let pushed = population
            .try_push_debris(|id| DebrisParticle::fragment_of(&parent, id, settings, &mut *rng));
        match pushed {
            Some(_) => fragments_spawned += 1,
            None => fragments_dropped += 1,
        }
    }

    Some(CascadeReport {
        explosion,
        fragments_spawned,
        fragments_dropped,
    })
}

/// Age every explosion by one tick and drop the expired ones.
/// Returns how many were retired.
pub fn age_explosions(population: &mut Population) -> usize {
    population.update_explosions(Explosion::advance, |e| !e.is_expired())
}
