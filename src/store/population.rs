//! Population Store
//!
//! Canonical owner of the live debris and explosion collections.
//! - `len(debris) <= max_debris` always holds: insertion past the cap is
//!   refused silently (no error, no growth, nothing queued)
//! - ids come from monotonic `u64` counters and are never reused by this store
//! - storage grows with the live population, not with the cap

use crate::domain::{DebrisParticle, Explosion, ExplosionId, ParticleId};

pub struct Population {
    debris: Vec<DebrisParticle>,
    explosions: Vec<Explosion>,
    max_debris: usize,
    next_particle_id: ParticleId,
    next_explosion_id: ExplosionId,
}

impl Population {
    pub fn new(max_debris: usize) -> Self {
        Self {
            debris: Vec::new(),
            explosions: Vec::new(),
            max_debris,
            next_particle_id: 0,
            next_explosion_id: 0,
        }
    }

    #[inline]
    pub fn max_debris(&self) -> usize {
        self.max_debris
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.debris.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.debris.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.debris.len() >= self.max_debris
    }

    pub fn remaining_capacity(&self) -> usize {
        self.max_debris.saturating_sub(self.debris.len())
    }

    #[inline]
    pub fn debris(&self) -> &[DebrisParticle] {
        &self.debris
    }

    /// Field-level mutation only; length changes go through the store.
    #[inline]
    pub fn debris_mut(&mut self) -> &mut [DebrisParticle] {
        &mut self.debris
    }

    #[inline]
    pub fn explosions(&self) -> &[Explosion] {
        &self.explosions
    }

    /// Replace the whole population with `min(count, max_debris)` particles
    /// built by `make`, and drop every explosion. Returns how many were seeded.
    pub fn reseed<F>(&mut self, count: usize, mut make: F) -> usize
    where
        F: FnMut(ParticleId) -> DebrisParticle,
    {
        self.clear();
        let count = count.min(self.max_debris);
        for _ in 0..count {
            let id = self.allocate_particle_id();
            self.debris.push(make(id));
        }
        count
    }

    /// Insert one particle unless the cap is reached. The id is only allocated
    /// (and `make` only called) when there is room.
    pub fn try_push_debris<F>(&mut self, make: F) -> Option<ParticleId>
    where
        F: FnOnce(ParticleId) -> DebrisParticle,
    {
        if self.is_full() {
            return None;
        }
        let id = self.allocate_particle_id();
        self.debris.push(make(id));
        Some(id)
    }

    pub fn push_explosion<F>(&mut self, make: F) -> &Explosion
    where
        F: FnOnce(ExplosionId) -> Explosion,
    {
        let id = self.next_explosion_id;
        self.next_explosion_id += 1;
        self.explosions.push(make(id));
        &self.explosions[self.explosions.len() - 1]
    }

    /// Mutate every explosion, then keep only those `keep` accepts (order
    /// preserved). Returns how many were removed.
    pub fn update_explosions<U, K>(&mut self, mut update: U, mut keep: K) -> usize
    where
        U: FnMut(&mut Explosion),
        K: FnMut(&Explosion) -> bool,
    {
        let before = self.explosions.len();
        self.explosions.iter_mut().for_each(&mut update);
        self.explosions.retain(|e| keep(e));
        before - self.explosions.len()
    }

    /// Empty both collections. Id counters keep running.
    pub fn clear(&mut self) {
        self.debris.clear();
        self.explosions.clear();
    }

    fn allocate_particle_id(&mut self) -> ParticleId {
        let id = self.next_particle_id;
        self.next_particle_id += 1;
        id
    }
}
