use crate::domain::DebrisParticle;

use super::{EngineCore, EngineState};

pub(super) fn activate(engine: &mut EngineCore, seed_count: usize) {
    let cap = engine.population.max_debris();
    if seed_count > cap {
        engine_warn!("activate: seed count {} exceeds maxDebris {}, clamping", seed_count, cap);
    }

    let settings = &engine.settings;
    let rng = &mut engine.rng;
    let seeded = engine
        .population
        .reseed(seed_count, |id| DebrisParticle::seeded(id, settings, &mut *rng));

    engine.state = EngineState::Active;
    engine_log!("debris field active: {} particles seeded (cap {})", seeded, cap);
}

pub(super) fn deactivate(engine: &mut EngineCore) {
    let was_active = engine.state == EngineState::Active;
    engine.population.clear();
    engine.state = EngineState::Inactive;
    if was_active {
        engine_log!("debris field cleared after {} frames", engine.frame);
    }
}
