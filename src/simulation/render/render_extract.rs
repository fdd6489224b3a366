//! Render extraction
//!
//! Two ways for the renderer to read a snapshot after `step()`:
//! - JSON (serde) for simple consumers and debugging
//! - packed f32 buffers handed over by pointer, no per-frame allocation once
//!   the buffers have grown to the population size
//!
//! Debris layout, DEBRIS_STRIDE floats per particle:
//!   [longitude, latitude, spin, size scale, heat (0/1), kind (0 debris / 1 fragment)]
//! Explosion layout, EXPLOSION_STRIDE floats per explosion:
//!   [longitude, latitude, progress (age / max_age), kind (0 kinetic / 1 thermal)]

use crate::domain::ParticleKind;

use super::EngineCore;

pub const DEBRIS_STRIDE: usize = 6;
pub const EXPLOSION_STRIDE: usize = 4;

pub(super) fn debris_json(engine: &EngineCore) -> String {
    serde_json::to_string(engine.population.debris()).unwrap_or_else(|_| "[]".to_string())
}

pub(super) fn explosions_json(engine: &EngineCore) -> String {
    serde_json::to_string(engine.population.explosions()).unwrap_or_else(|_| "[]".to_string())
}

pub(super) fn extract_debris(engine: &mut EngineCore) -> (*const f32, usize) {
    let buffer = &mut engine.render.debris;
    buffer.clear();
    for d in engine.population.debris() {
        buffer.extend_from_slice(&[
            d.longitude as f32,
            d.latitude as f32,
            d.spin as f32,
            d.size.scale(),
            if d.heat { 1.0 } else { 0.0 },
            match d.kind {
                ParticleKind::Debris => 0.0,
                ParticleKind::Fragment => 1.0,
            },
        ]);
    }
    (buffer.as_ptr(), buffer.len())
}

pub(super) fn extract_explosions(engine: &mut EngineCore) -> (*const f32, usize) {
    let buffer = &mut engine.render.explosions;
    buffer.clear();
    for e in engine.population.explosions() {
        buffer.extend_from_slice(&[
            e.longitude as f32,
            e.latitude as f32,
            e.progress(),
            e.kind.render_tag(),
        ]);
    }
    (buffer.as_ptr(), buffer.len())
}
