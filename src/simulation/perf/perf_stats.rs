use wasm_bindgen::prelude::*;

/// Per-step metrics, filled only while perf metrics are enabled
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) motion_ms: f64,
    pub(super) collision_ms: f64,
    pub(super) cascade_ms: f64,
    pub(super) lifecycle_ms: f64,
    pub(super) debris_count: u32,
    pub(super) explosion_count: u32,
    pub(super) sampled_particles: u32,
    pub(super) fragments_spawned: u32,
    pub(super) fragments_dropped: u32,
    pub(super) explosions_retired: u32,
    pub(super) collisions_total: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn motion_ms(&self) -> f64 { self.motion_ms }
    #[wasm_bindgen(getter)]
    pub fn collision_ms(&self) -> f64 { self.collision_ms }
    #[wasm_bindgen(getter)]
    pub fn cascade_ms(&self) -> f64 { self.cascade_ms }
    #[wasm_bindgen(getter)]
    pub fn lifecycle_ms(&self) -> f64 { self.lifecycle_ms }
    #[wasm_bindgen(getter)]
    pub fn debris_count(&self) -> u32 { self.debris_count }
    #[wasm_bindgen(getter)]
    pub fn explosion_count(&self) -> u32 { self.explosion_count }
    #[wasm_bindgen(getter)]
    pub fn sampled_particles(&self) -> u32 { self.sampled_particles }
    #[wasm_bindgen(getter)]
    pub fn fragments_spawned(&self) -> u32 { self.fragments_spawned }
    #[wasm_bindgen(getter)]
    pub fn fragments_dropped(&self) -> u32 { self.fragments_dropped }
    #[wasm_bindgen(getter)]
    pub fn explosions_retired(&self) -> u32 { self.explosions_retired }
    /// Cumulative, saturating
    #[wasm_bindgen(getter)]
    pub fn collisions_total(&self) -> u32 { self.collisions_total }
}
