use wasm_bindgen::prelude::*;

use crate::domain::{EngineSettings, Explosion, Target};

use super::perf_stats::PerfStats;
use super::render_extract::{DEBRIS_STRIDE, EXPLOSION_STRIDE};
use super::{EngineCore, StepOutcome};

/// One tick's result as seen from JS
#[wasm_bindgen]
pub struct StepResult {
    collision_occurred: bool,
    fragments_spawned: u32,
    fragments_dropped: u32,
    new_explosion: Option<Explosion>,
}

impl From<StepOutcome> for StepResult {
    fn from(outcome: StepOutcome) -> Self {
        Self {
            collision_occurred: outcome.collision_occurred,
            fragments_spawned: outcome.fragments_spawned,
            fragments_dropped: outcome.fragments_dropped,
            new_explosion: outcome.new_explosion,
        }
    }
}

#[wasm_bindgen]
impl StepResult {
    #[wasm_bindgen(getter, js_name = collisionOccurred)]
    pub fn collision_occurred(&self) -> bool { self.collision_occurred }
    #[wasm_bindgen(getter)]
    pub fn fragments_spawned(&self) -> u32 { self.fragments_spawned }
    #[wasm_bindgen(getter)]
    pub fn fragments_dropped(&self) -> u32 { self.fragments_dropped }

    /// JSON of the explosion created this tick, `undefined` when none
    pub fn new_explosion_json(&self) -> Option<String> {
        self.new_explosion
            .as_ref()
            .and_then(|e| serde_json::to_string(e).ok())
    }
}

#[wasm_bindgen]
pub struct DebrisEngine {
    core: EngineCore,
}

#[wasm_bindgen]
impl DebrisEngine {
    /// Inert engine with default settings and an unseeded random source
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: EngineCore::new(EngineSettings::default()),
        }
    }

    /// Reproducible engine: identical calls give identical snapshots
    #[wasm_bindgen(js_name = newSeeded)]
    pub fn new_seeded(seed: u64) -> Self {
        Self {
            core: EngineCore::with_seed(EngineSettings::default(), seed),
        }
    }

    #[wasm_bindgen(js_name = newWithSettingsJson)]
    pub fn new_with_settings_json(json: String) -> Result<DebrisEngine, JsValue> {
        let core = EngineCore::from_settings_json(&json).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { core })
    }

    pub fn settings_json(&self) -> String {
        self.core.settings().to_json()
    }

    #[wasm_bindgen(getter)]
    pub fn is_active(&self) -> bool { self.core.is_active() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn debris_count(&self) -> usize { self.core.debris_count() }

    #[wasm_bindgen(getter)]
    pub fn explosion_count(&self) -> usize { self.core.explosion_count() }

    #[wasm_bindgen(getter)]
    pub fn max_debris(&self) -> usize { self.core.max_debris() }

    /// Seed the field and start simulating
    pub fn activate(&mut self, seed_count: u32) {
        self.core.activate(seed_count as usize);
    }

    /// Seed with the configured default count (900)
    pub fn activate_default(&mut self) {
        self.core.activate_default();
    }

    /// Clear the field; later `step()` calls are no-ops until re-activated
    pub fn deactivate(&mut self) {
        self.core.deactivate();
    }

    /// Advance one tick.
    /// `targets` is interleaved `[lon0, lat0, lon1, lat1, ...]`; only the
    /// first finite pair is checked for collisions.
    pub fn step(&mut self, dt: f64, targets: &[f64]) -> StepResult {
        let targets = Target::from_interleaved(targets);
        self.core.step(dt, &targets).into()
    }

    pub fn debris_snapshot_json(&self) -> String {
        self.core.debris_snapshot_json()
    }

    pub fn explosion_snapshot_json(&self) -> String {
        self.core.explosion_snapshot_json()
    }

    // === ZERO-COPY RENDER API ===

    /// Pack debris into the transfer buffer and return its pointer.
    /// Valid until the next call into the engine.
    pub fn extract_debris(&mut self) -> *const f32 {
        self.core.extract_debris().0
    }

    /// Length (in f32s) of the last `extract_debris` buffer
    pub fn debris_buffer_len(&self) -> usize {
        self.core.render.debris.len()
    }

    pub fn extract_explosions(&mut self) -> *const f32 {
        self.core.extract_explosions().0
    }

    pub fn explosion_buffer_len(&self) -> usize {
        self.core.render.explosions.len()
    }

    #[wasm_bindgen(getter)]
    pub fn debris_stride(&self) -> usize { DEBRIS_STRIDE }

    #[wasm_bindgen(getter)]
    pub fn explosion_stride(&self) -> usize { EXPLOSION_STRIDE }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }
}

impl Default for DebrisEngine {
    fn default() -> Self {
        Self::new()
    }
}
