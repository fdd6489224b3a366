//! Engine - cascading debris collision simulation
//!
//! EngineCore only orchestrates; the work lives elsewhere:
//! - store/   owns debris + explosions and enforces the population cap
//! - systems/ motion, collision detection, cascade + explosion lifecycle
//! - step/    runs the systems in order once per tick
//!
//! Contract: one call in flight at a time. Every mutating method takes
//! `&mut self`; the wasm facade is driven by a single render-loop timer.

use crate::core::rng::EngineRng;
use crate::domain::{DebrisParticle, EngineSettings, Explosion, Target};
use crate::store::Population;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::{DebrisEngine, StepResult};
pub use perf_stats::PerfStats;
pub use render_extract::{DEBRIS_STRIDE, EXPLOSION_STRIDE};
pub use step::StepOutcome;

use perf_timer::PerfTimer;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    Inactive,
    Active,
}

/// Packed f32 views handed to the renderer by pointer
pub(crate) struct RenderBuffers {
    pub(crate) debris: Vec<f32>,
    pub(crate) explosions: Vec<f32>,
}

/// The simulation engine
pub struct EngineCore {
    settings: EngineSettings,
    population: Population,
    state: EngineState,
    rng: EngineRng,
    seed: u64,

    // Counters
    frame: u64,
    collisions_total: u64,

    render: RenderBuffers,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl EngineCore {
    /// Inert engine with a clock-derived random seed. Invalid settings fall
    /// back to the defaults with a warning.
    pub fn new(settings: EngineSettings) -> Self {
        init::create_engine_core(settings, crate::core::rng::entropy_seed())
    }

    /// Inert engine whose every random draw is reproducible from `seed`
    pub fn with_seed(settings: EngineSettings, seed: u64) -> Self {
        init::create_engine_core(settings, seed)
    }

    pub fn from_settings_json(json: &str) -> Result<Self, String> {
        let settings = EngineSettings::from_json(json)?;
        Ok(Self::new(settings))
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == EngineState::Active
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Collisions resolved since this engine was created
    pub fn collisions_total(&self) -> u64 {
        self.collisions_total
    }

    pub fn debris_count(&self) -> usize {
        self.population.len()
    }

    pub fn explosion_count(&self) -> usize {
        self.population.explosions().len()
    }

    pub fn max_debris(&self) -> usize {
        self.population.max_debris()
    }

    /// Seed `seed_count` debris (clamped to the cap), clear explosions, go Active
    pub fn activate(&mut self, seed_count: usize) {
        commands::activate(self, seed_count);
    }

    /// `activate` with the configured seed count
    pub fn activate_default(&mut self) {
        let seed_count = self.settings.seed_count;
        commands::activate(self, seed_count);
    }

    /// Clear everything and go Inactive. Safe to call repeatedly.
    pub fn deactivate(&mut self) {
        commands::deactivate(self);
    }

    /// Advance one tick. No-op returning a default outcome while Inactive.
    pub fn step(&mut self, dt: f64, targets: &[Target]) -> StepOutcome {
        step::step(self, dt, targets)
    }

    pub fn debris_snapshot(&self) -> &[DebrisParticle] {
        self.population.debris()
    }

    pub fn explosion_snapshot(&self) -> &[Explosion] {
        self.population.explosions()
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    pub fn debris_snapshot_json(&self) -> String {
        render_extract::debris_json(self)
    }

    pub fn explosion_snapshot_json(&self) -> String {
        render_extract::explosions_json(self)
    }

    /// Pack debris into the render buffer; returns (ptr, len in f32s)
    pub fn extract_debris(&mut self) -> (*const f32, usize) {
        render_extract::extract_debris(self)
    }

    /// Pack explosions into the render buffer; returns (ptr, len in f32s)
    pub fn extract_explosions(&mut self) -> (*const f32, usize) {
        render_extract::extract_explosions(self)
    }
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::new(EngineSettings::default())
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
