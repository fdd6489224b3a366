use crate::core::rng;
use crate::domain::EngineSettings;
use crate::store::Population;

use super::perf_stats::PerfStats;
use super::{EngineCore, EngineState, RenderBuffers};

/// Settings that fail validation are replaced by the defaults, so an engine
/// never runs on values that could panic mid-tick.
pub(super) fn create_engine_core(settings: EngineSettings, seed: u64) -> EngineCore {
    let settings = match settings.validate() {
        Ok(()) => settings,
        Err(e) => {
            engine_warn!("invalid engine settings ({}), using defaults", e);
            EngineSettings::default()
        }
    };
    let max_debris = settings.max_debris;
    EngineCore {
        population: Population::new(max_debris),
        settings,
        state: EngineState::Inactive,
        rng: rng::seeded(seed),
        seed,
        frame: 0,
        collisions_total: 0,

        render: RenderBuffers {
            // Grown on demand by the extract functions.
            debris: Vec::new(),
            explosions: Vec::new(),
        },
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
