//! Kessler Engine - cascading orbital-debris collisions in WASM
//!
//! Each collision spawns fragments that can collide again. The engine is a
//! cheap, visually plausible approximation (no orbital propagation): a
//! renderer supplies target positions every tick and polls the debris and
//! explosion snapshots afterwards.
//!
//! Architecture:
//! - core/       - logging macros, random source
//! - domain/     - particles, explosions, targets, settings
//! - store/      - population store (capacity-capped)
//! - systems/    - motion, collision, cascade + explosion lifecycle
//! - simulation/ - orchestration, step pipeline, wasm facade

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod store;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine module
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    engine_log!("🛰️ Kessler WASM Engine initialized!");
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::{
    DebrisParticle, EngineSettings, Explosion, ExplosionKind, ParticleKind, SizeClass, Target,
};
pub use simulation::{DebrisEngine, EngineCore, EngineState, PerfStats, StepOutcome, StepResult};
