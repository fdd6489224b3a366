use crate::domain::{Explosion, Target};
use crate::systems::{cascade, collision, motion};

use super::{EngineCore, EngineState, PerfTimer};

/// What one tick produced. The caller decides on any user-facing effect
/// (flash, alert, sound); the engine has none beyond its own state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepOutcome {
    pub collision_occurred: bool,
    /// The explosion appended this tick, as created (age 0)
    pub new_explosion: Option<Explosion>,
    pub fragments_spawned: u32,
    /// Fragments refused by the population cap
    pub fragments_dropped: u32,
}

pub(super) fn step(engine: &mut EngineCore, dt: f64, targets: &[Target]) -> StepOutcome {
    if engine.state == EngineState::Inactive {
        return StepOutcome::default();
    }

    let perf_on = engine.perf_enabled;
    if perf_on {
        engine.perf_stats.reset();
    }
    let step_start = PerfTimer::start_if(perf_on);

    // === MOTION ===
    let t0 = PerfTimer::start_if(perf_on);
    motion::integrate(engine.population.debris_mut(), dt);
    if let Some(t0) = t0 {
        engine.perf_stats.motion_ms = t0.elapsed_ms();
    }

    // === COLLISION ===
    // Only the first valid target is checked; no target means no detection.
    let t0 = PerfTimer::start_if(perf_on);
    let hit = collision::first_valid_target(targets).and_then(|target| {
        let scan = collision::detect(
            engine.population.debris(),
            target,
            engine.settings.sample_stride,
            engine.settings.collision_threshold_sq,
        );
        if perf_on {
            engine.perf_stats.sampled_particles = scan.sampled;
        }
        scan.hit.map(|hit| (hit, target))
    });
    if let Some(t0) = t0 {
        engine.perf_stats.collision_ms = t0.elapsed_ms();
    }

    // === CASCADE ===
    let mut outcome = StepOutcome::default();
    if let Some((hit, target)) = hit {
        let t0 = PerfTimer::start_if(perf_on);
        let report = cascade::resolve_collision(
            &mut engine.population,
            hit.index,
            target,
            &engine.settings,
            &mut engine.rng,
        );
        if let Some(report) = report {
            engine.collisions_total += 1;
            engine_log!(
                "cascade #{}: {:?} explosion {} at ({:.2}, {:.2}), fragments +{} (dropped {})",
                engine.collisions_total,
                report.explosion.kind,
                report.explosion.id,
                report.explosion.longitude,
                report.explosion.latitude,
                report.fragments_spawned,
                report.fragments_dropped,
            );
            outcome = StepOutcome {
                collision_occurred: true,
                new_explosion: Some(report.explosion),
                fragments_spawned: report.fragments_spawned,
                fragments_dropped: report.fragments_dropped,
            };
        }
        if let Some(t0) = t0 {
            engine.perf_stats.cascade_ms = t0.elapsed_ms();
        }
    }

    // === EXPLOSION LIFECYCLE ===
    // Runs every tick, including the one that created an explosion.
    let t0 = PerfTimer::start_if(perf_on);
    let retired = cascade::age_explosions(&mut engine.population);
    if let Some(t0) = t0 {
        engine.perf_stats.lifecycle_ms = t0.elapsed_ms();
    }

    if perf_on {
        let stats = &mut engine.perf_stats;
        stats.debris_count = engine.population.len() as u32;
        stats.explosion_count = engine.population.explosions().len() as u32;
        stats.fragments_spawned = outcome.fragments_spawned;
        stats.fragments_dropped = outcome.fragments_dropped;
        stats.explosions_retired = retired as u32;
        stats.collisions_total = engine.collisions_total.min(u32::MAX as u64) as u32;
        if let Some(start) = step_start {
            stats.step_ms = start.elapsed_ms();
        }
    }

    engine.frame += 1;
    outcome
}
