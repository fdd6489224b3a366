//! Engine invariants exercised through the public API over many ticks.

use kessler_engine::{EngineCore, EngineSettings, EngineState, ParticleKind, Target};

const TICKS: usize = 600;

/// A target sweeping across the field so the stride sample keeps finding
/// collisions without any particle placement.
fn sweeping_target(tick: usize) -> Target {
    let lon = ((tick as f64 * 1.7) % 360.0) - 180.0;
    let lat = ((tick as f64 * 0.37).sin()) * 40.0;
    Target::new(lon, lat)
}

/// Settings where every sampled particle is "in range", so each tick with a
/// target is a guaranteed collision.
fn always_hit() -> EngineSettings {
    EngineSettings {
        collision_threshold_sq: 1.0e9,
        ..EngineSettings::default()
    }
}

#[test]
fn seed_scenario_matches_defaults() {
    let mut engine = EngineCore::with_seed(EngineSettings::default(), 1);
    assert_eq!(engine.state(), EngineState::Inactive);

    engine.activate(900);
    assert_eq!(engine.state(), EngineState::Active);
    assert_eq!(engine.debris_snapshot().len(), 900);
    assert!(engine.debris_snapshot().iter().all(|d| d.kind == ParticleKind::Debris));
    assert!(engine.explosion_snapshot().is_empty());
}

#[test]
fn activate_default_uses_configured_seed_count() {
    let settings = EngineSettings {
        seed_count: 42,
        ..EngineSettings::default()
    };
    let mut engine = EngineCore::with_seed(settings, 2);
    engine.activate_default();
    assert_eq!(engine.debris_count(), 42);
}

#[test]
fn seeding_above_capacity_is_clamped() {
    let settings = EngineSettings {
        max_debris: 100,
        ..EngineSettings::default()
    };
    let mut engine = EngineCore::with_seed(settings, 3);
    engine.activate(500);
    assert_eq!(engine.debris_count(), 100);
}

#[test]
fn capacity_invariant_holds_every_tick() {
    let settings = EngineSettings {
        max_debris: 950,
        ..always_hit()
    };
    let mut engine = EngineCore::with_seed(settings, 4);
    engine.activate(900);

    let mut saw_drop = false;
    for tick in 0..TICKS {
        let outcome = engine.step(1.0, &[sweeping_target(tick)]);
        assert!(engine.debris_snapshot().len() <= 950, "tick {tick}");
        saw_drop |= outcome.fragments_dropped > 0;
    }
    assert_eq!(engine.debris_count(), 950);
    assert!(saw_drop);
}

#[test]
fn ids_stay_unique_while_cascading() {
    let mut engine = EngineCore::with_seed(always_hit(), 5);
    engine.activate(300);
    for tick in 0..200 {
        engine.step(1.0, &[sweeping_target(tick)]);
    }
    let mut ids: Vec<_> = engine.debris_snapshot().iter().map(|d| d.id).collect();
    let total = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), total);
}

#[test]
fn explosions_age_monotonically_and_never_exceed_max_age() {
    let settings = EngineSettings {
        explosion_max_age: 10,
        ..always_hit()
    };
    let mut engine = EngineCore::with_seed(settings, 6);
    engine.activate(200);

    let mut previous: Vec<(u64, u32)> = Vec::new();
    for tick in 0..120 {
        // Collide on even ticks only so explosions also get quiet ticks.
        let targets = if tick % 2 == 0 { vec![sweeping_target(tick)] } else { Vec::new() };
        engine.step(1.0, &targets);

        for ex in engine.explosion_snapshot() {
            assert!(ex.age <= ex.max_age);
            if let Some(&(_, age)) = previous.iter().find(|(id, _)| *id == ex.id) {
                assert_eq!(ex.age, age + 1);
            }
        }
        previous = engine.explosion_snapshot().iter().map(|e| (e.id, e.age)).collect();
    }
}

#[test]
fn explosion_expiry_scenario() {
    let settings = EngineSettings {
        explosion_max_age: 2,
        ..always_hit()
    };
    let mut engine = EngineCore::with_seed(settings, 7);
    engine.activate(10);

    assert!(engine.step(1.0, &[Target::new(0.0, 0.0)]).collision_occurred);
    assert_eq!(engine.explosion_snapshot().len(), 1);
    engine.step(1.0, &[]);
    assert_eq!(engine.explosion_snapshot().len(), 1);
    engine.step(1.0, &[]);
    assert!(engine.explosion_snapshot().is_empty());
}

#[test]
fn at_most_one_collision_per_tick() {
    let mut engine = EngineCore::with_seed(always_hit(), 8);
    engine.activate(600);
    for tick in 0..100 {
        let before = engine.explosion_count();
        let outcome = engine.step(1.0, &[sweeping_target(tick), sweeping_target(tick + 50)]);
        let after = engine.explosion_count();
        // Nothing expires within the first 45 ticks of default max age.
        if tick < 45 {
            assert_eq!(after - before, usize::from(outcome.collision_occurred));
        }
        assert!(outcome.collision_occurred);
        let newest = engine.explosion_snapshot().last().expect("explosion appended");
        assert_eq!(outcome.new_explosion.as_ref().map(|e| e.id), Some(newest.id));
    }
}

#[test]
fn guaranteed_hit_grows_population_by_three() {
    let mut engine = EngineCore::with_seed(always_hit(), 9);
    engine.activate(10);
    let outcome = engine.step(1.0, &[Target::new(0.0, 0.0)]);
    assert!(outcome.collision_occurred);
    assert_eq!(engine.explosion_count(), 1);
    assert_eq!(engine.debris_count(), 13);

    let first = &engine.debris_snapshot()[0];
    assert!(first.heat);
    for fragment in &engine.debris_snapshot()[10..] {
        assert_eq!(fragment.kind, ParticleKind::Fragment);
        assert_eq!((fragment.longitude, fragment.latitude), (first.longitude, first.latitude));
    }
}

#[test]
fn cap_scenario_keeps_population_at_five() {
    let settings = EngineSettings {
        max_debris: 5,
        ..always_hit()
    };
    let mut engine = EngineCore::with_seed(settings, 10);
    engine.activate(5);
    let outcome = engine.step(1.0, &[Target::new(0.0, 0.0)]);
    assert!(outcome.collision_occurred);
    assert_eq!(outcome.fragments_dropped, 3);
    assert!(engine.debris_count() <= 5);
}

#[test]
fn deactivate_is_idempotent() {
    let mut engine = EngineCore::with_seed(always_hit(), 11);
    engine.activate(50);
    engine.step(1.0, &[Target::new(0.0, 0.0)]);

    engine.deactivate();
    let once = (engine.state(), engine.debris_count(), engine.explosion_count());
    engine.deactivate();
    let twice = (engine.state(), engine.debris_count(), engine.explosion_count());

    assert_eq!(once, (EngineState::Inactive, 0, 0));
    assert_eq!(once, twice);
    assert!(!engine.step(1.0, &[Target::new(0.0, 0.0)]).collision_occurred);
}

#[test]
fn inactive_step_is_noop() {
    let mut engine = EngineCore::default();
    let outcome = engine.step(1.0, &[Target::new(0.0, 0.0)]);
    assert!(!outcome.collision_occurred);
    assert!(engine.debris_snapshot().is_empty());
    assert!(engine.explosion_snapshot().is_empty());
}

#[test]
fn longitudes_stay_wrapped() {
    let mut engine = EngineCore::with_seed(EngineSettings::default(), 12);
    engine.activate(900);
    for _ in 0..TICKS {
        engine.step(3.0, &[]);
    }
    assert!(engine
        .debris_snapshot()
        .iter()
        .all(|d| (-180.0..=180.0).contains(&d.longitude)));
}

#[test]
fn same_seed_reproduces_the_run() {
    let run = |seed: u64| {
        let mut engine = EngineCore::with_seed(EngineSettings::default(), seed);
        engine.activate(900);
        let mut collisions = 0;
        for tick in 0..300 {
            if engine.step(1.0, &[sweeping_target(tick)]).collision_occurred {
                collisions += 1;
            }
        }
        (
            collisions,
            engine.debris_snapshot().to_vec(),
            engine.explosion_snapshot().to_vec(),
        )
    };

    assert_eq!(run(99), run(99));
    assert_ne!(run(99).1, run(100).1);
}

#[test]
fn settings_json_builds_an_engine() {
    let json = r#"{ "maxDebris": 20, "seedCount": 12 }"#;
    let mut engine = EngineCore::from_settings_json(json).expect("valid settings");
    engine.activate_default();
    assert_eq!(engine.debris_count(), 12);
    assert_eq!(engine.max_debris(), 20);

    assert!(EngineCore::from_settings_json(r#"{ "sampleStride": 0 }"#).is_err());
}
