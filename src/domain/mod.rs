//! Domain model: what the engine simulates and how it is tuned

pub mod explosion;
pub mod particle;
pub mod settings;
pub mod target;

pub use explosion::{Explosion, ExplosionId, ExplosionKind};
pub use particle::{DebrisParticle, ParticleId, ParticleKind, SizeClass};
pub use settings::{EngineSettings, VelocityBand, MAX_DEBRIS_LIMIT, MAX_FRAGMENTS_PER_COLLISION};
pub use target::Target;
