//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Host-supplied timestep only
//! - Seeded RNG only
//! - Stable iteration order (by index, ascending)
//! - No rendering or platform dependencies beyond the `VisualEntity` seam

pub mod ball;
pub mod collision;
pub mod emitter;
pub mod entity;
pub mod manager;
pub mod state;
pub mod tick;
pub mod vector;

pub use ball::Ball;
pub use collision::{CollisionResponse, is_colliding, resolve_velocities};
pub use emitter::{Particle, ParticleEmitter};
pub use entity::{Transform, VisualEntity};
pub use manager::{BallManager, TickReport};
pub use state::{GamePhase, GameState, MatchState, Player};
pub use tick::{TickInput, tick};
pub use vector::Vector3;
