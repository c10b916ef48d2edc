//! Balls Game - two-player ball game simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (integration, collisions, goals, particles)
//! - `settings`: Data-driven tuning loaded from JSON

pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    use glam::Vec3;

    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Field half-extents
    pub const FIELD_X_BOUND: f32 = 2.8;
    pub const FIELD_Y_BOUND: f32 = 1.6;
    /// Every ball lives on this depth plane
    pub const DEPTH_PLANE: f32 = -0.65;
    /// Where the primary ball goes after a goal (z is pinned on the next update)
    pub const RESPAWN_POSITION: Vec3 = Vec3::new(0.0, 0.0, -1.0);

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 0.25;
    pub const BALL_MASS: f32 = 1.0;
    pub const PRIMARY_BALL_RADIUS: f32 = 0.3;
    pub const PRIMARY_BALL_MASS: f32 = 2.0;
    /// Post-collision speed cap
    pub const MAX_SPEED: f32 = 4.0;
    /// Nudge applied to a resting ball's x velocity before collision response
    pub const COLLISION_EPSILON: f32 = 1e-12;

    /// Particle emitter defaults
    pub const EMITTER_PARTICLES: usize = 10;
    pub const PARTICLE_LIFETIME: f32 = 0.5;
    pub const PARTICLE_SPEED: f32 = 0.6;
    pub const EMITTER_COUNTDOWN: f32 = 0.3;

    /// Player shots
    pub const SHOT_SPEED: f32 = 3.0;
    pub const SHOT_COOLDOWN: f32 = 0.5;
    pub const GOALS_TO_WIN: u32 = 5;
}
