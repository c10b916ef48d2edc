//! Game settings and tuning
//!
//! Loaded from a JSON file; every field has a default so partial files work.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Failure to read or parse a settings file
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Simulation tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Field ===
    /// Half-width of the field (side walls at ±x_bound)
    pub x_bound: f32,
    /// Half-height of the field (top/bottom walls at ±y_bound)
    pub y_bound: f32,
    /// Depth plane every ball is pinned to
    pub depth_plane: f32,
    /// Primary ball reset point after a goal
    pub respawn_position: Vec3,

    // === Balls ===
    pub ball_radius: f32,
    pub ball_mass: f32,
    pub primary_ball_radius: f32,
    pub primary_ball_mass: f32,
    /// Post-collision speed cap
    pub max_speed: f32,
    /// Nudge for resting balls during collision response
    pub collision_epsilon: f32,

    // === Particles ===
    pub particles_per_emitter: usize,
    /// Lifetime of each particle (seconds)
    pub particle_lifetime: f32,
    pub particle_speed: f32,
    /// How long an emitter keeps running after a collision (seconds)
    pub emitter_countdown: f32,

    // === Match ===
    pub shot_speed: f32,
    /// Seconds between shots per player
    pub shot_cooldown: f32,
    /// Goals needed to win (0 = endless)
    pub goals_to_win: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            x_bound: FIELD_X_BOUND,
            y_bound: FIELD_Y_BOUND,
            depth_plane: DEPTH_PLANE,
            respawn_position: RESPAWN_POSITION,

            ball_radius: BALL_RADIUS,
            ball_mass: BALL_MASS,
            primary_ball_radius: PRIMARY_BALL_RADIUS,
            primary_ball_mass: PRIMARY_BALL_MASS,
            max_speed: MAX_SPEED,
            collision_epsilon: COLLISION_EPSILON,

            particles_per_emitter: EMITTER_PARTICLES,
            particle_lifetime: PARTICLE_LIFETIME,
            particle_speed: PARTICLE_SPEED,
            emitter_countdown: EMITTER_COUNTDOWN,

            shot_speed: SHOT_SPEED,
            shot_cooldown: SHOT_COOLDOWN,
            goals_to_win: GOALS_TO_WIN,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings from `path`, falling back to defaults on any failure
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::from_path(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{} ({}), using default settings", e, path.display());
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "max_speed": 2.5, "goals_to_win": 3 }"#)
            .expect("valid settings");
        assert_eq!(settings.max_speed, 2.5);
        assert_eq!(settings.goals_to_win, 3);
        assert_eq!(settings.x_bound, FIELD_X_BOUND);
        assert_eq!(settings.particles_per_emitter, EMITTER_PARTICLES);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings::default();
        let json = settings.to_json().expect("serialize");
        assert_eq!(Settings::from_json(&json).expect("parse"), settings);
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = std::env::temp_dir().join("balls-game-missing-settings.json");
        assert!(matches!(
            Settings::from_path(&path),
            Err(SettingsError::Io(_))
        ));
        assert_eq!(Settings::load_or_default(&path), Settings::default());
    }
}
