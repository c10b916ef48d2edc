//! Match and session state
//!
//! `MatchState` holds the counters the simulation increments but never owns.
//! `GameState` is the session controller: it owns the counters, the ball
//! manager and the current phase, and lends the counters to the manager for
//! the length of a tick.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::entity::Transform;
use super::manager::BallManager;
use crate::Settings;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the start input
    Menu,
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// A player reached the goal target
    MatchOver,
}

/// The two players. Player one defends the left wall, player two the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

/// Scores and lost-ball counts for a match
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub player1_score: u32,
    pub player2_score: u32,
    pub player1_balls_lost: u32,
    pub player2_balls_lost: u32,
}

impl MatchState {
    pub fn record_goal(&mut self, player: Player) {
        match player {
            Player::One => self.player1_score += 1,
            Player::Two => self.player2_score += 1,
        }
    }

    pub fn record_ball_lost(&mut self, player: Player) {
        match player {
            Player::One => self.player1_balls_lost += 1,
            Player::Two => self.player2_balls_lost += 1,
        }
    }

    pub fn score(&self, player: Player) -> u32 {
        match player {
            Player::One => self.player1_score,
            Player::Two => self.player2_score,
        }
    }

    /// First player to reach `goals_to_win` (0 never ends the match)
    pub fn winner(&self, goals_to_win: u32) -> Option<Player> {
        if goals_to_win == 0 {
            return None;
        }
        [Player::One, Player::Two]
            .into_iter()
            .find(|&p| self.score(p) >= goals_to_win)
    }
}

/// A running session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub settings: Settings,
    pub phase: GamePhase,
    pub match_state: MatchState,
    pub manager: BallManager<Transform>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Seconds until each player may shoot again
    pub shot_cooldowns: [f32; 2],
}

impl GameState {
    /// Create a session with the primary ball resting at the respawn point
    pub fn new(settings: Settings, seed: u64) -> Self {
        let manager = BallManager::new(&settings, Transform::default(), seed);
        let mut state = Self {
            seed,
            settings,
            phase: GamePhase::Menu,
            match_state: MatchState::default(),
            manager,
            time_ticks: 0,
            shot_cooldowns: [0.0; 2],
        };
        state.spawn_primary_ball();
        state
    }

    fn spawn_primary_ball(&mut self) {
        let mut position = self.settings.respawn_position;
        position.z = self.settings.depth_plane;
        self.manager.add_ball(
            Transform::default(),
            position,
            Vec3::ZERO,
            self.settings.primary_ball_mass,
            self.settings.primary_ball_radius,
            true,
        );
    }

    /// Fire a projectile ball from `player`'s side of the field.
    ///
    /// Player one shoots from the left edge, player two from the right. The
    /// aim is normalized and scaled to the shot speed; an aim pointing back
    /// toward the shooter's own wall is mirrored forward.
    pub fn spawn_shot(&mut self, player: Player, aim: Vec3) {
        let aim = Vec3::new(aim.x, aim.y, 0.0).normalize_or_zero();
        if aim == Vec3::ZERO {
            return;
        }

        let radius = self.settings.ball_radius;
        // Start just inside the shooter's wall
        let edge = self.settings.x_bound - radius * 2.0;
        let (x, forward) = match player {
            Player::One => (-edge, 1.0),
            Player::Two => (edge, -1.0),
        };
        let direction = Vec3::new(aim.x.abs() * forward, aim.y, 0.0);

        self.manager.add_ball(
            Transform::default(),
            Vec3::new(x, 0.0, self.settings.depth_plane),
            direction * self.settings.shot_speed,
            self.settings.ball_mass,
            radius,
            false,
        );
        log::debug!("{:?} shot {:?}", player, direction);
    }
}
