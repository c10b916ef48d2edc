//! A single physical ball
//!
//! Balls integrate applied forces, bounce off the field walls and report
//! goals (primary ball) or despawns (projectile balls) when they cross the
//! left or right wall.

use glam::Vec3;

use super::entity::VisualEntity;
use super::state::{MatchState, Player};
use crate::Settings;
use crate::consts::*;

/// Field geometry every ball resolves its walls against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    /// Half-width: side walls sit at ±x_bound
    pub x_bound: f32,
    /// Half-height: top/bottom walls sit at ±y_bound
    pub y_bound: f32,
    /// Depth every ball is pinned to
    pub depth_plane: f32,
    /// Primary ball reset point after a goal
    pub respawn: Vec3,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            x_bound: FIELD_X_BOUND,
            y_bound: FIELD_Y_BOUND,
            depth_plane: DEPTH_PLANE,
            respawn: RESPAWN_POSITION,
        }
    }
}

impl Field {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            x_bound: settings.x_bound,
            y_bound: settings.y_bound,
            depth_plane: settings.depth_plane,
            respawn: settings.respawn_position,
        }
    }
}

/// Which side wall a ball crossed this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SideWall {
    Left,
    Right,
}

impl SideWall {
    /// The player credited when the primary ball crosses this wall, and
    /// charged when a projectile ball is lost through it
    fn player(self) -> Player {
        match self {
            SideWall::Right => Player::One,
            SideWall::Left => Player::Two,
        }
    }
}

/// A ball entity
#[derive(Debug, Clone)]
pub struct Ball<E> {
    position: Vec3,
    velocity: Vec3,
    acceleration: Vec3,
    mass: f32,
    radius: f32,
    field: Field,
    /// The soccer ball: crossing a side wall scores instead of despawning
    is_primary: bool,
    despawned: bool,
    visual: E,
}

impl<E: VisualEntity> Ball<E> {
    /// Create a ball. `mass` and `radius` must be positive.
    pub fn new(
        mut visual: E,
        position: Vec3,
        velocity: Vec3,
        mass: f32,
        radius: f32,
        is_primary: bool,
        field: Field,
    ) -> Self {
        let diameter = radius * 2.0;
        visual.set_scale(diameter, diameter, diameter);
        visual.set_translation(position.x, position.y, position.z);

        Self {
            position,
            velocity,
            acceleration: Vec3::ZERO,
            mass,
            radius,
            field,
            is_primary,
            despawned: false,
            visual,
        }
    }

    /// Accumulate a force; it is consumed by the next `update`
    pub fn apply_force(&mut self, force: Vec3) {
        self.acceleration += force;
    }

    /// Integrate one tick and resolve the walls.
    ///
    /// Returns true when the primary ball crossed a side wall (a goal).
    pub fn update(&mut self, dt: f32, match_state: &mut MatchState) -> bool {
        self.velocity += self.acceleration * dt;
        self.position += self.velocity * dt;
        self.acceleration = Vec3::ZERO;

        let mut scored = false;

        let side = if self.position.x + self.radius > self.field.x_bound {
            Some(SideWall::Right)
        } else if self.position.x - self.radius < -self.field.x_bound {
            Some(SideWall::Left)
        } else {
            None
        };

        if let Some(side) = side {
            let player = side.player();
            if self.is_primary {
                self.position = self.field.respawn;
                self.velocity = Vec3::ZERO;
                match_state.record_goal(player);
                scored = true;
            } else if !self.despawned {
                self.despawned = true;
                match_state.record_ball_lost(player);
            }
            // One corrective step so the ball is not left beyond the wall
            self.velocity.x = -self.velocity.x;
            self.position += self.velocity * dt;
        }

        if self.position.y + self.radius > self.field.y_bound
            || self.position.y - self.radius < -self.field.y_bound
        {
            self.velocity.y = -self.velocity.y;
            self.position += self.velocity * dt;
        }

        self.position.z = self.field.depth_plane;
        self.sync_visual();

        scored
    }

    /// Undo the positional half of `update` (velocity must be unchanged)
    pub fn un_update(&mut self, dt: f32) {
        self.position -= self.velocity * dt;
        self.sync_visual();
    }

    fn sync_visual(&mut self) {
        let p = self.position;
        self.visual.set_translation(p.x, p.y, p.z);
    }
}

impl<E> Ball<E> {
    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    pub fn acceleration(&self) -> Vec3 {
        self.acceleration
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn is_primary(&self) -> bool {
        self.is_primary
    }

    pub fn is_despawned(&self) -> bool {
        self.despawned
    }

    pub fn visual(&self) -> &E {
        &self.visual
    }
}
