//! Ball and emitter ownership plus the per-tick simulation step
//!
//! `BallManager::update` is the whole simulation tick. Its order is fixed:
//!
//! 1. Reap dead emitters, then age the survivors
//! 2. Integrate every ball, then drop the despawned ones
//! 3. Resolve every overlapping pair `(i, j)`, `i < j`, in ascending order
//! 4. Drop balls despawned by a collision re-integration
//!
//! Pairs are resolved sequentially against live state: a ball hit by two
//! partners in one tick sees both resolutions, in encounter order, with no
//! rollback of the first.

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::ball::{Ball, Field};
use super::collision::{is_colliding, perturb_resting, resolve_velocities};
use super::emitter::ParticleEmitter;
use super::entity::VisualEntity;
use super::state::MatchState;
use crate::Settings;

/// What happened during one `BallManager::update`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// A goal was scored (score display needs refreshing)
    pub scored: bool,
    /// Balls removed this tick
    pub despawned: usize,
    /// Ball-ball collisions resolved this tick
    pub collisions: usize,
}

/// Owns every live ball and particle emitter
#[derive(Debug, Clone)]
pub struct BallManager<E> {
    balls: Vec<Ball<E>>,
    emitters: Vec<ParticleEmitter<E>>,
    /// Cloned once per particle when an emitter spawns
    particle_prototype: E,
    field: Field,
    max_speed: f32,
    collision_epsilon: f32,
    particles_per_emitter: usize,
    particle_lifetime: f32,
    particle_speed: f32,
    emitter_countdown: f32,
    rng: Pcg32,
}

impl<E: VisualEntity + Clone> BallManager<E> {
    pub fn new(settings: &Settings, particle_prototype: E, seed: u64) -> Self {
        Self {
            balls: Vec::new(),
            emitters: Vec::new(),
            particle_prototype,
            field: Field::from_settings(settings),
            max_speed: settings.max_speed,
            collision_epsilon: settings.collision_epsilon,
            particles_per_emitter: settings.particles_per_emitter,
            particle_lifetime: settings.particle_lifetime,
            particle_speed: settings.particle_speed,
            emitter_countdown: settings.emitter_countdown,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Spawn a ball. The manager takes ownership of its visual.
    pub fn add_ball(
        &mut self,
        visual: E,
        position: Vec3,
        velocity: Vec3,
        mass: f32,
        radius: f32,
        is_primary: bool,
    ) {
        self.balls.push(Ball::new(
            visual, position, velocity, mass, radius, is_primary, self.field,
        ));
    }

    /// Push the primary ball (no-op if there is none)
    pub fn apply_force_to_primary(&mut self, force: Vec3) {
        if let Some(ball) = self.balls.iter_mut().find(|b| b.is_primary()) {
            ball.apply_force(force);
        }
    }

    /// Advance the simulation by one tick
    pub fn update(&mut self, dt: f32, match_state: &mut MatchState) -> TickReport {
        let mut report = TickReport::default();

        let before = self.emitters.len();
        self.emitters.retain(|e| e.is_alive());
        if self.emitters.len() < before {
            log::trace!("Reaped {} emitters", before - self.emitters.len());
        }
        for emitter in &mut self.emitters {
            emitter.update(dt);
        }

        for ball in &mut self.balls {
            report.scored |= ball.update(dt, match_state);
        }
        report.despawned += self.sweep_despawned();

        let count = self.balls.len();
        for i in 0..count {
            for j in (i + 1)..count {
                if let Some(midpoint) = self.resolve_pair(i, j, dt, match_state, &mut report) {
                    report.collisions += 1;
                    self.spawn_emitter(midpoint);
                }
            }
        }

        report.despawned += self.sweep_despawned();
        report
    }

    /// Resolve the pair `(i, j)` if it overlaps, returning the midpoint
    fn resolve_pair(
        &mut self,
        i: usize,
        j: usize,
        dt: f32,
        match_state: &mut MatchState,
        report: &mut TickReport,
    ) -> Option<Vec3> {
        debug_assert!(i < j);
        let (head, tail) = self.balls.split_at_mut(j);
        let a = &mut head[i];
        let b = &mut tail[0];

        if !is_colliding(a.position(), a.radius(), b.position(), b.radius()) {
            return None;
        }

        let pos_a = a.position();
        let pos_b = b.position();
        a.un_update(dt);
        b.un_update(dt);

        let vel_a = perturb_resting(a.velocity(), self.collision_epsilon);
        let vel_b = perturb_resting(b.velocity(), self.collision_epsilon);

        // Coincident centers have no normal; velocities then pass through
        let normal = (pos_a - pos_b).normalize_or_zero();
        let response = resolve_velocities(
            normal,
            vel_a,
            a.mass(),
            vel_b,
            b.mass(),
            self.max_speed,
        );
        if response.clamped {
            log::trace!("Collision {}-{} clamped to max speed {}", i, j, self.max_speed);
        }

        a.set_velocity(response.velocity_a);
        b.set_velocity(response.velocity_b);
        report.scored |= a.update(dt, match_state);
        report.scored |= b.update(dt, match_state);

        log::debug!(
            "Collision {}-{}: {:?} / {:?}",
            i,
            j,
            response.velocity_a,
            response.velocity_b
        );

        Some((pos_a + pos_b) * 0.5)
    }

    fn spawn_emitter(&mut self, origin: Vec3) {
        let visuals = (0..self.particles_per_emitter)
            .map(|_| self.particle_prototype.clone())
            .collect();
        self.emitters.push(ParticleEmitter::new(
            self.particle_lifetime,
            visuals,
            origin,
            self.particle_speed,
            self.emitter_countdown,
            &mut self.rng,
        ));
    }

    /// Drop despawned balls, keeping survivors in order
    fn sweep_despawned(&mut self) -> usize {
        let before = self.balls.len();
        self.balls.retain(|b| !b.is_despawned());
        let removed = before - self.balls.len();
        if removed > 0 {
            log::debug!("Despawned {} balls, {} remain", removed, self.balls.len());
        }
        removed
    }
}

impl<E> BallManager<E> {
    pub fn balls(&self) -> &[Ball<E>] {
        &self.balls
    }

    pub fn emitters(&self) -> &[ParticleEmitter<E>] {
        &self.emitters
    }

    pub fn primary_ball(&self) -> Option<&Ball<E>> {
        self.balls.iter().find(|b| b.is_primary())
    }

    /// Visuals of every live ball, for rendering
    pub fn ball_visuals(&self) -> impl Iterator<Item = &E> + '_ {
        self.balls.iter().map(|b| b.visual())
    }

    /// Visuals of every drawing particle across all emitters
    pub fn active_particles(&self) -> impl Iterator<Item = &E> + '_ {
        self.emitters.iter().flat_map(|e| e.active_particles())
    }

    pub fn field(&self) -> Field {
        self.field
    }
}
