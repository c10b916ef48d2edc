//! Collision particle bursts
//!
//! An emitter owns a fixed pool of particles and fires them one at a time
//! from its origin, cycling through the pool. Particles are visual only and
//! never interact with balls.

use glam::Vec3;
use rand::Rng;

use super::entity::VisualEntity;
use super::vector::random_direction;

/// A single particle in an emitter's pool
#[derive(Debug, Clone)]
pub struct Particle<E> {
    pub position: Vec3,
    /// Fixed travel velocity, picked at random when the emitter is built
    pub direction: Vec3,
    /// Seconds left before the particle stops drawing
    pub lifetime: f32,
    pub visual: E,
}

impl<E> Particle<E> {
    pub fn is_live(&self) -> bool {
        self.lifetime > 0.0
    }
}

/// A short-lived particle burst
#[derive(Debug, Clone)]
pub struct ParticleEmitter<E> {
    origin: Vec3,
    particles: Vec<Particle<E>>,
    max_lifetime: f32,
    /// Seconds between fired particles
    period: f32,
    timer: f32,
    index: usize,
    /// Countdown until the emitter can be reaped
    remaining_time: f32,
}

impl<E: VisualEntity> ParticleEmitter<E> {
    /// Build an emitter with one particle per visual. The first particle is
    /// fired immediately; the rest follow one per `max_lifetime / count`.
    pub fn new<R: Rng>(
        max_lifetime: f32,
        visuals: Vec<E>,
        origin: Vec3,
        particle_speed: f32,
        countdown: f32,
        rng: &mut R,
    ) -> Self {
        let count = visuals.len();
        let period = if count == 0 {
            f32::INFINITY
        } else {
            max_lifetime / count as f32
        };

        let particles = visuals
            .into_iter()
            .map(|visual| Particle {
                position: origin,
                direction: random_direction(rng) * particle_speed,
                lifetime: 0.0,
                visual,
            })
            .collect();

        let mut emitter = Self {
            origin,
            particles,
            max_lifetime,
            period,
            timer: 0.0,
            index: 0,
            remaining_time: countdown.max(0.0),
        };
        emitter.fire(0);
        emitter
    }

    /// Advance the burst by `dt` seconds. Once the countdown has run out no
    /// new particles fire and the pool drains.
    pub fn update(&mut self, dt: f32) {
        self.timer += dt;
        if self.is_alive() && self.timer > self.period {
            self.timer = 0.0;
            self.index += 1;
            if self.index >= self.particles.len() {
                self.index = 0;
            }
            self.fire(self.index);
        }

        for particle in self.particles.iter_mut().filter(|p| p.is_live()) {
            particle.position += particle.direction * dt;
            particle.lifetime -= dt;
            let p = particle.position;
            particle.visual.set_translation(p.x, p.y, p.z);
        }

        if self.remaining_time > 0.0 {
            self.remaining_time = (self.remaining_time - dt).max(0.0);
        }
    }

    /// Reset the particle at `index` to the origin with a full lifetime
    fn fire(&mut self, index: usize) {
        let origin = self.origin;
        let max_lifetime = self.max_lifetime;
        if let Some(particle) = self.particles.get_mut(index) {
            particle.position = origin;
            particle.lifetime = max_lifetime;
            particle.visual.set_translation(origin.x, origin.y, origin.z);
        }
    }
}

impl<E> ParticleEmitter<E> {
    pub fn is_alive(&self) -> bool {
        self.remaining_time != 0.0
    }

    /// Visuals of every particle currently drawing
    pub fn active_particles(&self) -> impl Iterator<Item = &E> + '_ {
        self.particles
            .iter()
            .filter(|p| p.is_live())
            .map(|p| &p.visual)
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn period(&self) -> f32 {
        self.period
    }

    pub fn remaining_time(&self) -> f32 {
        self.remaining_time
    }

    pub fn particles(&self) -> &[Particle<E>] {
        &self.particles
    }
}
