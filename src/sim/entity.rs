//! Render-entity seam
//!
//! The simulation never talks to the renderer directly. Balls and particles
//! carry a handle implementing `VisualEntity` and push their transform into
//! it whenever the simulated position changes.

use glam::Vec3;

/// An on-screen object the simulation keeps in sync
pub trait VisualEntity {
    fn set_translation(&mut self, x: f32, y: f32, z: f32);
    fn set_scale(&mut self, x: f32, y: f32, z: f32);
}

/// Plain transform record, used headless and by the renderer-facing layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl VisualEntity for Transform {
    fn set_translation(&mut self, x: f32, y: f32, z: f32) {
        self.translation = Vec3::new(x, y, z);
    }

    fn set_scale(&mut self, x: f32, y: f32, z: f32) {
        self.scale = Vec3::new(x, y, z);
    }
}
