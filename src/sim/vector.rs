//! 3D vector math used by the simulation
//!
//! `Vector3` is glam's `Vec3`: a plain `{x, y, z}` value type with the
//! arithmetic operators, `length`, `length_squared` and `dot`. The helpers
//! below cover the few operations the simulation repeats.

use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

pub type Vector3 = Vec3;

/// Scale `v` down uniformly so its magnitude does not exceed `max_speed`.
/// Vectors already under the cap are returned untouched.
#[inline]
pub fn clamp_speed(v: Vec3, max_speed: f32) -> Vec3 {
    let len_sq = v.length_squared();
    if len_sq > max_speed * max_speed {
        v * (max_speed / len_sq.sqrt())
    } else {
        v
    }
}

/// Drop the depth component (gameplay is planar)
#[inline]
pub fn flatten(v: Vec3) -> Vec3 {
    Vec3::new(v.x, v.y, 0.0)
}

/// Split `v` into its projection on the unit `normal` and the remainder
#[inline]
pub fn decompose(v: Vec3, normal: Vec3) -> (Vec3, Vec3) {
    let along = normal * v.dot(normal);
    (along, v - along)
}

/// Uniformly distributed unit vector on the sphere
pub fn random_direction<R: Rng>(rng: &mut R) -> Vec3 {
    let z: f32 = rng.random_range(-1.0..=1.0);
    let theta: f32 = rng.random_range(0.0..TAU);
    let r = (1.0 - z * z).max(0.0).sqrt();
    Vec3::new(r * theta.cos(), r * theta.sin(), z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_clamp_speed_scales_down() {
        let v = Vec3::new(3.0, 4.0, 0.0);
        let clamped = clamp_speed(v, 2.5);
        assert!((clamped.length() - 2.5).abs() < 1e-5);
        // Direction preserved
        assert!((clamped.normalize() - v.normalize()).length() < 1e-5);
    }

    #[test]
    fn test_clamp_speed_under_cap_untouched() {
        let v = Vec3::new(1.0, -1.0, 0.0);
        assert_eq!(clamp_speed(v, 4.0), v);
    }

    #[test]
    fn test_decompose_recombines() {
        let normal = Vec3::new(1.0, 1.0, 0.0).normalize();
        let v = Vec3::new(2.0, -0.5, 0.0);
        let (along, orth) = decompose(v, normal);
        assert!((along + orth - v).length() < 1e-6);
        assert!(orth.dot(normal).abs() < 1e-6);
    }

    #[test]
    fn test_random_direction_is_unit() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..100 {
            let d = random_direction(&mut rng);
            assert!((d.length() - 1.0).abs() < 1e-4);
        }
    }
}
