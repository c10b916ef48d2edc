//! Ball-ball collision detection and response
//!
//! Detection is a plain sphere overlap test. The response works along the
//! collision normal: each velocity is split into a component on the normal
//! and an orthogonal remainder, the normal components exchange magnitude
//! through a 1D elastic formula, and the remainders pass through untouched.
//!
//! The scalar fed to the 1D exchange is `|component| * sin(normal · velocity)`,
//! not the signed projection a textbook solver would use.

use glam::Vec3;

use super::vector::{clamp_speed, decompose, flatten};

/// Check whether two spheres overlap (touching counts)
#[inline]
pub fn is_colliding(pos_a: Vec3, radius_a: f32, pos_b: Vec3, radius_b: f32) -> bool {
    let reach = radius_a + radius_b;
    (pos_a - pos_b).length_squared() <= reach * reach
}

/// Outcome of resolving one colliding pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResponse {
    /// New velocity for the first ball (clamped, z = 0)
    pub velocity_a: Vec3,
    /// New velocity for the second ball (clamped, z = 0)
    pub velocity_b: Vec3,
    /// Scalar magnitudes fed into the exchange
    pub magnitude_a: f32,
    pub magnitude_b: f32,
    /// Shared velocity of the 1D exchange
    pub common_velocity: f32,
    /// Whether either velocity hit the speed cap
    pub clamped: bool,
}

impl CollisionResponse {
    pub fn magnitude_a_post(&self) -> f32 {
        self.common_velocity - self.magnitude_a
    }

    pub fn magnitude_b_post(&self) -> f32 {
        self.common_velocity - self.magnitude_b
    }
}

/// Nudge a resting velocity off zero so the response stays finite
#[inline]
pub fn perturb_resting(velocity: Vec3, epsilon: f32) -> Vec3 {
    if velocity.length_squared() == 0.0 {
        Vec3::new(velocity.x + epsilon, velocity.y, velocity.z)
    } else {
        velocity
    }
}

/// Compute post-collision velocities for a pair.
///
/// `normal` must be the unit vector from ball b toward ball a. Velocities
/// should already have been passed through `perturb_resting`.
pub fn resolve_velocities(
    normal: Vec3,
    velocity_a: Vec3,
    mass_a: f32,
    velocity_b: Vec3,
    mass_b: f32,
    max_speed: f32,
) -> CollisionResponse {
    let (along_a, orth_a) = decompose(velocity_a, normal);
    let (along_b, orth_b) = decompose(velocity_b, normal);

    let magnitude_a = along_a.length() * normal.dot(velocity_a).sin();
    let magnitude_b = along_b.length() * normal.dot(velocity_b).sin();

    let common_velocity =
        2.0 * (mass_a * magnitude_a + mass_b * magnitude_b) / (mass_a + mass_b);

    let along_a = rescale(along_a, magnitude_a, common_velocity - magnitude_a);
    let along_b = rescale(along_b, magnitude_b, common_velocity - magnitude_b);

    let raw_a = along_a + orth_a;
    let raw_b = along_b + orth_b;
    let new_a = clamp_speed(raw_a, max_speed);
    let new_b = clamp_speed(raw_b, max_speed);

    CollisionResponse {
        velocity_a: flatten(new_a),
        velocity_b: flatten(new_b),
        magnitude_a,
        magnitude_b,
        common_velocity,
        clamped: new_a != raw_a || new_b != raw_b,
    }
}

/// Rescale a normal component by `post / pre`; a zero `pre` has no defined
/// ratio and leaves the component unchanged.
#[inline]
fn rescale(component: Vec3, pre: f32, post: f32) -> Vec3 {
    if pre == 0.0 {
        component
    } else {
        component * (post / pre)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_is_colliding_overlap_and_touch() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        assert!(is_colliding(a, 0.25, Vec3::new(0.4, 0.0, 0.0), 0.25));
        // Exactly touching
        assert!(is_colliding(a, 0.25, Vec3::new(0.5, 0.0, 0.0), 0.25));
        assert!(!is_colliding(a, 0.25, Vec3::new(0.75, 0.0, 0.0), 0.25));
    }

    #[test]
    fn test_equal_mass_head_on_swaps_directions() {
        // a on the left moving right, b on the right moving left
        let pos_a = Vec3::new(-0.2, 0.0, 0.0);
        let pos_b = Vec3::new(0.2, 0.0, 0.0);
        let normal = (pos_a - pos_b).normalize();

        let r = resolve_velocities(
            normal,
            Vec3::new(1.0, 0.0, 0.0),
            1.0,
            Vec3::new(-1.0, 0.0, 0.0),
            1.0,
            4.0,
        );

        assert!(r.velocity_a.x < 0.0);
        assert!(r.velocity_b.x > 0.0);
        assert!((r.velocity_a.x + 1.0).abs() < 1e-5);
        assert!((r.velocity_b.x - 1.0).abs() < 1e-5);
        assert!(!r.clamped);
    }

    #[test]
    fn test_unequal_masses_use_sine_scaled_exchange() {
        // mag_a = 2 * sin(-2), mag_b = 0.7 * sin(0.7)
        // common = 2 * (1 * mag_a + 3 * mag_b) / 4
        // A plain elastic exchange would give -2.05 and 0.65 instead.
        let normal = Vec3::new(-1.0, 0.0, 0.0);
        let r = resolve_velocities(
            normal,
            Vec3::new(2.0, 0.5, 0.0),
            1.0,
            Vec3::new(-0.7, 0.0, 0.0),
            3.0,
            10.0,
        );

        assert!((r.magnitude_a + 1.818_595).abs() < 1e-4);
        assert!((r.magnitude_b - 0.450_952).abs() < 1e-4);
        assert!((r.common_velocity + 0.232_869).abs() < 1e-4);
        assert!((r.velocity_a.x + 1.743_902).abs() < 1e-4);
        assert!((r.velocity_a.y - 0.5).abs() < 1e-6);
        assert!((r.velocity_b.x - 1.061_475).abs() < 1e-4);
        assert_eq!(r.velocity_b.y, 0.0);
        assert!(!r.clamped);
    }

    #[test]
    fn test_head_on_result_is_clamped() {
        let normal = Vec3::new(-1.0, 0.0, 0.0);
        let r = resolve_velocities(
            normal,
            Vec3::new(1.0, 0.0, 0.0),
            1.0,
            Vec3::new(-1.0, 0.0, 0.0),
            1.0,
            0.5,
        );

        assert!(r.clamped);
        assert!((r.velocity_a.length() - 0.5).abs() < 1e-5);
        assert!((r.velocity_b.length() - 0.5).abs() < 1e-5);
        assert!(r.velocity_a.x < 0.0);
        assert!(r.velocity_b.x > 0.0);
    }

    #[test]
    fn test_orthogonal_component_passes_through() {
        // Glancing: normal along x, both balls also moving along y
        let normal = Vec3::new(-1.0, 0.0, 0.0);
        let r = resolve_velocities(
            normal,
            Vec3::new(0.5, 0.7, 0.0),
            1.0,
            Vec3::new(-0.5, -0.3, 0.0),
            1.0,
            10.0,
        );

        assert!((r.velocity_a.y - 0.7).abs() < 1e-6);
        assert!((r.velocity_b.y + 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_velocity_orthogonal_to_normal_stays_finite() {
        // Ball a moves purely along y while the normal is along x
        let normal = Vec3::new(1.0, 0.0, 0.0);
        let r = resolve_velocities(
            normal,
            Vec3::new(0.0, 1.0, 0.0),
            1.0,
            Vec3::new(1.0, 0.0, 0.0),
            1.0,
            4.0,
        );

        assert!(r.velocity_a.is_finite());
        assert!(r.velocity_b.is_finite());
    }

    #[test]
    fn test_resting_ball_is_perturbed() {
        let v = perturb_resting(Vec3::ZERO, 1e-12);
        assert!(v.length_squared() > 0.0);
        assert_eq!(v.y, 0.0);

        let moving = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(perturb_resting(moving, 1e-12), moving);
    }

    #[test]
    fn test_output_is_planar() {
        let normal = Vec3::new(0.0, 1.0, 0.0);
        let r = resolve_velocities(
            normal,
            Vec3::new(0.2, -1.0, 0.4),
            1.0,
            Vec3::new(0.0, 1.0, -0.3),
            3.0,
            10.0,
        );
        assert_eq!(r.velocity_a.z, 0.0);
        assert_eq!(r.velocity_b.z, 0.0);
    }

    fn coord() -> impl Strategy<Value = f32> {
        -3.0f32..3.0
    }

    proptest! {
        #[test]
        fn prop_is_colliding_symmetric(
            ax in coord(), ay in coord(), bx in coord(), by in coord(),
            ra in 0.05f32..1.0, rb in 0.05f32..1.0,
        ) {
            let a = Vec3::new(ax, ay, 0.0);
            let b = Vec3::new(bx, by, 0.0);
            prop_assert_eq!(is_colliding(a, ra, b, rb), is_colliding(b, rb, a, ra));
        }

        #[test]
        fn prop_normal_components_rescaled_by_post_over_pre(
            nx in coord(), ny in coord(),
            vax in coord(), vay in coord(), vbx in coord(), vby in coord(),
            ma in 0.1f32..5.0, mb in 0.1f32..5.0,
        ) {
            let n = Vec3::new(nx, ny, 0.0);
            prop_assume!(n.length_squared() > 1e-3);
            let normal = n.normalize();
            let va = Vec3::new(vax, vay, 0.0);
            let vb = Vec3::new(vbx, vby, 0.0);

            let r = resolve_velocities(normal, va, ma, vb, mb, f32::MAX);
            prop_assume!(r.magnitude_a.abs() > 1e-2 && r.magnitude_b.abs() > 1e-2);
            prop_assert!(!r.clamped);

            // Rebuild each post magnitude from the output velocity alone
            let cases = [
                (va, r.velocity_a, r.magnitude_a, r.magnitude_a_post()),
                (vb, r.velocity_b, r.magnitude_b, r.magnitude_b_post()),
            ];
            for (before, after, pre, post) in cases {
                let (along_pre, orth_pre) = decompose(before, normal);
                let (along_post, orth_post) = decompose(after, normal);
                let expected = along_pre.length() * (post / pre).abs();
                let tolerance = 1e-3 * expected.max(1.0);
                prop_assert!((along_post.length() - expected).abs() <= tolerance);
                prop_assert!((orth_post - orth_pre).length() <= 1e-4 * along_post.length().max(1.0));
            }
        }
    }
}
