//! Vector field presets for the integrated dynamical systems.
//!
//! A vector field maps a phase-space point to its instantaneous rate of
//! change. The presets below form a small closed set; the active one is
//! selected at compile time via [`crate::config::FIELD`].

use glam::Vec3;

/// A time-independent vector field over 3D phase space.
pub type VectorField = fn(Vec3) -> Vec3;

/// Lorenz system at sigma=10, rho=99.96, beta=8/3.
///
/// The high-rho regime traces a larger, more filamented attractor than the
/// classic rho=28 butterfly. The origin is a fixed point.
pub fn lorenz(s: Vec3) -> Vec3 {
    const SIGMA: f32 = 10.0;
    const RHO: f32 = 99.96;
    const BETA: f32 = 8.0 / 3.0;

    Vec3::new(
        SIGMA * (s.y - s.x),
        s.x * (RHO - s.z) - s.y,
        s.x * s.y - BETA * s.z,
    )
}

/// Lotka-Volterra predator-prey dynamics in the x/y plane, z held flat.
///
/// All four rate constants at 1.0. Closed orbits, not chaotic; useful as a
/// sanity field when the integrator itself is suspect.
pub fn predator_prey(s: Vec3) -> Vec3 {
    let (x, y) = (s.x, s.y);
    Vec3::new(x - x * y, -y + x * y, 0.0)
}

/// Aizawa attractor.
///
/// Unit-scale system (spans roughly [-2, 2]); pair with a larger
/// `WORLD_SCALE` to fill the default view.
pub fn aizawa(s: Vec3) -> Vec3 {
    let (x, y, z) = (s.x, s.y, s.z);
    let dx = (z - 0.7) * x - 3.5 * y;
    let dy = 3.5 * x + (z - 0.7) * y;
    let dz = 0.6 + 0.95 * z - (z * z * z / 3.0) - (x * x + y * y) * (1.0 + 0.25 * z)
        + 0.1 * z * x * x * x;
    Vec3::new(dx, dy, dz)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lorenz_origin_is_fixed_point() {
        assert_eq!(lorenz(Vec3::ZERO), Vec3::ZERO);
    }

    #[test]
    fn lorenz_drives_off_axis_states() {
        let rate = lorenz(Vec3::new(0.0, 0.0, 99.0));
        // On the z axis only the -beta*z term is active.
        assert_eq!(rate.x, 0.0);
        assert_eq!(rate.y, 0.0);
        assert!(rate.z < 0.0);
    }

    #[test]
    fn predator_prey_equilibrium() {
        // (1, 1) is the coexistence equilibrium for unit rate constants.
        assert_eq!(predator_prey(Vec3::new(1.0, 1.0, 0.0)), Vec3::ZERO);
    }
}
