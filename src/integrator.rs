//! Classical fixed-step 4th-order Runge-Kutta integration.

use glam::Vec3;

use crate::dynamics::VectorField;

/// Advance `s` by one RK4 step of size `dt` through `field`.
///
/// Pure function of its inputs: no allocation, no hidden state, and
/// bit-identical output for identical floating-point input. Non-finite
/// values are not detected; a diverging state propagates silently into
/// subsequent steps.
pub fn rk4_step(field: VectorField, s: Vec3, dt: f32) -> Vec3 {
    let k1 = field(s);
    let k2 = field(s + k1 * (0.5 * dt));
    let k3 = field(s + k2 * (0.5 * dt));
    let k4 = field(s + k3 * dt);
    s + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (dt / 6.0)
}
