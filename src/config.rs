//! Compile-time simulation and presentation constants.
//!
//! Everything here is a constant on purpose: the reference behavior is a
//! fixed-step, fixed-population simulation, and swapping the vector field
//! or retuning a knob is a recompile, not a runtime option.

use glam::Vec3;

use crate::dynamics::{self, VectorField};

/// The vector field being integrated. One of the presets in [`crate::dynamics`].
pub const FIELD: VectorField = dynamics::lorenz;

/// Integration sub-step size in simulation time units.
pub const DT: f32 = 0.005;

/// Integrator sub-steps per rendered frame. The simulation advances
/// `SUBSTEPS * DT` time units per frame regardless of wall-clock frame time.
pub const SUBSTEPS: u32 = 10;

/// Number of simultaneously simulated agents. Fixed at startup.
pub const AGENT_COUNT: usize = 50;

/// Maximum positions retained per trail before the oldest is evicted.
pub const TRAIL_CAPACITY: usize = 5000;

/// Shared seed state for the whole population.
///
/// The seed matters: start outside the attractor basin and trajectories may
/// never converge. (0, 0, 99) is inside the basin for the Lorenz parameters
/// in [`crate::dynamics::lorenz`].
pub const SEED_STATE: Vec3 = Vec3::new(0.0, 0.0, 99.0);

/// Half-width of the random perturbation applied to each seed coordinate.
pub const SEED_SPREAD: f32 = 0.1;

/// Uniform scale applied when projecting simulation space to world space.
///
/// The reference renders the attractor at raw coordinates; some fields (the
/// unit-scale ones like `predator_prey`) want something around 30.0 to be
/// visible under the default camera.
pub const WORLD_SCALE: f32 = 1.0;

/// Trail color, linear RGBA. Low alpha so additively blended overlaps glow.
pub const TRAIL_COLOR: [f32; 4] = [0.694, 0.988, 0.286, 0.392];
