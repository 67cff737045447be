//! # Strange Trails
//!
//! Integrates a chaotic ODE system (Lorenz-type) for a population of
//! nearby-seeded agents and renders their trajectories as glowing 3D line
//! trails under an orbiting camera.
//!
//! The simulation core is deliberately small and rendering-free:
//!
//! - [`dynamics`] — named vector field presets (`fn(Vec3) -> Vec3`)
//! - [`integrator`] — the classical RK4 step
//! - [`trail`] — bounded ring-buffer position history
//! - [`agent`] — seeding and the fixed-step population update
//!
//! Everything else is presentation: [`camera`] maps pointer input to a
//! spherical orbit, [`input`] and [`time`] wrap winit events and the frame
//! clock, and [`gpu`] uploads trail vertices and draws line strips with
//! additive blending so overlapping translucent segments glow.
//!
//! Tunables (field preset, step size, population size, trail capacity)
//! live in [`config`] as compile-time constants.

mod app;

pub mod agent;
pub mod camera;
pub mod config;
pub mod dynamics;
pub mod error;
pub mod gpu;
pub mod input;
pub mod integrator;
pub mod time;
pub mod trail;

pub use app::run;
pub use glam::{Vec2, Vec3};
