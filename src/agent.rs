//! Agent population: seeding, per-frame integration, screen projection.

use glam::Vec3;
use rand::Rng;

use crate::config::{
    AGENT_COUNT, DT, FIELD, SEED_SPREAD, SEED_STATE, SUBSTEPS, TRAIL_CAPACITY, TRAIL_COLOR,
    WORLD_SCALE,
};
use crate::integrator::rk4_step;
use crate::trail::Trail;

/// Project a phase-space state into world space for rendering.
///
/// Swaps y and z so the attractor's z axis points up on screen, then applies
/// the configured uniform scale.
pub fn to_screen(s: Vec3) -> Vec3 {
    Vec3::new(s.x, s.z, s.y) * WORLD_SCALE
}

/// One integrated trajectory: current state, bounded history, fixed color.
pub struct Agent {
    pub state: Vec3,
    pub trail: Trail,
    /// Linear RGBA, assigned at creation and never mutated.
    pub color: [f32; 4],
}

/// The fixed set of agents advanced every frame.
///
/// Agents are mutually independent (the field never couples one agent to
/// another), so update order is immaterial; they are stepped sequentially.
pub struct Population {
    agents: Vec<Agent>,
}

impl Population {
    /// Seed `AGENT_COUNT` agents around [`SEED_STATE`].
    ///
    /// Each coordinate is offset by a uniform integer in [-100, 100] divided
    /// by 100 and scaled by [`SEED_SPREAD`], matching the reference
    /// perturbation exactly.
    pub fn seed<R: Rng>(rng: &mut R) -> Self {
        let agents = (0..AGENT_COUNT)
            .map(|_| {
                let mut perturb = || (rng.gen_range(-100i32..=100) as f32 / 100.0) * SEED_SPREAD;
                let offset = Vec3::new(perturb(), perturb(), perturb());
                Agent {
                    state: SEED_STATE + offset,
                    trail: Trail::new(TRAIL_CAPACITY),
                    color: TRAIL_COLOR,
                }
            })
            .collect();
        Self { agents }
    }

    /// Advance every agent by `SUBSTEPS` integrator steps of `DT`.
    ///
    /// Runs unconditionally once per rendered frame; the simulated time per
    /// frame is fixed and never derived from wall-clock frame duration.
    pub fn step_frame(&mut self) {
        for _ in 0..SUBSTEPS {
            for agent in &mut self.agents {
                agent.state = rk4_step(FIELD, agent.state, DT);
                agent.trail.push(to_screen(agent.state));
            }
        }
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn to_screen_swaps_y_and_z() {
        let s = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(to_screen(s), Vec3::new(1.0, 3.0, 2.0) * WORLD_SCALE);
    }

    #[test]
    fn seed_produces_full_population_near_base() {
        let mut rng = StdRng::seed_from_u64(7);
        let pop = Population::seed(&mut rng);
        assert_eq!(pop.len(), AGENT_COUNT);
        for agent in pop.agents() {
            let offset = agent.state - SEED_STATE;
            assert!(offset.abs().max_element() <= SEED_SPREAD + 1e-6);
            assert!(agent.trail.is_empty());
        }
    }

    #[test]
    fn frame_advances_each_agent_substeps_times() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut pop = Population::seed(&mut rng);
        pop.step_frame();
        for agent in pop.agents() {
            assert_eq!(agent.trail.len(), SUBSTEPS as usize);
            assert!(agent.state.is_finite());
        }
    }

    #[test]
    fn trail_follows_state() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut pop = Population::seed(&mut rng);
        pop.step_frame();
        for agent in pop.agents() {
            assert_eq!(agent.trail.latest(), Some(to_screen(agent.state)));
        }
    }

    #[test]
    fn perturbed_seeds_stay_distinct() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut pop = Population::seed(&mut rng);
        pop.step_frame();
        let states: Vec<Vec3> = pop.agents().iter().map(|a| a.state).collect();
        for (i, a) in states.iter().enumerate() {
            for b in &states[i + 1..] {
                assert_ne!(a, b, "two agents collapsed onto one trajectory");
            }
        }
    }
}
