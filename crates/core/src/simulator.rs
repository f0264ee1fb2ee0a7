//! The core `Simulator` trait implemented by every particle simulation.
//!
//! The trait is object-safe so hosts can drive a `Box<dyn Simulator>`
//! without knowing the concrete simulation behind it.

use crate::error::FieldError;
use crate::particle::Particle;
use serde_json::Value;

/// Core trait for frame-driven particle simulations.
///
/// One `step()` call advances every particle by one tick. The particle
/// slice is the full observable state; renderers read it, never mutate it.
pub trait Simulator {
    /// Advance the simulation by one tick.
    fn step(&mut self) -> Result<(), FieldError>;

    /// Read-only view of the current particle set.
    fn particles(&self) -> &[Particle];

    /// Current parameter values as a JSON object.
    fn params(&self) -> Value;

    /// Schema describing all available parameters, their types, ranges, and defaults.
    fn param_schema(&self) -> Value;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Minimal simulator used to verify trait object safety.
    struct MockSim {
        particles: Vec<Particle>,
        ticks: usize,
    }

    impl MockSim {
        fn new() -> Self {
            Self {
                particles: Vec::new(),
                ticks: 0,
            }
        }
    }

    impl Simulator for MockSim {
        fn step(&mut self) -> Result<(), FieldError> {
            self.ticks += 1;
            Ok(())
        }

        fn particles(&self) -> &[Particle] {
            &self.particles
        }

        fn params(&self) -> Value {
            json!({"ticks": self.ticks})
        }

        fn param_schema(&self) -> Value {
            json!({
                "ticks": {
                    "type": "integer",
                    "default": 0,
                    "description": "Number of ticks executed"
                }
            })
        }
    }

    #[test]
    fn simulator_trait_is_object_safe() {
        let sim: Box<dyn Simulator> = Box::new(MockSim::new());
        assert!(sim.particles().is_empty());
    }

    #[test]
    fn mock_sim_step_advances_state() {
        let mut sim = MockSim::new();
        sim.step().unwrap();
        sim.step().unwrap();
        assert_eq!(sim.ticks, 2);
        assert_eq!(sim.params()["ticks"], 2);
    }

    #[test]
    fn dyn_simulator_mut_reference_works() {
        let mut sim = MockSim::new();
        let sim_ref: &mut dyn Simulator = &mut sim;
        sim_ref.step().unwrap();
        assert_eq!(sim_ref.params()["ticks"], 1);
    }

    #[test]
    fn mock_param_schema_has_expected_structure() {
        let sim = MockSim::new();
        let schema = sim.param_schema();
        assert!(schema["ticks"].get("type").is_some());
        assert!(schema["ticks"].get("default").is_some());
    }
}
