//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! (`Scenario`) containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with both planets at t = 0)
//! - the gravity model (`TwoPlanetGravity`)
//!
//! The driver consumes this bundle and owns everything it produces.

use crate::configuration::config::{IntegratorConfig, ScenarioConfig};
use crate::simulation::engine::Engine;
use crate::simulation::forces::TwoPlanetGravity;
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec4, System};

/// A fully-initialized runtime scenario: engine settings, parameters,
/// initial system state, and the force model derived from them
#[derive(Debug, Clone)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: TwoPlanetGravity,
}

/// Initial packed state for planets starting on the x-axis at the given
/// radii, each with the tangential circular-orbit velocity
/// v = sqrt(g_norm / radius)
pub fn circular_start(g_norm: f64, radius_e: f64, radius_j: f64) -> System {
    System {
        r: NVec4::new(radius_e, 0.0, radius_j, 0.0),
        v: NVec4::new(
            0.0,
            (g_norm / radius_e).sqrt(),
            0.0,
            (g_norm / radius_j).sqrt(),
        ),
        t: 0.0,
    }
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            g_norm: p_cfg.g_norm,
            m_earth: p_cfg.m_earth,
            m_jupiter: p_cfg.m_jupiter,
            eps: p_cfg.eps,
            h_cfl: p_cfg.h_cfl,
            iterations: p_cfg.iterations,
        };

        // Bodies: inner planet first, then the outer one, both started on
        // circular orbits
        let system = circular_start(
            parameters.g_norm,
            cfg.bodies[0].radius,
            cfg.bodies[1].radius,
        );

        // Engine (runtime) from EngineConfig
        let engine = Engine {
            integrator: cfg.engine.integrator,
        };

        let forces = TwoPlanetGravity::new(&parameters);

        Self {
            engine,
            parameters,
            system,
            forces,
        }
    }

    /// The stock earth/jupiter scenario (1 AU and 5.2 AU circular starts),
    /// used by tests and benchmarks
    pub fn earth_jupiter(integrator: IntegratorConfig, iterations: usize) -> Self {
        let parameters = Parameters::earth_jupiter(iterations);
        let system = circular_start(parameters.g_norm, 1.0, 5.2);
        let forces = TwoPlanetGravity::new(&parameters);

        Self {
            engine: Engine { integrator },
            parameters,
            system,
            forces,
        }
    }
}
