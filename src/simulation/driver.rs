//! Simulation driver: the fixed-budget stepping loop
//!
//! Owns the two trajectories and the adaptive step size. Each iteration
//! recomputes `h = h_cfl / max(speed_e, speed_j)` (a CFL-like heuristic
//! bounding the single-step displacement of the fastest body), advances
//! the state once with the configured integrator, and appends the result
//! to both histories.

use thiserror::Error;

use crate::simulation::integrator::integrate_step;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{earth_part, jupiter_part, NVec4, Trajectory};

#[derive(Debug, Error)]
pub enum SimError {
    /// An integrator step produced a NaN or infinite component. The pure
    /// steppers do not validate; the driver checks after every step so a
    /// degenerate force evaluation cannot silently poison the rest of the
    /// run.
    #[error("non-finite state after iteration {step}")]
    NonFiniteState { step: usize },
}

/// Full output of one simulation run: one history per moving body
#[derive(Debug, Clone)]
pub struct SimOutput {
    pub earth: Trajectory,
    pub jupiter: Trajectory,
}

fn max_speed(v: &NVec4) -> f64 {
    earth_part(v).norm().max(jupiter_part(v).norm())
}

fn is_finite(w: &NVec4) -> bool {
    w.iter().all(|c| c.is_finite())
}

/// Run the scenario for its fixed iteration budget.
///
/// The trajectories are pre-allocated for `iterations + 1` samples; entry 0
/// is the initial condition and entry i the state after i steps.
pub fn run(scenario: &Scenario) -> Result<SimOutput, SimError> {
    let p = &scenario.parameters;
    let model = &scenario.forces;

    let mut r = scenario.system.r;
    let mut v = scenario.system.v;

    let samples = p.iterations + 1;
    let mut earth = Trajectory::with_capacity(earth_part(&r), earth_part(&v), samples);
    let mut jupiter = Trajectory::with_capacity(jupiter_part(&r), jupiter_part(&v), samples);

    for step in 0..p.iterations {
        // CFL timestep from the current fastest body
        let h = p.h_cfl / max_speed(&v);

        let (r_next, v_next) = integrate_step(&scenario.engine.integrator, model, r, v, h);

        if !is_finite(&r_next) || !is_finite(&v_next) {
            return Err(SimError::NonFiniteState { step });
        }

        r = r_next;
        v = v_next;

        earth.append(earth_part(&r), earth_part(&v));
        jupiter.append(jupiter_part(&r), jupiter_part(&v));
    }

    Ok(SimOutput { earth, jupiter })
}
