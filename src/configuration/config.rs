//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – engine options (which integrator to use)
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`BodyConfig`]       – initial orbital radius for each planet
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   integrator: "rk4"       # or "euler", "euler_cromer"
//!
//! parameters:
//!   g_norm: 39.42           # normalized gravitational constant (AU^3/yr^2)
//!   m_earth: 3.0025e-6      # earth / star mass ratio
//!   m_jupiter: 9.5425e-4    # jupiter / star mass ratio
//!   eps: 1.0e-20            # epsilon guard for separations/angles
//!   h_cfl: 0.1              # CFL coefficient: h = h_cfl / max speed
//!   iterations: 1000        # fixed iteration budget
//!
//! bodies:
//!   - radius: 1.0           # inner planet ("earth"), AU
//!   - radius: 5.2           # outer planet ("jupiter"), AU
//! ```
//!
//! Each planet starts at `(radius, 0)` with the tangential circular-orbit
//! velocity `(0, sqrt(g_norm / radius))`; the engine maps this
//! configuration into its internal runtime scenario representation.

use serde::Deserialize;

/// Which integrator method is used by the engine:
/// `integrator: "euler"`, `"euler_cromer"` or `"rk4"`
#[derive(Deserialize, Debug, Clone)]
pub enum IntegratorConfig {
    #[serde(rename = "euler")] // Explicit Euler. First order, cheapest, energy drifts over long runs
    Euler,

    #[serde(rename = "euler_cromer")] // Semi-implicit Euler-Cromer. Symplectic-style, better energy behavior at first-order cost
    EulerCromer,

    #[serde(rename = "rk4")] // Classical 4th-order Runge-Kutta. Highest accuracy per step, the production integrator
    Rk4,
}

/// High-level engine configuration
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub integrator: IntegratorConfig, // time integrator used for advancing the system state
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub g_norm: f64,    // normalized gravitational constant, AU^3 / year^2
    pub m_earth: f64,   // earth / star mass ratio
    pub m_jupiter: f64, // jupiter / star mass ratio
    pub eps: f64,       // epsilon guard - prevents singular angles/forces at zero separation
    pub h_cfl: f64,     // CFL coefficient for the adaptive step size
    pub iterations: usize, // fixed iteration budget
}

/// Configuration for a single planet's initial state
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub radius: f64, // initial orbital radius in AU; the planet starts on the x-axis with circular velocity
}

/// Top-level scenario configuration loaded from YAML.
/// `bodies` lists the inner planet first, then the outer one.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // engine-level configuration (integrator choice)
    pub parameters: ParametersConfig, // global numerical and physical parameters
    pub bodies: Vec<BodyConfig>, // the two planets defining the initial state
}
