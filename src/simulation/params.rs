//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - mass ratios of the two planets relative to the central star,
//! - the normalized gravitational constant (AU / year units),
//! - the epsilon guard for distance/angle computations,
//! - the CFL coefficient and the fixed iteration budget

// Physical constants in cgs units
const G_CGS: f64 = 6.67e-8; // gravitational constant
const SOLAR_MASS: f64 = 1.989e33; // solar mass
const EARTH_MASS: f64 = 5.972e27; // earth mass
const JUPITER_MASS: f64 = 1.898e30; // jupiter mass

// Unit conversion factors
const AU_TO_CM: f64 = 1.496e13; // from AU to cm
const YEAR_TO_SEC: f64 = 3.1536e7; // from year to sec

/// Gravitational constant normalized so positions are in AU and time in
/// years: G * M_star * year^2 / AU^3, roughly 4 pi^2
pub fn g_normalized() -> f64 {
    G_CGS * SOLAR_MASS * YEAR_TO_SEC * YEAR_TO_SEC / (AU_TO_CM * AU_TO_CM * AU_TO_CM)
}

/// Earth / star mass ratio
pub fn earth_mass_ratio() -> f64 {
    EARTH_MASS / SOLAR_MASS
}

/// Jupiter / star mass ratio
pub fn jupiter_mass_ratio() -> f64 {
    JUPITER_MASS / SOLAR_MASS
}

#[derive(Debug, Clone)]
pub struct Parameters {
    pub g_norm: f64,    // normalized gravitational constant, AU^3 / year^2
    pub m_earth: f64,   // earth / star mass ratio
    pub m_jupiter: f64, // jupiter / star mass ratio
    pub eps: f64,       // epsilon guard against zero separations/denominators
    pub h_cfl: f64,     // CFL coefficient: h = h_cfl / max speed
    pub iterations: usize, // fixed iteration budget
}

impl Parameters {
    /// Parameters of the solar earth/jupiter configuration
    pub fn earth_jupiter(iterations: usize) -> Self {
        Self {
            g_norm: g_normalized(),
            m_earth: earth_mass_ratio(),
            m_jupiter: jupiter_mass_ratio(),
            eps: 1.0e-20,
            h_cfl: 0.1,
            iterations,
        }
    }
}
