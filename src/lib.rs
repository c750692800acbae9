pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{earth_part, jupiter_part, pack, NVec2, NVec4, System, Trajectory};
pub use simulation::params::{earth_mass_ratio, g_normalized, jupiter_mass_ratio, Parameters};
pub use simulation::forces::TwoPlanetGravity;
pub use simulation::integrator::{euler_cromer_step, euler_step, integrate_step, rk4_step};
pub use simulation::scenario::{circular_start, Scenario};
pub use simulation::driver::{run, SimError, SimOutput};

pub use configuration::config::{BodyConfig, EngineConfig, IntegratorConfig, ParametersConfig, ScenarioConfig};

pub use benchmark::benchmark::{bench_driver, bench_integrators};
