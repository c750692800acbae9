use std::time::Instant;

use crate::simulation::driver::run;
use crate::simulation::integrator::{euler_cromer_step, euler_step, rk4_step};
use crate::simulation::scenario::Scenario;
use crate::configuration::config::IntegratorConfig;

/// Time raw single-step cost of the three integrators on the stock
/// earth/jupiter state
/// Paste output directly into a spreadsheet to graph
pub fn bench_integrators() {
    let scenario = Scenario::earth_jupiter(IntegratorConfig::Rk4, 0);
    let model = &scenario.forces;

    let r0 = scenario.system.r;
    let v0 = scenario.system.v;
    let h = 0.01;

    let steps = 1_000_000;

    println!("integrator,ns_per_step");

    // Euler
    let mut state = (r0, v0);
    let t0 = Instant::now();
    for _ in 0..steps {
        state = euler_step(model, state.0, state.1, h);
    }
    let ns = t0.elapsed().as_nanos() as f64 / steps as f64;
    println!("euler,{:.2}", ns);

    // Euler-Cromer
    let mut state = (r0, v0);
    let t1 = Instant::now();
    for _ in 0..steps {
        state = euler_cromer_step(model, state.0, state.1, h);
    }
    let ns = t1.elapsed().as_nanos() as f64 / steps as f64;
    println!("euler_cromer,{:.2}", ns);

    // RK4
    let mut state = (r0, v0);
    let t2 = Instant::now();
    for _ in 0..steps {
        state = rk4_step(model, state.0, state.1, h);
    }
    let ns = t2.elapsed().as_nanos() as f64 / steps as f64;
    println!("rk4,{:.2}", ns);
}

/// Time full driver runs (adaptive step + trajectory bookkeeping) for a
/// range of iteration budgets
pub fn bench_driver() {
    let budgets = [1_000, 10_000, 100_000, 1_000_000];

    println!("iterations,rk4_ms");

    for n in budgets {
        let scenario = Scenario::earth_jupiter(IntegratorConfig::Rk4, n);

        // Warm up
        let _ = run(&scenario);

        let t0 = Instant::now();
        let out = run(&scenario);
        let ms = t0.elapsed().as_secs_f64() * 1000.0;

        // Keep the output alive so the run is not optimized away
        let len = out.map(|o| o.earth.len()).unwrap_or(0);

        println!("{},{:.3} # {} samples", n, ms, len);
    }
}
