use orbitsim::simulation::driver::{run, SimError};
use orbitsim::simulation::forces::TwoPlanetGravity;
use orbitsim::simulation::integrator::{euler_cromer_step, euler_step, rk4_step};
use orbitsim::simulation::params::Parameters;
use orbitsim::simulation::scenario::{circular_start, Scenario};
use orbitsim::simulation::states::{earth_part, jupiter_part, NVec4};
use orbitsim::configuration::config::IntegratorConfig;

use std::f64::consts::PI;

/// Stock earth/jupiter parameters for tests
pub fn test_params() -> Parameters {
    Parameters::earth_jupiter(0)
}

/// Parameters where the outer planet is massless for practical purposes,
/// so the inner planet moves on a clean two-body orbit
pub fn single_planet_params() -> Parameters {
    let mut p = test_params();
    p.m_jupiter = 1.0e-18;
    p
}

/// Gravity model from parameters
pub fn gravity(p: &Parameters) -> TwoPlanetGravity {
    TwoPlanetGravity::new(p)
}

// ==================================================================================
// Force model tests
// ==================================================================================

#[test]
fn position_derivative_is_velocity() {
    let p = test_params();
    let model = gravity(&p);

    let r = NVec4::new(1.0, 0.0, 5.2, 0.0);
    let v = NVec4::new(0.3, -6.2, 1.7, 2.8);

    let drdt = model.position_derivative(&r, &v);

    assert_eq!(drdt, v, "dr/dt must equal v exactly");
}

#[test]
fn acceleration_antisymmetric_under_y_reflection() {
    let p = test_params();
    let model = gravity(&p);

    let r = NVec4::new(1.0, 0.7, -4.0, 2.5);
    let v = NVec4::zeros();

    // Mirror both planets across the x-axis
    let r_mirror = NVec4::new(r[0], -r[1], r[2], -r[3]);

    let a = model.acceleration(&r, &v);
    let a_mirror = model.acceleration(&r_mirror, &v);

    // x components unchanged, y components flip sign identically
    assert_eq!(a_mirror[0], a[0]);
    assert_eq!(a_mirror[1], -a[1]);
    assert_eq!(a_mirror[2], a[2]);
    assert_eq!(a_mirror[3], -a[3]);
}

#[test]
fn acceleration_antisymmetric_under_x_reflection() {
    let p = test_params();
    let model = gravity(&p);

    let r = NVec4::new(1.0, 0.7, -4.0, 2.5);
    let v = NVec4::zeros();

    // Mirror both planets across the y-axis
    let r_mirror = NVec4::new(-r[0], r[1], -r[2], r[3]);

    let a = model.acceleration(&r, &v);
    let a_mirror = model.acceleration(&r_mirror, &v);

    assert_eq!(a_mirror[0], -a[0]);
    assert_eq!(a_mirror[1], a[1]);
    assert_eq!(a_mirror[2], -a[2]);
    assert_eq!(a_mirror[3], a[3]);
}

#[test]
fn acceleration_points_toward_star() {
    let p = test_params();
    let model = gravity(&p);

    let r = NVec4::new(1.0, 0.0, 5.2, 0.0);
    let a = model.acceleration(&r, &NVec4::zeros());

    // Both planets sit on the positive x-axis; the star's pull dominates
    // and points in -x for both
    assert!(a[0] < 0.0, "earth not pulled toward star: {:?}", a);
    assert!(a[2] < 0.0, "jupiter not pulled toward star: {:?}", a);
}

#[test]
fn epsilon_guard_handles_zero_coordinates() {
    let p = test_params();
    let model = gravity(&p);

    // Both planets on the y-axis: every x separation is exactly zero
    let r = NVec4::new(0.0, 1.0, 0.0, 5.2);
    let a = model.acceleration(&r, &NVec4::zeros());

    assert!(a.iter().all(|c| c.is_finite()), "non-finite acceleration: {:?}", a);
    assert!(a[1] < 0.0, "earth not pulled toward star: {:?}", a);
    assert!(a[3] < 0.0, "jupiter not pulled toward star: {:?}", a);
}

#[test]
fn component_decomposition_matches_radial_direction() {
    let p = single_planet_params();
    let model = gravity(&p);

    // Off-axis position: the per-axis cosine/sine split must reproduce the
    // radial inverse-square pull a = -g_norm * r_hat / |r|^2
    let pos = NVec4::new(0.6, 0.8, 52.0, 0.0); // earth at distance 1
    let a = model.acceleration(&pos, &NVec4::zeros());
    let a_e = earth_part(&a);

    let expected = -p.g_norm * earth_part(&pos);

    assert!(
        (a_e - expected).norm() < 1.0e-9 * expected.norm(),
        "expected {:?}, got {:?}",
        expected,
        a_e
    );
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn zero_step_is_noop() {
    let p = test_params();
    let model = gravity(&p);

    let r = NVec4::new(1.0, 0.2, -3.0, 4.0);
    let v = NVec4::new(0.5, -6.0, 2.0, 1.0);

    let steps: [fn(&TwoPlanetGravity, NVec4, NVec4, f64) -> (NVec4, NVec4); 3] =
        [euler_step, euler_cromer_step, rk4_step];

    for step in steps {
        let (r_next, v_next) = step(&model, r, v, 0.0);
        assert_eq!(r_next, r);
        assert_eq!(v_next, v);
    }
}

#[test]
fn rk4_circular_orbit_returns_home() {
    let p = single_planet_params();
    let model = gravity(&p);

    let start = circular_start(p.g_norm, 1.0, 5.2);
    let r0 = start.r;
    let v0 = start.v;

    // One full period of the inner orbit: omega = sqrt(g_norm / r^3)
    let period = 2.0 * PI / p.g_norm.sqrt();
    let n_steps = 2000;
    let h = period / n_steps as f64;

    let mut r = r0;
    let mut v = v0;
    for _ in 0..n_steps {
        (r, v) = rk4_step(&model, r, v, h);
    }

    let pos_err = (earth_part(&r) - earth_part(&r0)).norm();
    let speed_err = (earth_part(&v).norm() - earth_part(&v0).norm()).abs();

    assert!(pos_err < 1.0e-3, "orbit did not close: {:.3e}", pos_err);
    assert!(
        speed_err < 1.0e-3 * earth_part(&v0).norm(),
        "speed drifted: {:.3e}",
        speed_err
    );
}

#[test]
fn integrator_error_ordering() {
    let p = single_planet_params();
    let model = gravity(&p);

    let start = circular_start(p.g_norm, 1.0, 5.2);
    let span = 0.5; // years
    let n_steps = 100;
    let h = span / n_steps as f64;

    // High-precision reference: RK4 at 1/100th the step size
    let refine = 100;
    let mut r_ref = start.r;
    let mut v_ref = start.v;
    for _ in 0..(n_steps * refine) {
        (r_ref, v_ref) = rk4_step(&model, r_ref, v_ref, h / refine as f64);
    }

    let final_error = |step: fn(&TwoPlanetGravity, NVec4, NVec4, f64) -> (NVec4, NVec4)| {
        let mut r = start.r;
        let mut v = start.v;
        for _ in 0..n_steps {
            (r, v) = step(&model, r, v, h);
        }
        (r - r_ref).norm()
    };

    let err_euler = final_error(euler_step);
    let err_ec = final_error(euler_cromer_step);
    let err_rk4 = final_error(rk4_step);

    assert!(
        err_euler > err_ec,
        "Euler ({:.3e}) should be worse than Euler-Cromer ({:.3e})",
        err_euler,
        err_ec
    );
    assert!(
        err_ec > err_rk4,
        "Euler-Cromer ({:.3e}) should be worse than RK4 ({:.3e})",
        err_ec,
        err_rk4
    );
}

#[test]
fn single_rk4_step_keeps_circular_radii() {
    let scenario = Scenario::earth_jupiter(IntegratorConfig::Rk4, 1);
    let p = &scenario.parameters;
    let model = &scenario.forces;

    let r0 = scenario.system.r;
    let v0 = scenario.system.v;

    // The driver's CFL heuristic for the first step
    let max_speed = earth_part(&v0).norm().max(jupiter_part(&v0).norm());
    let h = p.h_cfl / max_speed;

    let (r, _v) = rk4_step(model, r0, v0, h);

    let earth_radius = earth_part(&r).norm();
    let jupiter_radius = jupiter_part(&r).norm();

    assert!(
        (earth_radius - 1.0).abs() < 1.0e-3,
        "earth radius moved to {}",
        earth_radius
    );
    assert!(
        (jupiter_radius - 5.2).abs() < 1.0e-3 * 5.2,
        "jupiter radius moved to {}",
        jupiter_radius
    );
}

// ==================================================================================
// Driver tests
// ==================================================================================

#[test]
fn driver_appends_aligned_trajectories() {
    let iterations = 250;
    let scenario = Scenario::earth_jupiter(IntegratorConfig::Rk4, iterations);

    let out = run(&scenario).expect("run failed");

    // One sample per iteration plus the initial condition
    assert_eq!(out.earth.len(), iterations + 1);
    assert_eq!(out.jupiter.len(), iterations + 1);
    assert_eq!(out.earth.positions().len(), out.earth.velocities().len());
    assert_eq!(out.jupiter.positions().len(), out.jupiter.velocities().len());

    // First sample is the initial condition
    assert_eq!(out.earth.positions()[0], earth_part(&scenario.system.r));
    assert_eq!(out.earth.velocities()[0], earth_part(&scenario.system.v));
    assert_eq!(out.jupiter.positions()[0], jupiter_part(&scenario.system.r));
    assert_eq!(out.jupiter.velocities()[0], jupiter_part(&scenario.system.v));
}

#[test]
fn driver_keeps_near_circular_orbits() {
    let scenario = Scenario::earth_jupiter(IntegratorConfig::Rk4, 250);

    let out = run(&scenario).expect("run failed");

    // A few earth years of RK4 should hold both radii closely
    assert!(
        (out.earth.last_radius() - 1.0).abs() < 1.0e-2,
        "earth radius drifted to {}",
        out.earth.last_radius()
    );
    assert!(
        (out.jupiter.last_radius() - 5.2).abs() < 1.0e-2 * 5.2,
        "jupiter radius drifted to {}",
        out.jupiter.last_radius()
    );
}

#[test]
fn driver_reports_non_finite_state() {
    let mut scenario = Scenario::earth_jupiter(IntegratorConfig::Euler, 10);
    scenario.system.v[0] = f64::NAN;

    let err = run(&scenario).expect_err("NaN input must not produce a trajectory");

    assert!(
        matches!(err, SimError::NonFiniteState { step: 0 }),
        "unexpected error: {:?}",
        err
    );
}
