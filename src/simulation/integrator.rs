//! Single-step time integrators for the star + two-planet system
//!
//! Three interchangeable schemes with the same shape: take the packed
//! state `(r, v)` and a step size `h`, return the advanced `(r, v)`.
//! All of them are pure: no shared state between calls, no validation of
//! the inputs, and an exact no-op for `h = 0`.

use crate::configuration::config::IntegratorConfig;
use crate::simulation::forces::TwoPlanetGravity;
use crate::simulation::states::NVec4;

/// Explicit Euler, first order:
///   r_n+1 = r_n + h * drdt(r_n, v_n)
///   v_n+1 = v_n + h * dvdt(r_n, v_n)
/// Cheapest and least stable of the three; energy drifts over long runs.
pub fn euler_step(model: &TwoPlanetGravity, r: NVec4, v: NVec4, h: f64) -> (NVec4, NVec4) {
    let r_next = r + h * model.position_derivative(&r, &v);
    let v_next = v + h * model.acceleration(&r, &v);

    (r_next, v_next)
}

/// Semi-implicit Euler-Cromer in kick-drift-kick form:
///   v_n+1/2 = v_n + (h/2) * dvdt(r_n, v_n)
///   r_n+1   = r_n + h * drdt(r_n, v_n+1/2)
///   v_n+1   = v_n+1/2 + (h/2) * dvdt(r_n+1, v_n+1/2)
/// Symplectic-style update: same first-order cost per step as Euler but
/// much better long-term energy behavior on orbits.
pub fn euler_cromer_step(model: &TwoPlanetGravity, r: NVec4, v: NVec4, h: f64) -> (NVec4, NVec4) {
    let half_h = 0.5 * h;

    // Kick: half-step velocity from the start-state acceleration
    let v_half = v + half_h * model.acceleration(&r, &v);

    // Drift: full-step position using the half-step velocity
    let r_next = r + h * model.position_derivative(&r, &v_half);

    // Closing kick: finish the velocity at the advanced position
    let v_next = v_half + half_h * model.acceleration(&r_next, &v_half);

    (r_next, v_next)
}

/// Classical 4th-order Runge-Kutta.
/// Four stage evaluations of both derivatives (start, two midpoints, full
/// step), combined with (1, 2, 2, 1) / 6 weights. Highest accuracy per
/// step of the three; the production integrator.
pub fn rk4_step(model: &TwoPlanetGravity, r: NVec4, v: NVec4, h: f64) -> (NVec4, NVec4) {
    let half_h = 0.5 * h;

    // Stage 1: derivatives at the start state
    let kr1 = model.position_derivative(&r, &v);
    let kv1 = model.acceleration(&r, &v);

    // Stage 2: derivatives at the k1 midpoint
    let kr2 = model.position_derivative(&(r + half_h * kr1), &(v + half_h * kv1));
    let kv2 = model.acceleration(&(r + half_h * kr1), &(v + half_h * kv1));

    // Stage 3: derivatives at the k2 midpoint
    let kr3 = model.position_derivative(&(r + half_h * kr2), &(v + half_h * kv2));
    let kv3 = model.acceleration(&(r + half_h * kr2), &(v + half_h * kv2));

    // Stage 4: derivatives at the full k3 step
    let kr4 = model.position_derivative(&(r + h * kr3), &(v + h * kv3));
    let kv4 = model.acceleration(&(r + h * kr3), &(v + h * kv3));

    let r_next = r + h * (kr1 + 2.0 * kr2 + 2.0 * kr3 + kr4) / 6.0;
    let v_next = v + h * (kv1 + 2.0 * kv2 + 2.0 * kv3 + kv4) / 6.0;

    (r_next, v_next)
}

/// Advance one step with the configured integrator
pub fn integrate_step(
    kind: &IntegratorConfig,
    model: &TwoPlanetGravity,
    r: NVec4,
    v: NVec4,
    h: f64,
) -> (NVec4, NVec4) {
    match kind {
        IntegratorConfig::Euler => euler_step(model, r, v, h),
        IntegratorConfig::EulerCromer => euler_cromer_step(model, r, v, h),
        IntegratorConfig::Rk4 => rk4_step(model, r, v, h),
    }
}
