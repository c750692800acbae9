//! Core state types for the star + two-planet simulation.
//!
//! The central star is fixed at the origin and carries no state. The two
//! moving bodies (inner "earth", outer "jupiter") are packed into flat
//! 4-vectors:
//! - positions  `r = (x_e, y_e, x_j, y_j)`
//! - velocities `v = (vx_e, vy_e, vx_j, vy_j)`
//!
//! `Trajectory` is the per-body append-only history of those states.

use nalgebra::{Vector2, Vector4};
pub type NVec2 = Vector2<f64>;
pub type NVec4 = Vector4<f64>;

/// Earth components of a packed 4-vector
pub fn earth_part(w: &NVec4) -> NVec2 {
    NVec2::new(w[0], w[1])
}

/// Jupiter components of a packed 4-vector
pub fn jupiter_part(w: &NVec4) -> NVec2 {
    NVec2::new(w[2], w[3])
}

/// Pack two per-body 2-vectors back into a flat 4-vector
pub fn pack(e: NVec2, j: NVec2) -> NVec4 {
    NVec4::new(e.x, e.y, j.x, j.y)
}

#[derive(Debug, Clone)]
pub struct System {
    pub r: NVec4, // positions (x_e, y_e, x_j, y_j)
    pub v: NVec4, // velocities (vx_e, vy_e, vx_j, vy_j)
    pub t: f64,   // time
}

/// Append-only history of one body's states.
///
/// Positions and velocities are indexed in lockstep: index i in both refers
/// to the same simulation instant. The first entry is the initial condition.
/// Samples are never edited or removed after being appended.
#[derive(Debug, Clone)]
pub struct Trajectory {
    pos: Vec<NVec2>,
    vel: Vec<NVec2>,
}

impl Trajectory {
    /// Start a trajectory from an initial condition, reserving room for
    /// `samples` entries in total
    pub fn with_capacity(r0: NVec2, v0: NVec2, samples: usize) -> Self {
        let mut pos = Vec::with_capacity(samples);
        let mut vel = Vec::with_capacity(samples);
        pos.push(r0);
        vel.push(v0);
        Self { pos, vel }
    }

    /// Append the latest integrator output
    pub fn append(&mut self, r: NVec2, v: NVec2) {
        self.pos.push(r);
        self.vel.push(v);
    }

    pub fn positions(&self) -> &[NVec2] {
        &self.pos
    }

    pub fn velocities(&self) -> &[NVec2] {
        &self.vel
    }

    /// Number of samples (positions and velocities always agree)
    pub fn len(&self) -> usize {
        self.pos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pos.is_empty()
    }

    /// Distance of the latest position sample from the origin
    pub fn last_radius(&self) -> f64 {
        self.pos[self.pos.len() - 1].norm()
    }

    /// Speed of the latest velocity sample
    pub fn last_speed(&self) -> f64 {
        self.vel[self.vel.len() - 1].norm()
    }
}
