//! Gravitational force model for the star + two-planet system
//!
//! The star is fixed at the origin; the two planets feel its pull plus
//! their mutual attraction. Both derivatives of the packed state are
//! computed here:
//! - `position_derivative`: dr/dt = v (definition of velocity)
//! - `acceleration`:        dv/dt from pairwise Newtonian gravity

use crate::simulation::params::Parameters;
use crate::simulation::states::{earth_part, jupiter_part, pack, NVec2, NVec4};

/// sign with sign(0) = 0, so a zero coordinate gets no force component
/// (f64::signum maps 0.0 to 1.0)
fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Unit force contribution of one body pair, decomposed per axis.
///
/// `rel` points from the attracting body toward the attracted one; the
/// returned force points back along `-rel`, with inverse-square magnitude.
///
/// Instead of dividing `rel` by its norm, the direction is split into a
/// per-axis cosine/sine pair through the angle of the relative vector:
///
///   theta = atan(|rel_y| / (|rel_x| + eps))
///   f_x   = -sign(rel_x) * cos(theta) / (dist + eps)^2
///   f_y   = -sign(rel_y) * sin(theta) / (dist + eps)^2
///
/// Since cos(theta) = |rel_x| / dist and sin(theta) = |rel_y| / dist (up to
/// the eps guard), this reproduces -rel_hat / (dist + eps)^2. The eps terms
/// keep both the angle and the magnitude finite when a coordinate or the
/// whole separation is exactly zero; no branching is involved.
fn pair_force(rel: NVec2, eps: f64) -> NVec2 {
    let dist = rel.norm();
    let theta = (rel.y.abs() / (rel.x.abs() + eps)).atan();
    let inv_d2 = 1.0 / ((dist + eps) * (dist + eps));

    NVec2::new(
        -sign(rel.x) * theta.cos() * inv_d2,
        -sign(rel.y) * theta.sin() * inv_d2,
    )
}

/// Newtonian gravity between the fixed central star and the two planets.
///
/// All constants are captured once at construction from [`Parameters`];
/// the derivative methods are pure functions of their arguments after that.
#[derive(Debug, Clone)]
pub struct TwoPlanetGravity {
    m_earth: f64,   // earth / star mass ratio
    m_jupiter: f64, // jupiter / star mass ratio
    eps: f64,       // guard against zero separations/denominators
    norm_se: f64,   // star-earth force normalization
    norm_sj: f64,   // star-jupiter force normalization
    norm_ej: f64,   // earth-jupiter force normalization
}

impl TwoPlanetGravity {
    /// Derive the three pairwise normalization constants from the base
    /// constant and the mass ratios (the star's own ratio is 1)
    pub fn new(p: &Parameters) -> Self {
        Self {
            m_earth: p.m_earth,
            m_jupiter: p.m_jupiter,
            eps: p.eps,
            norm_se: p.g_norm * p.m_earth,
            norm_sj: p.g_norm * p.m_jupiter,
            norm_ej: p.g_norm * p.m_earth * p.m_jupiter,
        }
    }

    /// dr/dt: the position derivative is the velocity, unchanged.
    /// The position argument is kept for a uniform derivative signature.
    pub fn position_derivative(&self, _r: &NVec4, v: &NVec4) -> NVec4 {
        *v
    }

    /// dv/dt: accelerations of both planets from pairwise gravity.
    /// The velocity argument is unused by the force law; it is kept for a
    /// uniform derivative signature.
    pub fn acceleration(&self, r: &NVec4, _v: &NVec4) -> NVec4 {
        // Relative position vectors: star->earth, star->jupiter,
        // earth->jupiter (star sits at the origin)
        let r_se = earth_part(r);
        let r_sj = jupiter_part(r);
        let r_ej = r_sj - r_se;

        // Per-pair unit forces, each pointing from the second body of the
        // pair back toward the first, scaled by the pair's normalization:
        //   f_se pulls earth toward the star
        //   f_sj pulls jupiter toward the star
        //   f_ej points from jupiter toward earth
        let f_se = self.norm_se * pair_force(r_se, self.eps);
        let f_sj = self.norm_sj * pair_force(r_sj, self.eps);
        let f_ej = self.norm_ej * pair_force(r_ej, self.eps);

        // Net force per planet. The earth-jupiter term is one internal
        // force acting on both bodies (Newton's third law): as computed it
        // pulls jupiter toward earth, so it enters jupiter's sum with + and
        // earth's with - (earth is pulled the opposite way, toward jupiter).
        // Dividing by each body's own mass ratio turns force into
        // acceleration.
        let a_e = (f_se - f_ej) / self.m_earth;
        let a_j = (f_sj + f_ej) / self.m_jupiter;

        pack(a_e, a_j)
    }
}
