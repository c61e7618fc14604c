//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - integration step size and end time,
//! - arena geometry and wall restitution,
//! - gravitational constant `G`,
//! - initial-condition sampling ranges and random seed

#[derive(Debug, Clone)]
pub struct Parameters {
    pub n: usize, // number of bodies
    pub t_end: f64, // time end
    pub h0: f64, // step size
    pub G: f64, // gravitational constant
    pub half_extent: f64, // arena is the square [-half_extent, half_extent]^2
    pub restitution: f64, // fraction of wall-normal speed kept after a bounce, in (0, 1]
    pub m_min: f64, // lower mass bound for sampling
    pub m_max: f64, // upper mass bound for sampling
    pub radius_mult: f64, // radius = mass * radius_mult
    pub v_init: f64, // initial velocity components drawn from [-v_init, v_init]
    pub seed: Option<u64>, // deterministic seed to make runs reproducable
}
