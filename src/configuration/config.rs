//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario:
//!
//! - [`ParametersConfig`] – numerical parameters, arena geometry, and
//!   initial-condition sampling ranges
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   n: 12                   # number of bodies
//!   G: 0.05                 # gravitational constant
//!   m_min: 2.0              # mass sampling range, lower bound
//!   m_max: 8.0              # mass sampling range, upper bound
//!   radius_mult: 0.5        # radius = mass * radius_mult
//!   half_extent: 100.0      # arena is [-100, 100] x [-100, 100]
//!   h0: 0.05                # fixed step size
//!   t_end: 60.0             # total simulation time
//!   restitution: 0.9        # wall-normal speed kept per bounce
//!   seed: 42                # optional, deterministic seed
//!   v_init: 0.5             # optional, initial speed range half-width
//! ```
//!
//! The engine then maps this configuration into its internal runtime scenario
//! representation. Range checks live here as well: a config that fails
//! [`ParametersConfig::validate`] is rejected before any body is created,
//! never deferred into the stepping loop.

use anyhow::{ensure, Result};
use serde::Deserialize;

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub n: usize,          // number of bodies
    pub G: f64,            // gravitational constant
    pub m_min: f64,        // mass sampling lower bound
    pub m_max: f64,        // mass sampling upper bound
    pub radius_mult: f64,  // radius per unit mass
    pub half_extent: f64,  // arena half width/height
    pub h0: f64,           // time step size
    pub t_end: f64,        // time end
    pub restitution: f64,  // wall bounce speed retention, in (0, 1]
    pub seed: Option<u64>, // deterministic seed to make runs reproducable
    pub v_init: Option<f64>, // initial velocity component range half-width
}

impl ParametersConfig {
    /// Reject out-of-range values before the run starts.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.n > 0, "body count must be positive, got {}", self.n);
        ensure!(self.G > 0.0, "G must be positive, got {}", self.G);
        ensure!(
            self.m_min > 0.0,
            "mass range lower bound must be positive, got {}",
            self.m_min
        );
        ensure!(
            self.m_min <= self.m_max,
            "mass range is inverted: m_min = {} > m_max = {}",
            self.m_min,
            self.m_max
        );
        ensure!(
            self.radius_mult > 0.0,
            "radius multiplier must be positive, got {}",
            self.radius_mult
        );
        ensure!(
            self.half_extent > 0.0,
            "arena half extent must be positive, got {}",
            self.half_extent
        );
        ensure!(self.h0 > 0.0, "step size must be positive, got {}", self.h0);
        ensure!(
            self.t_end > 0.0,
            "duration must be positive, got {}",
            self.t_end
        );
        ensure!(
            self.restitution > 0.0 && self.restitution <= 1.0,
            "restitution must be in (0, 1], got {}",
            self.restitution
        );
        // The heaviest possible body still has to fit inside the arena
        ensure!(
            self.m_max * self.radius_mult < self.half_extent,
            "largest body radius {} does not fit in arena of half extent {}",
            self.m_max * self.radius_mult,
            self.half_extent
        );
        if let Some(v) = self.v_init {
            ensure!(v >= 0.0, "v_init must be non-negative, got {}", v);
        }
        Ok(())
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // Global numerical and physical parameters
}
