//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies sampled at t = 0)
//! - active force set (`AccelSet`)
//!
//! Initial conditions are drawn from an explicitly passed `fastrand::Rng`,
//! so a seeded scenario reproduces exactly and tests can assert on it.

use anyhow::Result;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, System, NVec2};

/// Half-width of the default symmetric range initial velocity
/// components are drawn from, when the config does not override it.
const DEFAULT_V_INIT: f64 = 0.5;

/// A fully-initialized runtime scenario
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]:
/// it contains the parameters, current system state, and the set of active
/// force laws (accelerations). The driver loops `step` over it and reads
/// `system.snapshot()` between steps.
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
}

impl Scenario {
    /// Validate `cfg` and build the runtime bundle, sampling all bodies.
    ///
    /// Fails only on configuration errors (see
    /// [`ParametersConfig::validate`](crate::configuration::config::ParametersConfig::validate)).
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        let p_cfg = cfg.parameters;
        p_cfg.validate()?;

        // Parameters (runtime) from ParametersConfig
        let parameters = Parameters {
            n: p_cfg.n,
            t_end: p_cfg.t_end,
            h0: p_cfg.h0,
            G: p_cfg.G,
            half_extent: p_cfg.half_extent,
            restitution: p_cfg.restitution,
            m_min: p_cfg.m_min,
            m_max: p_cfg.m_max,
            radius_mult: p_cfg.radius_mult,
            v_init: p_cfg.v_init.unwrap_or(DEFAULT_V_INIT),
            seed: p_cfg.seed,
        };

        // Seeded rng when the config asks for reproducibility,
        // entropy-seeded otherwise
        let mut rng = match parameters.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };

        // Initial system state: bodies at t = 0
        let system = init_system(&parameters, &mut rng);

        // Forces: construct an AccelSet and register Newtonian gravity
        let forces = AccelSet::new().with(NewtonianGravity { G: parameters.G });

        Ok(Self {
            parameters,
            system,
            forces,
        })
    }
}

/// Sample `params.n` bodies from `rng`:
/// - mass uniform in `[m_min, m_max]`, radius derived as `m * radius_mult`
/// - position uniform in the arena inset by the body's own radius
///   (initial overlaps between bodies are permitted)
/// - velocity components uniform in `[-v_init, v_init]`
pub fn init_system(params: &Parameters, rng: &mut fastrand::Rng) -> System {
    let mut bodies = Vec::with_capacity(params.n);

    for _ in 0..params.n {
        let m = uniform(rng, params.m_min, params.m_max);
        let radius = m * params.radius_mult;

        // Inset by radius keeps the whole circle inside the walls;
        // validate() guarantees span > 0 for the largest possible mass
        let span = params.half_extent - radius;
        let x = NVec2::new(uniform(rng, -span, span), uniform(rng, -span, span));
        let v = NVec2::new(
            uniform(rng, -params.v_init, params.v_init),
            uniform(rng, -params.v_init, params.v_init),
        );

        bodies.push(Body { x, v, m, radius });
    }

    System { bodies, t: 0.0 }
}

fn uniform(rng: &mut fastrand::Rng, lo: f64, hi: f64) -> f64 {
    lo + rng.f64() * (hi - lo)
}
