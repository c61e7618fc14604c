pub mod simulation;
pub mod configuration;

pub use simulation::states::{Body, System, NVec2};
pub use simulation::params::Parameters;
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity};
pub use simulation::collisions::resolve_collisions;
pub use simulation::boundary::enforce_walls;
pub use simulation::integrator::step;
pub use simulation::scenario::{init_system, Scenario};

pub use configuration::config::{ParametersConfig, ScenarioConfig};
