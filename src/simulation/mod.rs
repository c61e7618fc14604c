pub mod states;
pub mod params;
pub mod forces;
pub mod collisions;
pub mod boundary;
pub mod integrator;
pub mod scenario;
