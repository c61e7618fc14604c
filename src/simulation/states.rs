//! Core state types for the arena simulation.
//!
//! Defines the body/system structs:
//! - `Body` using `NVec2`
//! - `System` holding the list of bodies and the current simulation time `t`
//!
//! The system is the single mutable store: the stepper writes it in place
//! and the rendering side reads it through `snapshot`.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub m: f64, // mass, fixed at creation
    pub radius: f64, // radius, derived from mass at creation
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies, creation order
    pub t: f64, // time
}

impl System {
    /// Read-only copy of every body's state, in creation order.
    ///
    /// Returns owned clones so the rendering side never holds an alias
    /// into the store while the stepper mutates it.
    pub fn snapshot(&self) -> Vec<Body> {
        self.bodies.clone()
    }
}
