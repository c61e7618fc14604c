//! Fixed-step time integration for the arena system
//!
//! Provides the single semi-implicit Euler step that composes gravity,
//! collision resolution and wall containment in a fixed order, driven by
//! `AccelSet` and `Parameters`

use super::boundary::enforce_walls;
use super::collisions::resolve_collisions;
use super::forces::AccelSet;
use super::params::Parameters;
use super::states::{System, NVec2};

/// Advance the system by one step of `params.h0` using semi-implicit Euler.
///
/// The pass order is fixed:
/// 1. accumulate accelerations for ALL pairs from start-of-step positions,
///    then kick velocities: `v += a * dt`
/// 2. resolve pairwise collisions (positions still at start-of-step values)
/// 3. drift positions with the updated velocities: `x += v * dt`
/// 4. clamp and bounce against the arena walls
///
/// Updates positions, velocities, and `sys.t` in-place.
pub fn step(sys: &mut System, forces: &AccelSet, params: &Parameters) {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return;
    }

    let dt = params.h0; // time step dt

    // Allocate a vector of accelerations, one per body, initialized to zero.
    // Every pair is accumulated into this buffer before any body is touched,
    // so no partial-step state leaks between pairs
    let mut accels = vec![NVec2::zeros(); n];
    forces.accumulate_accels(sys.t, &*sys, &mut accels);

    // Kick: v_n+1 = v_n + dt * a_n
    for (b, a) in sys.bodies.iter_mut().zip(accels.iter()) {
        b.v += dt * *a;
    }

    // Overlapping pairs separate and exchange normal velocity components,
    // evaluated at the same positions the forces were
    resolve_collisions(sys);

    // Drift: x_n+1 = x_n + dt * v_n+1
    for b in sys.bodies.iter_mut() {
        b.x += dt * b.v;
    }

    // Anything that drifted through a wall gets clamped and reflected
    enforce_walls(sys, params);

    // Increment the system time by one full step
    sys.t += dt;

    assert_finite(sys);
}

/// Non-finite state is an invariant violation under valid configuration.
/// Surface it here with the offending body instead of letting NaN reach
/// the rendering side.
fn assert_finite(sys: &System) {
    for (i, b) in sys.bodies.iter().enumerate() {
        let ok = b.x.x.is_finite()
            && b.x.y.is_finite()
            && b.v.x.is_finite()
            && b.v.y.is_finite();
        assert!(
            ok,
            "body {} diverged to a non-finite state at t = {}: x = {:?}, v = {:?}",
            i, sys.t, b.x, b.v
        );
    }
}
