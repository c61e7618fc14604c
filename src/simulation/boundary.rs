//! Arena boundary containment
//!
//! Clamps bodies back inside the square `[-L, L]^2` and reflects the
//! wall-normal velocity component, scaled by the restitution factor.

use crate::simulation::params::Parameters;
use crate::simulation::states::System;

/// Keep every body inside the arena.
///
/// Each axis is checked and corrected independently: a body whose edge
/// crosses a wall is clamped tangent to that wall and its velocity
/// component into the wall is reversed and scaled by `restitution`.
/// The perpendicular component is untouched. A body in a corner gets
/// both axes corrected in the same call.
pub fn enforce_walls(sys: &mut System, params: &Parameters) {
    let l = params.half_extent;
    let e = params.restitution;

    for b in sys.bodies.iter_mut() {
        if b.x.x - b.radius < -l {
            b.x.x = -l + b.radius;
            b.v.x = -b.v.x * e;
        } else if b.x.x + b.radius > l {
            b.x.x = l - b.radius;
            b.v.x = -b.v.x * e;
        }

        if b.x.y - b.radius < -l {
            b.x.y = -l + b.radius;
            b.v.y = -b.v.y * e;
        } else if b.x.y + b.radius > l {
            b.x.y = l - b.radius;
            b.v.y = -b.v.y * e;
        }
    }
}
