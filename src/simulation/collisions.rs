//! Pairwise collision detection and response
//!
//! Walks every unordered body pair, pushes overlapping circles apart and
//! exchanges the velocity components along the line of centers using the
//! 1-D elastic-collision formula. Tangential components are untouched.
//!
//! The pass is deliberately pairwise and order-dependent: with three or
//! more bodies in simultaneous contact the result is a plausible
//! approximation, not a momentum-and-energy-exact resolution.

use crate::simulation::states::System;

/// Resolve every overlapping pair in `sys` once.
///
/// For a pair whose center distance is below the sum of radii:
/// - both bodies are displaced half the overlap each, symmetrically,
///   so the post-separation distance equals the radius sum exactly
/// - the normal (line-of-centers) velocity components are replaced by
///   `v1n' = ((m1-m2) v1n + 2 m2 v2n) / (m1+m2)` and its mirror
///
/// Pairs with exactly coincident centers have no definable normal and
/// are skipped.
pub fn resolve_collisions(sys: &mut System) {
    let n = sys.bodies.len();

    for i in 0..n {
        for j in (i + 1)..n {
            let delta = sys.bodies[j].x - sys.bodies[i].x;
            let dist2 = delta.dot(&delta);
            let r_sum = sys.bodies[i].radius + sys.bodies[j].radius;

            // Not touching
            if dist2 >= r_sum * r_sum {
                continue;
            }

            let dist = dist2.sqrt();

            // Coincident centers, no normal to separate along
            if dist == 0.0 {
                continue;
            }

            // Unit normal pointing from body i toward body j
            let normal = delta / dist;

            // Symmetric separation: half the overlap each, so the pair
            // ends up exactly tangent
            let overlap = r_sum - dist;
            let push = 0.5 * overlap * normal;
            sys.bodies[i].x -= push;
            sys.bodies[j].x += push;

            let m1 = sys.bodies[i].m;
            let m2 = sys.bodies[j].m;
            let v1 = sys.bodies[i].v;
            let v2 = sys.bodies[j].v;

            // Decompose each velocity into normal and tangential parts
            let v1n = v1.dot(&normal);
            let v2n = v2.dot(&normal);
            let v1t = v1 - v1n * normal;
            let v2t = v2 - v2n * normal;

            // 1-D elastic collision along the normal
            let m_sum = m1 + m2;
            let v1n_post = ((m1 - m2) * v1n + 2.0 * m2 * v2n) / m_sum;
            let v2n_post = ((m2 - m1) * v2n + 2.0 * m1 * v1n) / m_sum;

            // Recombine
            sys.bodies[i].v = v1t + v1n_post * normal;
            sys.bodies[j].v = v2t + v2n_post * normal;
        }
    }
}
