//! Narrow phase overlap tests
//!
//! Every test returns a [`Contact`] whose axis points from the first
//! collider toward the second. Touching shapes (zero overlap) are not in
//! contact.

use super::primitives::{Aabb, Circle, OrientedRect};
use super::Contact;
use crate::foundation::math::Vec2;

/// Overlap of two intervals on one axis, `<= 0` when they are separated
fn interval_overlap((min_a, max_a): (f32, f32), (min_b, max_b): (f32, f32)) -> f32 {
    (max_a - min_b).min(max_b - min_a)
}

/// Flip `axis` so it points along `delta`
fn orient(axis: Vec2, delta: Vec2) -> Vec2 {
    if axis.dot(&delta) < 0.0 {
        -axis
    } else {
        axis
    }
}

/// Separating axis test for two oriented rectangles
///
/// Axes are tried in the order A.u, A.v, B.u, B.v. The first separating
/// axis ends the test; otherwise the smallest overlap wins and ties keep the
/// earlier axis.
pub fn sat_overlap(a: &OrientedRect, b: &OrientedRect) -> Option<Contact> {
    let mut best: Option<(f32, Vec2)> = None;

    for axis in a.axes().into_iter().chain(b.axes()) {
        let overlap = interval_overlap(a.project(axis), b.project(axis));
        if overlap <= 0.0 {
            return None;
        }
        if best.map_or(true, |(depth, _)| overlap < depth) {
            best = Some((overlap, axis));
        }
    }

    let (depth, axis) = best?;
    Some(Contact {
        axis: orient(axis, b.center - a.center),
        depth,
    })
}

/// Overlap of two axis-aligned boxes; x wins ties
pub fn aabb_overlap(a: &Aabb, b: &Aabb) -> Option<Contact> {
    let overlap_x = interval_overlap((a.min.x, a.max.x), (b.min.x, b.max.x));
    if overlap_x <= 0.0 {
        return None;
    }
    let overlap_y = interval_overlap((a.min.y, a.max.y), (b.min.y, b.max.y));
    if overlap_y <= 0.0 {
        return None;
    }

    let delta = b.center() - a.center();
    let (axis, depth) = if overlap_x <= overlap_y {
        (Vec2::new(1.0, 0.0), overlap_x)
    } else {
        (Vec2::new(0.0, 1.0), overlap_y)
    };

    Some(Contact {
        axis: orient(axis, delta),
        depth,
    })
}

/// Overlap of two circles
///
/// Coincident centers resolve along `+x`.
pub fn circle_overlap(a: &Circle, b: &Circle) -> Option<Contact> {
    let delta = b.center - a.center;
    let distance = delta.norm();
    let reach = a.radius + b.radius;
    if distance >= reach {
        return None;
    }

    let axis = if distance > 0.0 {
        delta / distance
    } else {
        Vec2::new(1.0, 0.0)
    };

    Some(Contact {
        axis,
        depth: reach - distance,
    })
}
