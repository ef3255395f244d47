//! World-space collider primitives
//!
//! Plain geometry with no entity knowledge. Built fresh from an entity's
//! transform for every test by [`super::world_collider`].

use crate::foundation::math::{constants, utils, Vec2};

/// Rectangle rotated about its center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedRect {
    /// Center in world space
    pub center: Vec2,
    /// Half width along `u` and half height along `v`
    pub half_extents: Vec2,
    /// Rotation in degrees
    pub angle: f32,
    /// Local x axis, `(cos θ, sin θ)`
    pub u: Vec2,
    /// Local y axis, `(-sin θ, cos θ)`
    pub v: Vec2,
}

impl OrientedRect {
    /// Build a rectangle from center, half extents and a rotation in degrees
    pub fn new(center: Vec2, half_extents: Vec2, angle: f32) -> Self {
        let (sin, cos) = utils::deg_to_rad(angle).sin_cos();
        Self {
            center,
            half_extents,
            angle,
            u: Vec2::new(cos, sin),
            v: Vec2::new(-sin, cos),
        }
    }

    /// Whether the local axes line up with the world axes
    ///
    /// Tested with `sin`, so 0° and 180° qualify but 90° does not.
    pub fn is_axis_aligned(&self) -> bool {
        self.u.y.abs() < constants::AXIS_ALIGNED_EPSILON
    }

    /// Candidate separating axes in SAT order
    pub fn axes(&self) -> [Vec2; 2] {
        [self.u, self.v]
    }

    /// Corners, counter-clockwise from `(+u, +v)`
    pub fn corners(&self) -> [Vec2; 4] {
        let du = self.u * self.half_extents.x;
        let dv = self.v * self.half_extents.y;
        [
            self.center + du + dv,
            self.center - du + dv,
            self.center - du - dv,
            self.center + du - dv,
        ]
    }

    /// Interval covered on a unit axis
    pub fn project(&self, axis: Vec2) -> (f32, f32) {
        let c = self.center.dot(&axis);
        let r = self.half_extents.x * self.u.dot(&axis).abs()
            + self.half_extents.y * self.v.dot(&axis).abs();
        (c - r, c + r)
    }

    /// Box spanned by the rectangle when it is axis aligned
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center(self.center, self.half_extents)
    }

    /// Circle through the corners
    pub fn bounding_circle(&self) -> Circle {
        Circle::new(self.center, self.half_extents.x.hypot(self.half_extents.y))
    }
}

/// Circle collider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Center in world space
    pub center: Vec2,
    /// Radius
    pub radius: f32,
}

impl Circle {
    /// Create a circle
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Lower-left corner
    pub min: Vec2,
    /// Upper-right corner
    pub max: Vec2,
}

impl Aabb {
    /// Box from center and half extents
    pub fn from_center(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Box center
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }
}
