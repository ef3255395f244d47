//! Math utilities and types
//!
//! Vector aliases over nalgebra plus the angle helpers the simulation uses.
//! Angles are stored in degrees on entities and converted at the trig call.

pub use nalgebra::{Vector2, Vector3};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = 2.0 * PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f32 = 180.0 / PI;

    /// Tolerance used when deciding whether a rotation is axis aligned
    pub const AXIS_ALIGNED_EPSILON: f32 = 1e-6;
}

/// Math utility functions
pub mod utils {
    use super::{constants, Vec2, Vec3};

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * constants::RAD_TO_DEG
    }

    /// Wrap an angle in degrees into `[0, 360)`
    pub fn normalize_degrees(degrees: f32) -> f32 {
        let wrapped = degrees.rem_euclid(360.0);
        // rem_euclid can round up to exactly 360.0 for tiny negative inputs
        if wrapped >= 360.0 {
            0.0
        } else {
            wrapped
        }
    }

    /// Unit direction for an angle in degrees, measured counter-clockwise from +x
    pub fn angle_to_direction(degrees: f32) -> Vec2 {
        let (sin, cos) = deg_to_rad(degrees).sin_cos();
        Vec2::new(cos, sin)
    }

    /// Heading in degrees (`[0, 360)`) of a direction vector
    ///
    /// A zero vector maps to 0 degrees.
    pub fn direction_to_angle(direction: Vec2) -> f32 {
        if direction.x == 0.0 && direction.y == 0.0 {
            return 0.0;
        }
        normalize_degrees(rad_to_deg(direction.y.atan2(direction.x)))
    }

    /// Drop the z component
    pub fn xy(v: &Vec3) -> Vec2 {
        Vec2::new(v.x, v.y)
    }

    /// Clamp a value between min and max
    pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
        if value < min {
            min
        } else if value > max {
            max
        } else {
            value
        }
    }

    /// Linear interpolation
    pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
        a + (b - a) * t
    }

    /// Map `value` from `[from_min, from_max]` onto `[to_min, to_max]`
    ///
    /// Degenerate source ranges map everything to `to_min`.
    pub fn remap(value: f32, from_min: f32, from_max: f32, to_min: f32, to_max: f32) -> f32 {
        let span = from_max - from_min;
        if span == 0.0 {
            return to_min;
        }
        lerp(to_min, to_max, (value - from_min) / span)
    }
}
