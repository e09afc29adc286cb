use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// Lengths below this are treated as zero when normalizing.
pub const NORMALIZE_EPSILON: f64 = 1e-12;

/// A point or displacement in the shared 2D world frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };
    pub const X: Vec2 = Vec2 { x: 1.0, y: 0.0 };
    pub const Y: Vec2 = Vec2 { x: 0.0, y: 1.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Squared length. Prefer this for comparisons, it skips the square root.
    pub fn magnitude_squared(self) -> f64 {
        self.dot(self)
    }

    pub fn magnitude(self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Unit vector in the same direction, or `None` when the length is
    /// too small for the direction to be meaningful.
    pub fn try_normalize(self) -> Option<Self> {
        let mag = self.magnitude();
        if mag <= NORMALIZE_EPSILON {
            None
        } else {
            Some(self * (1.0 / mag))
        }
    }

    /// Unit vector in the same direction. Returns zero for a zero vector.
    pub fn normalize(self) -> Self {
        self.try_normalize().unwrap_or(Self::ZERO)
    }

    pub fn distance_squared(self, other: Self) -> f64 {
        (self - other).magnitude_squared()
    }

    pub fn distance(self, other: Self) -> f64 {
        (self - other).magnitude()
    }

    /// 90-degree counter-clockwise rotation.
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Removes the component of `self` along the unit vector `axis`,
    /// leaving only the part tangent to it.
    pub fn remove_component_along(self, axis: Self) -> Self {
        self - axis * self.dot(axis)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl Mul<Vec2> for f64 {
    type Output = Vec2;

    fn mul(self, vec: Vec2) -> Vec2 {
        vec * self
    }
}

impl Div<f64> for Vec2 {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for Vec2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_vec2_arithmetic() {
        let v1 = Vec2::new(1.0, 2.0);
        let v2 = Vec2::new(3.0, 4.0);
        assert_eq!(v1 + v2, Vec2::new(4.0, 6.0));
        assert_eq!(v2 - v1, Vec2::new(2.0, 2.0));
        assert_eq!(v1 * 3.0, Vec2::new(3.0, 6.0));
        assert_eq!(3.0 * v1, Vec2::new(3.0, 6.0));
        assert_eq!(v2 / 2.0, Vec2::new(1.5, 2.0));
        assert_eq!(-v1, Vec2::new(-1.0, -2.0));

        let mut acc = v1;
        acc += v2;
        acc -= Vec2::new(1.0, 1.0);
        assert_eq!(acc, Vec2::new(3.0, 5.0));
    }

    #[test]
    fn test_vec2_dot_and_magnitude() {
        let v1 = Vec2::new(1.0, 2.0);
        let v2 = Vec2::new(3.0, 4.0);
        assert!((v1.dot(v2) - 11.0).abs() < EPSILON);
        assert!((v2.magnitude_squared() - 25.0).abs() < EPSILON);
        assert!((v2.magnitude() - 5.0).abs() < EPSILON);
        assert!((v1.distance(v1 + v2) - 5.0).abs() < EPSILON);
        assert!((v1.distance_squared(v1 + v2) - 25.0).abs() < EPSILON);
    }

    #[test]
    fn test_vec2_normalize() {
        let v = Vec2::new(3.0, 4.0);
        let n = v.normalize();
        assert!((n.magnitude() - 1.0).abs() < EPSILON);
        assert!((n.x - 0.6).abs() < EPSILON);
        assert!((n.y - 0.8).abs() < EPSILON);

        assert_eq!(Vec2::ZERO.normalize(), Vec2::ZERO);
        assert!(Vec2::ZERO.try_normalize().is_none());
        assert!(Vec2::new(1e-14, 0.0).try_normalize().is_none());
    }

    #[test]
    fn test_vec2_perpendicular() {
        let v = Vec2::new(3.0, 4.0);
        let perp = v.perpendicular();
        assert_eq!(perp, Vec2::new(-4.0, 3.0));
        assert!(v.dot(perp).abs() < EPSILON);
    }

    #[test]
    fn test_vec2_remove_component_along() {
        let v = Vec2::new(2.0, -3.0);
        let tangent = v.remove_component_along(Vec2::Y);
        assert!((tangent.x - 2.0).abs() < EPSILON);
        assert!(tangent.y.abs() < EPSILON);

        // Diagonal wall normal: the result must be orthogonal to it.
        let n = Vec2::new(1.0, 1.0).normalize();
        let slid = Vec2::new(-1.0, 0.5).remove_component_along(n);
        assert!(slid.dot(n).abs() < EPSILON);
    }
}
