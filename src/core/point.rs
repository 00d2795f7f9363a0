use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Three-component value used for positions, velocities and accelerations
///
/// Every operation returns a new value. `normalize` and `angle_to` follow
/// floating-point convention for zero-length vectors and yield NaN.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn add(self, other: &Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    pub fn subtract(self, other: &Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    pub fn multiply_elementwise(self, other: &Point) -> Point {
        Point::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    pub fn divide_elementwise(self, other: &Point) -> Point {
        Point::new(self.x / other.x, self.y / other.y, self.z / other.z)
    }

    /// Inner product
    pub fn dot(self, other: &Point) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: &Point) -> Point {
        Point::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn scale(self, factor: f64) -> Point {
        Point::new(self.x * factor, self.y * factor, self.z * factor)
    }

    pub fn negate(self) -> Point {
        Point::new(-self.x, -self.y, -self.z)
    }

    pub fn norm_squared(self) -> f64 {
        self.dot(&self)
    }

    pub fn norm(self) -> f64 {
        self.norm_squared().sqrt()
    }

    pub fn normalize(self) -> Point {
        self.scale(1.0 / self.norm())
    }

    /// Angle between the two vectors in radians
    pub fn angle_to(self, other: &Point) -> f64 {
        // clamp guards acos against rounding just outside [-1, 1]
        let cosine = self.dot(other) / (self.norm() * other.norm());
        if cosine.is_nan() {
            return f64::NAN;
        }
        cosine.clamp(-1.0, 1.0).acos()
    }

    pub fn distance_to(self, other: &Point) -> f64 {
        self.subtract(other).norm()
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f64; 3]> for Point {
    fn from(values: [f64; 3]) -> Self {
        Point::new(values[0], values[1], values[2])
    }
}

impl From<Point> for Vector3<f64> {
    fn from(p: Point) -> Self {
        Vector3::new(p.x, p.y, p.z)
    }
}

impl From<Vector3<f64>> for Point {
    fn from(v: Vector3<f64>) -> Self {
        Point::new(v.x, v.y, v.z)
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::add(self, &rhs)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        self.subtract(&rhs)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    fn mul(self, rhs: f64) -> Point {
        self.scale(rhs)
    }
}

impl Div<f64> for Point {
    type Output = Point;
    fn div(self, rhs: f64) -> Point {
        self.scale(1.0 / rhs)
    }
}

impl Neg for Point {
    type Output = Point;
    fn neg(self) -> Point {
        self.negate()
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:.6}, {:.6}, {:.6}]", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_vector_arithmetic() {
        let a = Point::new(1.0, 2.0, 3.0);
        let b = Point::new(4.0, -5.0, 6.0);

        assert_eq!(a + b, Point::new(5.0, -3.0, 9.0));
        assert_eq!(a - b, Point::new(-3.0, 7.0, -3.0));
        assert_eq!(a * 2.0, Point::new(2.0, 4.0, 6.0));
        assert_eq!(-a, Point::new(-1.0, -2.0, -3.0));
        assert_eq!(a.multiply_elementwise(&b), Point::new(4.0, -10.0, 18.0));
        assert_eq!(b.divide_elementwise(&a), Point::new(4.0, -2.5, 2.0));
        assert_eq!(a.dot(&b), 12.0);
    }

    #[test]
    fn test_cross_product_is_orthogonal() {
        let a = Point::new(1.0, 2.0, 3.0);
        let b = Point::new(-2.0, 0.5, 4.0);
        let c = a.cross(&b);

        assert_abs_diff_eq!(c.dot(&a), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c.dot(&b), 0.0, epsilon = 1e-12);
        assert_eq!(Point::new(1.0, 0.0, 0.0).cross(&Point::new(0.0, 1.0, 0.0)), Point::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_norm_and_distance() {
        let a = Point::new(3.0, 4.0, 12.0);
        assert_eq!(a.norm_squared(), 169.0);
        assert_eq!(a.norm(), 13.0);
        assert_abs_diff_eq!(a.normalize().norm(), 1.0, epsilon = 1e-15);
        assert_eq!(a.distance_to(&Point::new(3.0, 4.0, 0.0)), 12.0);
    }

    #[test]
    fn test_angle_to() {
        let x = Point::new(2.0, 0.0, 0.0);
        let y = Point::new(0.0, 5.0, 0.0);
        assert_abs_diff_eq!(x.angle_to(&y), FRAC_PI_2, epsilon = 1e-15);
        assert_abs_diff_eq!(x.angle_to(&x), 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_zero_vector_boundary() {
        let zero = Point::default();
        let n = zero.normalize();
        assert!(n.x.is_nan() && n.y.is_nan() && n.z.is_nan());
        assert!(zero.angle_to(&Point::new(1.0, 0.0, 0.0)).is_nan());
    }
}
