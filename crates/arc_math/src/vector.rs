//! 2D and 3D Cartesian vectors.
//!
//! Spherical conversions use the physics convention: `theta` is the
//! azimuth measured in the x-y plane from +x toward +y, `phi` is the polar
//! angle measured from +z. All angles are in radians.

use std::ops::{Add, Mul, Neg, Sub};

/// A 2D Cartesian vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// z-component of the 3D cross product of the two vectors embedded in
    /// the x-y plane.
    pub fn cross(&self, other: &Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Euclidean length.
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Unit vector in the same direction. The zero vector stays zero.
    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag == 0.0 { *self } else { *self * (1.0 / mag) }
    }

    /// Rotate counter-clockwise by `angle` radians.
    pub fn rotate(&self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Unsigned angle between two vectors in radians, [0, π].
    pub fn angle_between(&self, other: &Self) -> f64 {
        clamped_acos(self.dot(other) / (self.magnitude() * other.magnitude()))
    }

    /// Vector projection of `self` onto `onto`.
    pub fn project_onto(&self, onto: &Self) -> Self {
        *onto * (self.dot(onto) / onto.dot(onto))
    }

    /// Polar coordinates `(r, theta)`.
    pub fn to_polar(&self) -> (f64, f64) {
        (self.magnitude(), self.y.atan2(self.x))
    }

    pub fn from_polar(r: f64, theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self::new(r * cos, r * sin)
    }
}

impl Add for Vector2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;
    fn mul(self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s)
    }
}

impl Neg for Vector2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

/// A 3D Cartesian vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub const fn x_axis() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    pub const fn y_axis() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    pub const fn z_axis() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product.
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn magnitude(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction. The zero vector stays zero.
    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag == 0.0 { *self } else { *self * (1.0 / mag) }
    }

    /// Rotate about the +x axis by `angle` radians (right-hand rule).
    pub fn rotate_x(&self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(
            self.x,
            self.y * cos - self.z * sin,
            self.y * sin + self.z * cos,
        )
    }

    /// Rotate about the +y axis by `angle` radians (right-hand rule).
    pub fn rotate_y(&self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(
            self.z * sin + self.x * cos,
            self.y,
            self.z * cos - self.x * sin,
        )
    }

    /// Rotate about the +z axis by `angle` radians (right-hand rule).
    pub fn rotate_z(&self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(
            self.x * cos - self.y * sin,
            self.x * sin + self.y * cos,
            self.z,
        )
    }

    /// Rotate about an arbitrary axis by `angle` radians (Rodrigues).
    ///
    /// `axis` must be a unit vector.
    pub fn rotate_about(&self, axis: &Self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        let k = 1.0 - cos;
        let Self { x, y, z } = *axis;
        Self::new(
            (cos + k * x * x) * self.x + (k * x * y - sin * z) * self.y + (k * x * z + sin * y) * self.z,
            (k * x * y + sin * z) * self.x + (cos + k * y * y) * self.y + (k * y * z - sin * x) * self.z,
            (k * x * z - sin * y) * self.x + (k * y * z + sin * x) * self.y + (cos + k * z * z) * self.z,
        )
    }

    /// Unsigned angle between two vectors in radians, [0, π].
    ///
    /// Also the angle between two planes given their normals.
    pub fn angle_between(&self, other: &Self) -> f64 {
        clamped_acos(self.dot(other) / (self.magnitude() * other.magnitude()))
    }

    /// Vector projection of `self` onto `onto`.
    pub fn project_onto(&self, onto: &Self) -> Self {
        *onto * (self.dot(onto) / onto.dot(onto))
    }

    /// Distance from this point to the plane `normal · p = d`.
    pub fn distance_to_plane(&self, normal: &Self, d: f64) -> f64 {
        (self.dot(normal) - d).abs() / normal.magnitude()
    }

    /// Cylindrical coordinates `(r, theta, z)`.
    pub fn to_cylindrical(&self) -> (f64, f64, f64) {
        (self.x.hypot(self.y), self.y.atan2(self.x), self.z)
    }

    pub fn from_cylindrical(r: f64, theta: f64, z: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self::new(r * cos, r * sin, z)
    }

    /// Spherical coordinates `(r, theta, phi)`.
    ///
    /// The zero vector maps to `(0, 0, 0)`.
    pub fn to_spherical(&self) -> (f64, f64, f64) {
        let r = self.magnitude();
        if r == 0.0 {
            return (0.0, 0.0, 0.0);
        }
        (r, self.y.atan2(self.x), clamped_acos(self.z / r))
    }

    pub fn from_spherical(r: f64, theta: f64, phi: f64) -> Self {
        let (sin_t, cos_t) = theta.sin_cos();
        let (sin_p, cos_p) = phi.sin_cos();
        Self::new(r * sin_p * cos_t, r * sin_p * sin_t, r * cos_p)
    }
}

impl Add for Vector3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Self;
    fn mul(self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }
}

impl Neg for Vector3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

// Rounding can push a unit-vector dot product just past ±1.
fn clamped_acos(c: f64) -> f64 {
    c.clamp(-1.0, 1.0).acos()
}
