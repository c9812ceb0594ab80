//! Real-valued deck coordinates.
//!
//! All positions are in millimetres, double precision.  Channel alignment is
//! checked against tolerances down to `1e-5` mm.

use std::ops::{Add, Div, Mul, Neg, Sub};

// ── Coordinates2D ─────────────────────────────────────────────────────────────

/// A point or offset in the deck's XY plane.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinates2D {
    pub x: f64,
    pub y: f64,
}

impl Coordinates2D {
    pub const ZERO: Coordinates2D = Coordinates2D { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length of the vector.
    #[inline]
    pub fn abs(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// `true` if every component of `self` lies in `[lo - tol, hi + tol]`.
    #[inline]
    pub fn within(self, lo: Coordinates2D, hi: Coordinates2D, tol: f64) -> bool {
        self.x >= lo.x - tol
            && self.x <= hi.x + tol
            && self.y >= lo.y - tol
            && self.y <= hi.y + tol
    }

    #[inline]
    pub fn to_3d(self, z: f64) -> Coordinates3D {
        Coordinates3D::new(self.x, self.y, z)
    }
}

impl Add for Coordinates2D {
    type Output = Coordinates2D;
    #[inline]
    fn add(self, rhs: Coordinates2D) -> Coordinates2D {
        Coordinates2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coordinates2D {
    type Output = Coordinates2D;
    #[inline]
    fn sub(self, rhs: Coordinates2D) -> Coordinates2D {
        Coordinates2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Coordinates2D {
    type Output = Coordinates2D;
    #[inline]
    fn mul(self, rhs: f64) -> Coordinates2D {
        Coordinates2D::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Coordinates2D {
    type Output = Coordinates2D;
    #[inline]
    fn div(self, rhs: f64) -> Coordinates2D {
        Coordinates2D::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Coordinates2D {
    type Output = Coordinates2D;
    #[inline]
    fn neg(self) -> Coordinates2D {
        Coordinates2D::new(-self.x, -self.y)
    }
}

impl std::fmt::Display for Coordinates2D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

// ── Coordinates3D ─────────────────────────────────────────────────────────────

/// A point or offset in deck space; `z` grows upward from the deck surface.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinates3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Coordinates3D {
    pub const ZERO: Coordinates3D = Coordinates3D { x: 0.0, y: 0.0, z: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn abs(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Drop the `z` component.
    #[inline]
    pub fn to_2d(self) -> Coordinates2D {
        Coordinates2D::new(self.x, self.y)
    }
}

impl Add for Coordinates3D {
    type Output = Coordinates3D;
    #[inline]
    fn add(self, rhs: Coordinates3D) -> Coordinates3D {
        Coordinates3D::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Coordinates3D {
    type Output = Coordinates3D;
    #[inline]
    fn sub(self, rhs: Coordinates3D) -> Coordinates3D {
        Coordinates3D::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Coordinates3D {
    type Output = Coordinates3D;
    #[inline]
    fn mul(self, rhs: f64) -> Coordinates3D {
        Coordinates3D::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<f64> for Coordinates3D {
    type Output = Coordinates3D;
    #[inline]
    fn div(self, rhs: f64) -> Coordinates3D {
        Coordinates3D::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl std::fmt::Display for Coordinates3D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}
