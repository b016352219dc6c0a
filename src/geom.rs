//! Geometric primitives used by gesture recognition.
//!
//! Touch input lives in view space ([`ScreenPoint`], [`ScreenVector`]); the
//! viewport manipulator maps it into data space ([`Point`]).

use std::ops::{Add, Sub};

/// A point in data space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X value in data coordinates.
    pub x: f64,
    /// Y value in data coordinates.
    pub y: f64,
}

impl Point {
    /// Create a new data point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A point in view space, relative to the view receiving touches.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScreenPoint {
    /// X value in view units.
    pub x: f64,
    /// Y value in view units.
    pub y: f64,
}

impl ScreenPoint {
    /// The view origin.
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new screen point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Sub for ScreenPoint {
    type Output = ScreenVector;

    fn sub(self, rhs: Self) -> ScreenVector {
        ScreenVector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add<ScreenVector> for ScreenPoint {
    type Output = ScreenPoint;

    fn add(self, rhs: ScreenVector) -> ScreenPoint {
        ScreenPoint::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// A displacement or per-axis factor pair in view space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScreenVector {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
}

impl ScreenVector {
    /// The zero vector.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    /// The identity scale.
    pub const ONE: Self = Self { x: 1.0, y: 1.0 };

    /// Create a new vector.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Create a vector with both components set to `value`.
    pub fn splat(value: f64) -> Self {
        Self { x: value, y: value }
    }

    /// Euclidean length.
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

/// A rectangle in view space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    /// Top-left corner.
    pub min: ScreenPoint,
    /// Bottom-right corner.
    pub max: ScreenPoint,
}

impl ScreenRect {
    /// Create a new screen rectangle from corners.
    pub fn new(min: ScreenPoint, max: ScreenPoint) -> Self {
        Self { min, max }
    }

    /// Rectangle width.
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Rectangle height.
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Check whether the rectangle has positive area.
    pub fn is_valid(&self) -> bool {
        self.width() > 0.0 && self.height() > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_difference_is_vector() {
        let delta = ScreenPoint::new(10.0, 4.0) - ScreenPoint::new(7.0, 8.0);
        assert_eq!(delta, ScreenVector::new(3.0, -4.0));
        assert_eq!(delta.length(), 5.0);
        assert_eq!(ScreenPoint::new(7.0, 8.0) + delta, ScreenPoint::new(10.0, 4.0));
    }

    #[test]
    fn degenerate_rect_is_invalid() {
        let rect = ScreenRect::new(ScreenPoint::new(5.0, 0.0), ScreenPoint::new(5.0, 10.0));
        assert!(!rect.is_valid());
    }
}
