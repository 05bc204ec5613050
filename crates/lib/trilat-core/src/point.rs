use std::fmt;

use serde::Deserialize;

/// A location in the plane of the sensor field.
#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Point2D {
    fn from(f: (f64, f64)) -> Self {
        Self { x: f.0, y: f.1 }
    }
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between the two points.
    pub fn distance_to(&self, other: &Point2D) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::Point2D;

    #[test]
    fn test_distance_is_symmetric() {
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(3.0, 4.0);
        assert_eq!(a.distance_to(&b), 5.0);
        assert_eq!(b.distance_to(&a), 5.0);
    }

    #[test]
    fn test_nan_is_not_finite() {
        assert!(!Point2D::new(f64::NAN, 1.0).is_finite());
        assert!(!Point2D::new(1.0, f64::INFINITY).is_finite());
        assert!(Point2D::new(1.0, 2.0).is_finite());
    }
}
