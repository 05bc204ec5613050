//! Closed-form trilateration in the plane.
//!
//! Subtracting the circle equations of references 1-2 and 2-3 gives two linear
//! equations in `x` and `y`, which are eliminated directly. The solver does not look for
//! collinear references: a zero denominator produces infinite or NaN coordinates, and
//! [`localization_error`] turns those into an infinite error.

use trilat_core::point::Point2D;

/// A reference position together with the measured range to it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub centre: Point2D,
    pub radius: f64,
}

impl Circle {
    pub fn new(centre: Point2D, radius: f64) -> Self {
        Self { centre, radius }
    }
}

pub fn trilaterate(circles: &[Circle; 3]) -> Point2D {
    let (i1, j1, d1) = (circles[0].centre.x, circles[0].centre.y, circles[0].radius);
    let (i2, j2, d2) = (circles[1].centre.x, circles[1].centre.y, circles[1].radius);
    let (i3, j3, d3) = (circles[2].centre.x, circles[2].centre.y, circles[2].radius);

    let a = (d1 * d1 - d2 * d2) + (i2 * i2 - i1 * i1) + (j2 * j2 - j1 * j1);
    let b = (d2 * d2 - d3 * d3) + (i3 * i3 - i2 * i2) + (j3 * j3 - j2 * j2);
    let denominator = (2.0 * i2 - 2.0 * i3) * (2.0 * j2 - 2.0 * j1)
        - (2.0 * i1 - 2.0 * i2) * (2.0 * j3 - 2.0 * j2);

    let x = ((2.0 * j3 - 2.0 * j2) * a - (2.0 * j2 - 2.0 * j1) * b) / denominator;
    let y = (a + x * (2.0 * i1 - 2.0 * i2)) / (2.0 * j2 - 2.0 * j1);
    Point2D::new(x, y)
}

/// Distance between the true position and the estimate. A non-finite estimate has an
/// infinite error.
pub fn localization_error(truth: &Point2D, estimate: &Point2D) -> f64 {
    if !estimate.is_finite() {
        return f64::INFINITY;
    }
    truth.distance_to(estimate)
}
