use log::trace;

use trilat_core::point::Point2D;
use trilat_core::sampler::Sampler;

/// Relative range error. A true distance `d` is measured as a value drawn uniformly from
/// `[d * (1 - p), d * (1 + p)]` where `p` is the noise percentage over 100.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RangeNoise {
    percent: u32,
}

impl RangeNoise {
    pub fn new(percent: u32) -> Self {
        Self { percent }
    }

    pub fn window(&self, distance: f64) -> (f64, f64) {
        let spread = distance * (f64::from(self.percent) / 100.0);
        (distance - spread, distance + spread)
    }

    pub fn perturb<S: Sampler>(&self, distance: f64, sampler: &mut S) -> f64 {
        let (low, high) = self.window(distance);
        sampler.uniform(low, high)
    }
}

/// Noisy ranging limited by the communication radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeModel {
    noise: RangeNoise,
    radius: f64,
}

impl RangeModel {
    pub fn new(noise: RangeNoise, radius: f64) -> Self {
        Self { noise, radius }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn noise(&self) -> RangeNoise {
        self.noise
    }

    /// Takes one noisy measurement between the two points. Returns `None` when the
    /// measured value exceeds the radius; the draw is consumed either way.
    pub fn measure<S: Sampler>(
        &self,
        from: &Point2D,
        to: &Point2D,
        sampler: &mut S,
    ) -> Option<f64> {
        let measured = self.noise.perturb(from.distance_to(to), sampler);
        if measured <= self.radius {
            Some(measured)
        } else {
            trace!("Measured range {} is beyond radius {}", measured, self.radius);
            None
        }
    }
}
