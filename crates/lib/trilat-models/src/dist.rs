use rand::SeedableRng;
use rand_distr::{Distribution, Uniform};
use rand_pcg::Pcg64Mcg;

use trilat_core::sampler::Sampler;

/// The seeded generator behind every draw of a simulation.
#[derive(Debug, Clone)]
pub struct RngSampler {
    seed: u64,
    rng: Pcg64Mcg,
}

impl RngSampler {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Sampler for RngSampler {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        if low == high {
            return low;
        }
        Uniform::new_inclusive(low, high).sample(&mut self.rng)
    }
}
