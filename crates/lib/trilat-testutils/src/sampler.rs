use std::collections::VecDeque;

use trilat_core::sampler::Sampler;

/// Always returns the centre of the requested interval. With this sampler noisy ranges
/// equal the true ranges.
#[derive(Default, Clone, Debug)]
pub struct MidpointSampler {
    pub calls: usize,
}

impl Sampler for MidpointSampler {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        self.calls += 1;
        low + (high - low) / 2.0
    }
}

/// Replays a script of fractions in `[0, 1]`, mapping each onto the requested interval.
/// Once the script runs out the last fraction is repeated. Every requested interval is
/// recorded in `requests`.
#[derive(Default, Clone, Debug)]
pub struct ScriptedSampler {
    script: VecDeque<f64>,
    last: f64,
    pub requests: Vec<(f64, f64)>,
}

impl ScriptedSampler {
    pub fn new(fractions: &[f64]) -> Self {
        Self {
            script: fractions.iter().copied().collect(),
            last: 0.5,
            requests: Vec::new(),
        }
    }
}

impl Sampler for ScriptedSampler {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        self.requests.push((low, high));
        if let Some(next) = self.script.pop_front() {
            self.last = next;
        }
        low + (high - low) * self.last
    }
}
