/// Source of every random draw in a simulation run.
///
/// All randomness of a run flows through a single sampler so that the order of draws is
/// fixed by the order of the calls. Implement this for seeded generators in the
/// simulation and for scripted sequences in tests.
pub trait Sampler {
    /// Returns a value drawn uniformly from the closed interval `[low, high]`.
    fn uniform(&mut self, low: f64, high: f64) -> f64;
}

impl<S: Sampler + ?Sized> Sampler for &mut S {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        (**self).uniform(low, high)
    }
}
