pub mod deploy;
pub mod dist;
pub mod metrics;
pub mod range;
pub mod solver;
pub mod strategy;
