#![forbid(unsafe_code)]

pub mod error;
pub mod field;
pub mod node;
pub mod point;
pub mod sampler;
