pub mod plan;
pub mod sampler;
