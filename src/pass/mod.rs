//! Password generation.

pub mod charset;
mod generate;
mod policy;

pub use generate::{generate, generate_batch};
pub use policy::{GenerationPolicy, MAX_LENGTH, MIN_LENGTH, PolicyError};
