// src/config/mod.rs

pub mod parameters;
pub mod scenario;

pub use parameters::PemCoefficients;
pub use scenario::Scenario;
