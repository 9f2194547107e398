// src/lib.rs

//! 1自由度線形系の区分厳密法 (Piecewise Exact Method) による応答解析

pub mod config;
pub mod math;
pub mod models;
pub mod simulation;

pub use config::PemCoefficients;
pub use math::{integrate, integrate_with_velocity, ResponseError, ResponseHistory};
