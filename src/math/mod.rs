// src/math/mod.rs

pub mod integrator;
pub mod error;

pub use integrator::integrate;
pub use integrator::integrate_with_velocity;
pub use integrator::pem_step;
pub use integrator::PemState;
pub use integrator::ResponseHistory;
pub use error::ResponseError;
