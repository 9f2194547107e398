// src/models/mod.rs

pub mod forcing;
pub mod time_grid;

pub use forcing::LoadHistory;
