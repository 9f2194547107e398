// src/simulation/mod.rs

pub mod load_parameters;
pub mod csv;
pub mod framework;

use crate::math::ResponseHistory;

/// 1 回の解析結果
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseRun {
    pub times: Vec<f64>,
    pub history: ResponseHistory,
}
