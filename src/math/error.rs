// src/math/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResponseError {
    /// 時刻列・荷重列が前提条件を満たさない
    #[error("入力が不正です: {0}")]
    InvalidInput(String),
    /// 伝達係数が与えられていない、または有限値でない
    #[error("伝達係数が不正です: {0}")]
    MissingCoefficients(String),
}
