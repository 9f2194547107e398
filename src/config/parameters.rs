// src/config/parameters.rs

use std::io::Read;

use serde::Deserialize;

use crate::math::error::ResponseError;

/// PEM 伝達係数
///
/// 変位用 (a, b, c, d) と速度用 (a1, b1, c1, d1) の 8 係数。
/// 特定の時間刻みに対して事前に計算されたもの。
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct PemCoefficients {
    pub a: f64,  // 変位 ← 前ステップの変位
    pub b: f64,  // 変位 ← 前ステップの速度
    pub c: f64,  // 変位 ← 現在の荷重
    pub d: f64,  // 変位 ← 次の荷重
    pub a1: f64, // 速度 ← 前ステップの変位
    pub b1: f64, // 速度 ← 前ステップの速度
    pub c1: f64, // 速度 ← 現在の荷重
    pub d1: f64, // 速度 ← 次の荷重
}

impl PemCoefficients {
    #[allow(clippy::too_many_arguments)]
    pub fn new(a: f64, b: f64, c: f64, d: f64, a1: f64, b1: f64, c1: f64, d1: f64) -> Self {
        Self {
            a,
            b,
            c,
            d,
            a1,
            b1,
            c1,
            d1,
        }
    }

    /// YAML から伝達係数を読み込み、検証する
    ///
    /// # 引数
    /// - `reader`: 8 係数 (a, b, c, d, a1, b1, c1, d1) を含む YAML
    ///
    /// # 戻り値
    /// - 係数の欠落・読み込み失敗・非有限値は `MissingCoefficients`
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ResponseError> {
        let coefficients: PemCoefficients = serde_yaml::from_reader(reader)
            .map_err(|e| ResponseError::MissingCoefficients(e.to_string()))?;
        coefficients.validate()?;
        Ok(coefficients)
    }

    /// 全係数が有限値であることを確認する
    ///
    /// # 戻り値
    /// - 最初に見つかった非有限の係数を `MissingCoefficients` として返す
    pub fn validate(&self) -> Result<(), ResponseError> {
        let named = [
            ("A", self.a),
            ("B", self.b),
            ("C", self.c),
            ("D", self.d),
            ("A1", self.a1),
            ("B1", self.b1),
            ("C1", self.c1),
            ("D1", self.d1),
        ];
        match named.iter().find(|(_, value)| !value.is_finite()) {
            Some((name, value)) => Err(ResponseError::MissingCoefficients(format!(
                "{} = {}",
                name, value
            ))),
            None => Ok(()),
        }
    }
}
