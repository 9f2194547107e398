// src/models/forcing.rs

use log::warn;

use crate::math::error::ResponseError;

/// 区分線形の荷重履歴
#[derive(Debug, Clone, PartialEq)]
pub struct LoadHistory {
    breakpoints: Vec<[f64; 2]>, // [時刻 (s), 荷重 (N)]、時刻は単調増加
}

impl LoadHistory {
    /// 折れ点から荷重履歴を作成する
    ///
    /// # 引数
    /// - `breakpoints`: [時刻, 荷重] の列。時刻は単調増加であること
    ///
    /// # 戻り値
    /// - 荷重履歴。時刻が単調増加でない、または非有限値を含む場合は `InvalidInput`
    pub fn new(breakpoints: Vec<[f64; 2]>) -> Result<Self, ResponseError> {
        if let Some(i) = breakpoints
            .iter()
            .position(|p| !(p[0].is_finite() && p[1].is_finite()))
        {
            return Err(ResponseError::InvalidInput(format!(
                "荷重の折れ点 {} に非有限値が含まれています",
                i
            )));
        }
        if let Some(i) = breakpoints.windows(2).position(|w| w[1][0] <= w[0][0]) {
            return Err(ResponseError::InvalidInput(format!(
                "荷重の折れ点 {} と {} の時刻が単調増加ではありません",
                i,
                i + 1
            )));
        }
        Ok(Self { breakpoints })
    }

    /// 荷重が定義されている最終時刻
    pub fn end_time(&self) -> Option<f64> {
        self.breakpoints.last().map(|p| p[0])
    }

    /// 指定時刻の荷重（折れ点間は線形補間、定義範囲外は 0）
    pub fn force_at(&self, time: f64) -> f64 {
        let (first, last) = match (self.breakpoints.first(), self.breakpoints.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return 0.0,
        };
        if time < first[0] || time > last[0] {
            return 0.0;
        }
        // time 以上の時刻を持つ最初の折れ点
        let upper = self.breakpoints.partition_point(|p| p[0] < time);
        let p1 = self.breakpoints[upper];
        if upper == 0 || p1[0] == time {
            return p1[1];
        }
        let p0 = self.breakpoints[upper - 1];
        let ratio = (time - p0[0]) / (p1[0] - p0[0]);
        p0[1] + ratio * (p1[1] - p0[1])
    }

    /// 時刻列上で荷重をサンプリングする
    pub fn sample(&self, times: &[f64]) -> Vec<f64> {
        if let (Some(end), Some(&last)) = (self.end_time(), times.last()) {
            if end > last {
                warn!(
                    "荷重は {} s まで定義されていますが、解析は {} s で終了します",
                    end, last
                );
            }
        }
        times.iter().map(|&t| self.force_at(t)).collect()
    }
}
