// src/models/time_grid.rs

use crate::math::error::ResponseError;

/// 等間隔の時刻列を生成する
///
/// # 引数
/// - `time_step`: 時間刻み (s)
/// - `steps`: サンプル数
///
/// # 戻り値
/// - `t[i] = i * time_step` の時刻列
pub fn uniform_times(time_step: f64, steps: usize) -> Vec<f64> {
    (0..steps).map(|i| i as f64 * time_step).collect()
}

/// 時刻列が指定の時間刻みで等間隔であることを確認する
///
/// 伝達係数は導出時の時間刻みでのみ有効なため、刻みがずれている場合はエラーとする。
/// 各時刻を `t[0] + i * time_step` と比較し、許容誤差は時刻の大きさに比例させる。
///
/// # 引数
/// - `times`: 確認する時刻列
/// - `time_step`: 時間刻み (s)
/// - `relative_tolerance`: 相対許容誤差
pub fn check_uniform_spacing(
    times: &[f64],
    time_step: f64,
    relative_tolerance: f64,
) -> Result<(), ResponseError> {
    if !(time_step.is_finite() && time_step > 0.0) {
        return Err(ResponseError::InvalidInput(format!(
            "時間刻み {} は正の有限値でなければなりません",
            time_step
        )));
    }
    let start = match times.first() {
        Some(&start) => start,
        None => return Ok(()),
    };
    let misplaced = times.iter().enumerate().position(|(i, &t)| {
        let expected = start + i as f64 * time_step;
        let scale = t.abs().max(start.abs()).max(time_step);
        !((t - expected).abs() <= relative_tolerance * scale)
    });
    match misplaced {
        Some(i) => Err(ResponseError::InvalidInput(format!(
            "t[{}] = {} が等間隔の時刻 {} と一致しません (時間刻み {})",
            i,
            times[i],
            start + i as f64 * time_step,
            time_step
        ))),
        None => Ok(()),
    }
}
