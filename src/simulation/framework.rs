// src/simulation/framework.rs

use std::error::Error;

use log::debug;

use crate::config::parameters::PemCoefficients;
use crate::config::scenario::Scenario;
use crate::math::{integrate_with_velocity, ResponseHistory};
use crate::models::forcing::LoadHistory;
use crate::models::time_grid::uniform_times;
use crate::simulation::ResponseRun;

/// シナリオに従って応答解析を実行する
///
/// # 引数
/// - `coefficients`: シナリオの時間刻みに対応する伝達係数
/// - `scenario`: 時間刻み・サンプル数・荷重の折れ点
///
/// # 戻り値
/// - 時刻列と応答履歴
pub fn run_scenario(
    coefficients: &PemCoefficients,
    scenario: &Scenario,
) -> Result<ResponseRun, Box<dyn Error>> {
    coefficients.validate()?;

    let times = uniform_times(scenario.time_step, scenario.steps);

    let load = LoadHistory::new(scenario.load.clone())?;
    let forces = load.sample(&times);
    debug!(
        "シナリオ: dt = {} s, {} ステップ, 折れ点 {} 個",
        scenario.time_step,
        scenario.steps,
        scenario.load.len()
    );

    let history = integrate_with_velocity(&times, &forces, coefficients)?;
    Ok(ResponseRun { times, history })
}

/// 最大変位（絶対値）とそのインデックス
pub fn peak_displacement(history: &ResponseHistory) -> Option<(usize, f64)> {
    history
        .position
        .iter()
        .enumerate()
        .map(|(i, x)| (i, x.abs()))
        .fold(None, |peak, (i, x)| match peak {
            Some((_, best)) if best >= x => peak,
            _ => Some((i, x)),
        })
}
