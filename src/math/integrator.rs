// src/math/integrator.rs

use log::{debug, trace};

use crate::config::parameters::PemCoefficients;
use crate::math::error::ResponseError;

/// PEM 積分器の状態（変位と速度）
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PemState {
    pub position: f64,
    pub velocity: f64,
}

/// 応答履歴
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseHistory {
    pub position: Vec<f64>,
    pub velocity: Vec<f64>,
}

/// PEM 漸化式による 1 ステップの更新
///
/// # 引数
/// - `state`: 前ステップの状態
/// - `coefficients`: 伝達係数
/// - `force`: 現在の荷重 F(n)
/// - `next_force`: 次の荷重 F(n+1)
///
/// # 戻り値
/// - 更新後の状態
pub fn pem_step(
    state: PemState,
    coefficients: &PemCoefficients,
    force: f64,
    next_force: f64,
) -> PemState {
    let k = coefficients;
    PemState {
        position: k.a * state.position + k.b * state.velocity + k.c * force + k.d * next_force,
        velocity: k.a1 * state.position + k.b1 * state.velocity + k.c1 * force + k.d1 * next_force,
    }
}

/// 時刻列と荷重列の前提条件チェック
fn check_inputs(times: &[f64], forces: &[f64]) -> Result<(), ResponseError> {
    if times.is_empty() {
        return Err(ResponseError::InvalidInput("時刻列が空です".to_string()));
    }
    if times.len() != forces.len() {
        return Err(ResponseError::InvalidInput(format!(
            "時刻列 ({}) と荷重列 ({}) の長さが一致しません",
            times.len(),
            forces.len()
        )));
    }
    if let Some(i) = times.iter().position(|t| !t.is_finite()) {
        return Err(ResponseError::InvalidInput(format!(
            "時刻 t[{}] = {} は有限値ではありません",
            i, times[i]
        )));
    }
    if let Some(i) = forces.iter().position(|f| !f.is_finite()) {
        return Err(ResponseError::InvalidInput(format!(
            "荷重 f[{}] = {} は有限値ではありません",
            i, forces[i]
        )));
    }
    if let Some(i) = times.windows(2).position(|w| w[1] <= w[0]) {
        return Err(ResponseError::InvalidInput(format!(
            "時刻列が単調増加ではありません (t[{}] = {}, t[{}] = {})",
            i,
            times[i],
            i + 1,
            times[i + 1]
        )));
    }
    Ok(())
}

/// 変位と速度の応答履歴を計算する
///
/// 初期条件は静止状態 (0, 0)。最終ステップの F(n+1) は 0 とする。
///
/// # 引数
/// - `times`: 等間隔の時刻列
/// - `forces`: 各時刻の荷重
/// - `coefficients`: 時間刻みに対応する伝達係数
///
/// # 戻り値
/// - 入力と同じ長さの変位列・速度列
pub fn integrate_with_velocity(
    times: &[f64],
    forces: &[f64],
    coefficients: &PemCoefficients,
) -> Result<ResponseHistory, ResponseError> {
    coefficients.validate()?;
    check_inputs(times, forces)?;

    let n = forces.len();
    debug!("PEM積分開始: {} ステップ", n);

    let mut history = ResponseHistory {
        position: Vec::with_capacity(n),
        velocity: Vec::with_capacity(n),
    };
    let mut state = PemState::default();

    for (i, &force) in forces.iter().enumerate() {
        // 最終サンプル以降の荷重は 0
        let next_force = forces.get(i + 1).copied().unwrap_or(0.0);
        state = pem_step(state, coefficients, force, next_force);
        trace!(
            "t = {}: x = {}, v = {}",
            times[i],
            state.position,
            state.velocity
        );
        history.position.push(state.position);
        history.velocity.push(state.velocity);
    }

    Ok(history)
}

/// 変位応答を計算する
pub fn integrate(
    times: &[f64],
    forces: &[f64],
    coefficients: &PemCoefficients,
) -> Result<Vec<f64>, ResponseError> {
    integrate_with_velocity(times, forces, coefficients).map(|history| history.position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_coefficients() -> PemCoefficients {
        PemCoefficients::new(1.0, 0.0, 0.5, 0.5, 0.0, 1.0, 0.5, 0.5)
    }

    /// 減衰のある系を想定した係数（値は代表的な大きさのもの）
    fn damped_coefficients() -> PemCoefficients {
        PemCoefficients::new(
            0.9801, 0.0993, 0.0033, 0.0017, -0.3922, 0.9702, 0.0487, 0.0494,
        )
    }

    #[test]
    fn test_pem_step_from_rest() {
        let state = pem_step(PemState::default(), &unit_coefficients(), 1.0, 0.0);
        assert_eq!(state, PemState { position: 0.5, velocity: 0.5 });
    }

    #[test]
    fn test_pem_step_uses_all_terms() {
        let k = PemCoefficients::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0);
        let state = PemState { position: 1.0, velocity: 1.0 };
        let next = pem_step(state, &k, 1.0, 1.0);
        assert_eq!(next.position, 10.0);
        assert_eq!(next.velocity, 26.0);
    }

    #[test]
    fn test_integrate_three_steps() {
        let result = integrate(&[0.0, 1.0, 2.0], &[1.0, 0.0, 0.0], &unit_coefficients()).unwrap();
        assert_eq!(result, vec![0.5, 0.5, 0.5]);
    }

    #[test]
    fn test_integrate_single_sample() {
        let result = integrate(&[0.0], &[5.0], &unit_coefficients()).unwrap();
        assert_eq!(result, vec![2.5]);
    }

    #[test]
    fn test_zero_force_gives_zero_response() {
        let times: Vec<f64> = (0..50).map(|i| i as f64 * 0.1).collect();
        let forces = vec![0.0; 50];
        let result = integrate(&times, &forces, &damped_coefficients()).unwrap();

        assert_eq!(result.len(), 50);
        assert!(result.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_output_length_matches_input() {
        for n in [1usize, 2, 7, 100] {
            let times: Vec<f64> = (0..n).map(|i| i as f64).collect();
            let forces: Vec<f64> = (0..n).map(|i| (i as f64).sin()).collect();
            let history = integrate_with_velocity(&times, &forces, &damped_coefficients()).unwrap();
            assert_eq!(history.position.len(), n);
            assert_eq!(history.velocity.len(), n);
        }
    }

    /// 最終ステップの F(n+1) は 0 で補われる
    #[test]
    fn test_tail_force_is_zero_padded() {
        let k = damped_coefficients();
        let two = integrate(&[0.0, 1.0], &[3.0, -2.0], &k).unwrap();
        let three = integrate(&[0.0, 1.0, 2.0], &[3.0, -2.0, 0.0], &k).unwrap();

        assert_eq!(two[0].to_bits(), three[0].to_bits());
        assert_eq!(two[1].to_bits(), three[1].to_bits());
    }

    #[test]
    fn test_integrate_is_deterministic() {
        let times: Vec<f64> = (0..200).map(|i| i as f64 * 0.01).collect();
        let forces: Vec<f64> = times.iter().map(|t| (3.0 * t).cos()).collect();
        let k = damped_coefficients();

        let first = integrate_with_velocity(&times, &forces, &k).unwrap();
        let second = integrate_with_velocity(&times, &forces, &k).unwrap();

        let bits = |v: &[f64]| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&first.position), bits(&second.position));
        assert_eq!(bits(&first.velocity), bits(&second.velocity));
    }

    #[test]
    fn test_integrate_matches_position_of_history() {
        let times = [0.0, 0.1, 0.2, 0.3];
        let forces = [0.0, 1.0, 2.0, 1.0];
        let k = damped_coefficients();

        let positions = integrate(&times, &forces, &k).unwrap();
        let history = integrate_with_velocity(&times, &forces, &k).unwrap();
        assert_eq!(positions, history.position);
    }

    #[test]
    fn test_velocity_sequence() {
        let k = PemCoefficients::new(1.0, 1.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.5);
        let history = integrate_with_velocity(&[0.0, 1.0, 2.0], &[2.0, 0.0, 0.0], &k).unwrap();

        // v: 2.0, 2.0, 2.0 / x: 0.0, 2.0, 4.0
        assert_relative_eq!(history.velocity[0], 2.0);
        assert_relative_eq!(history.velocity[2], 2.0);
        assert_relative_eq!(history.position[1], 2.0);
        assert_relative_eq!(history.position[2], 4.0);
    }

    #[test]
    fn test_mismatched_lengths() {
        let result = integrate(&[0.0, 1.0, 2.0], &[1.0, 0.0], &unit_coefficients());
        assert!(matches!(result, Err(ResponseError::InvalidInput(_))));
    }

    #[test]
    fn test_empty_input() {
        let result = integrate(&[], &[], &unit_coefficients());
        assert!(matches!(result, Err(ResponseError::InvalidInput(_))));
    }

    #[test]
    fn test_non_finite_force() {
        let result = integrate(&[0.0, 1.0], &[f64::NAN, 0.0], &unit_coefficients());
        assert!(matches!(result, Err(ResponseError::InvalidInput(_))));
    }

    #[test]
    fn test_non_finite_time() {
        let result = integrate(&[0.0, f64::INFINITY], &[1.0, 0.0], &unit_coefficients());
        match result {
            Err(ResponseError::InvalidInput(message)) => assert!(message.contains("t[1]")),
            other => panic!("unexpected result: {:?}", other),
        }
        let result = integrate(&[f64::NAN, 1.0], &[1.0, 0.0], &unit_coefficients());
        assert!(matches!(result, Err(ResponseError::InvalidInput(_))));
    }

    #[test]
    fn test_non_increasing_time() {
        let result = integrate(&[0.0, 1.0, 1.0], &[0.0, 0.0, 0.0], &unit_coefficients());
        assert!(matches!(result, Err(ResponseError::InvalidInput(_))));
    }

    #[test]
    fn test_invalid_coefficients() {
        let k = PemCoefficients::new(f64::NAN, 0.0, 0.5, 0.5, 0.0, 1.0, 0.5, 0.5);
        let result = integrate(&[0.0], &[1.0], &k);
        assert!(matches!(result, Err(ResponseError::MissingCoefficients(_))));
    }
}
