// src/config/scenario.rs

use serde::Deserialize;

fn default_output() -> String {
    "output/response.csv".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct Scenario {
    pub time_step: f64,        // 時間刻み (s)。伝達係数の導出に用いたものと一致させる
    pub steps: usize,          // サンプル数
    pub load: Vec<[f64; 2]>,   // 荷重の折れ点 [時刻 (s), 荷重 (N)]
    #[serde(default = "default_output")]
    pub output: String,        // CSV出力先
}
