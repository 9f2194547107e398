// src/simulation/load_parameters.rs

use std::error::Error;
use std::fs::File;
use std::path::Path;
use serde_yaml::from_reader;

use crate::config::{parameters::PemCoefficients, scenario::Scenario};

/// 伝達係数の読み込み
pub fn load_coefficients<P: AsRef<Path>>(path: P) -> Result<PemCoefficients, Box<dyn Error>> {
    let file = File::open(path)?;
    let coefficients = PemCoefficients::from_reader(file)?;
    Ok(coefficients)
}

/// シナリオの読み込み
pub fn load_scenario<P: AsRef<Path>>(path: P) -> Result<Scenario, Box<dyn Error>> {
    let file = File::open(path)?;
    let scenario: Scenario = from_reader(file)?;
    Ok(scenario)
}
