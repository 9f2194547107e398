// src/main.rs

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use log::info;

use pemsim::simulation::csv::{setup_csv_output, write_response_rows};
use pemsim::simulation::framework::{peak_displacement, run_scenario};
use pemsim::simulation::load_parameters::{load_coefficients, load_scenario};

/// 1自由度線形系の区分厳密法による応答解析
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// pem_coefficients.yaml と scenario.yaml を置いたディレクトリ
    #[arg(short, long, default_value = "config")]
    config_dir: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();
    let config_dir = args.config_dir;

    // 伝達係数とシナリオの読み込み
    let coefficients = load_coefficients(config_dir.join("pem_coefficients.yaml"))?;
    let scenario = load_scenario(config_dir.join("scenario.yaml"))?;

    // 応答解析
    let run = run_scenario(&coefficients, &scenario)?;

    // CSV出力
    let mut writer = setup_csv_output(&scenario.output)?;
    write_response_rows(&mut writer, &run)?;

    if let Some((index, peak)) = peak_displacement(&run.history) {
        info!(
            "最大変位 {} m (t = {} s), {} 行を {} に出力",
            peak, run.times[index], run.times.len(), scenario.output
        );
    }

    Ok(())
}
