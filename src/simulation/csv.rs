// src/simulation/csv.rs

use std::error::Error;
use std::fs::{self, File};
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;

use crate::simulation::ResponseRun;

/// CSV出力の設定とヘッダーの書き込み
pub fn setup_csv_output<P: AsRef<Path>>(path: P) -> Result<Box<dyn Write>, Box<dyn Error>> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let output_file = File::create(path)?;
    let mut writer = BufWriter::new(output_file);
    write_csv_header(&mut writer)?;
    Ok(Box::new(writer))
}

/// CSVヘッダーの書き込み
pub fn write_csv_header<W: Write>(writer: &mut W) -> Result<(), std::io::Error> {
    writer.write_all(b"time(s),position(m),velocity(m/s)\n")
}

/// CSV行の作成
pub fn create_csv_row(time: f64, position: f64, velocity: f64) -> String {
    format!("{},{},{}\n", time, position, velocity)
}

/// 応答履歴の全行を書き込む
pub fn write_response_rows<W: Write + ?Sized>(
    writer: &mut W,
    run: &ResponseRun,
) -> Result<(), std::io::Error> {
    for ((time, position), velocity) in run
        .times
        .iter()
        .zip(run.history.position.iter())
        .zip(run.history.velocity.iter())
    {
        writer.write_all(create_csv_row(*time, *position, *velocity).as_bytes())?;
    }
    writer.flush()
}
