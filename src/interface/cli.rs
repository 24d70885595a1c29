use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "diskreport",
    version,
    about = "Report disk usage for a path and warn above a threshold",
    long_about = "Writes a timestamped disk usage report, appends one line to the run log,\n\
                  and exits with status 1 when usage exceeds the threshold."
)]
pub struct Cli {
    /// Filesystem path to inspect
    #[arg(long, default_value = "/")]
    pub path: PathBuf,

    /// Warning threshold in percent
    #[arg(long, default_value_t = 80.0, value_parser = parse_threshold, allow_negative_numbers = true)]
    pub threshold: f64,

    /// Directory that receives the report and the run log
    #[arg(long, env = "DISKREPORT_OUT_DIR", default_value = "out")]
    pub out_dir: PathBuf,

    /// Run log file name, relative to the output directory
    #[arg(long, default_value = "run.log")]
    pub log_file: PathBuf,

    /// Verbose diagnostics on stderr
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

fn parse_threshold(value: &str) -> Result<f64, String> {
    let threshold: f64 = value
        .trim()
        .parse()
        .map_err(|e| format!("'{}' is not a number: {}", value, e))?;
    if !threshold.is_finite() {
        return Err(format!("'{}' must be a finite number", value));
    }
    Ok(threshold)
}
