use crate::application::RunOutcome;
use crate::domain::format_decimal;

/// Lines printed to stdout after a successful run
pub fn summary_lines(outcome: &RunOutcome) -> Vec<String> {
    let mut lines = vec![
        format!("Report written to {}", outcome.report_path.display()),
        format!(
            "Threshold: {}% | Usage: {}%",
            format_decimal(outcome.threshold),
            format_decimal(outcome.disk.used_percent())
        ),
    ];
    if outcome.status.is_warn() {
        lines.push(format!(
            "WARNING: Disk usage exceeds {}%",
            format_decimal(outcome.threshold)
        ));
    }
    lines
}

pub fn print_summary(outcome: &RunOutcome) {
    for line in summary_lines(outcome) {
        println!("{}", line);
    }
}
