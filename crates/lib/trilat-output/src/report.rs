//! Text rendering of strategy results.
//!
//! Numbers follow the JVM rendering of `float` and `double`: `NaN`, `Infinity`, a
//! trailing `.0` on integral values and `E` notation outside `[1e-3, 1e7)`.

use std::io::{self, Write};

use trilat_models::metrics::{StrategyReport, StrategySummary};

pub fn render_f32(value: f32) -> String {
    render_number(f64::from(value), format!("{}", value), format!("{:e}", value))
}

pub fn render_f64(value: f64) -> String {
    render_number(value, format!("{}", value), format!("{:e}", value))
}

fn render_number(value: f64, plain: String, scientific: String) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    let magnitude = value.abs();
    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        return with_fraction(plain);
    }
    match scientific.split_once('e') {
        Some((mantissa, exponent)) => {
            format!("{}E{}", with_fraction(mantissa.to_owned()), exponent)
        }
        None => scientific,
    }
}

fn with_fraction(mut number: String) -> String {
    if !number.contains('.') {
        number.push_str(".0");
    }
    number
}

pub fn render_line(label: &str, ale: f32, percent: f64) -> String {
    format!(
        "{}: ALE: {}, Localized nodes(%): {}%",
        label,
        render_f32(ale),
        render_f64(percent)
    )
}

pub fn render_report(report: &StrategyReport) -> String {
    render_line(
        report.strategy.label(),
        report.ale(),
        report.localized_percent(),
    )
}

pub fn render_summary(summary: &StrategySummary) -> String {
    render_line(
        summary.strategy.label(),
        summary.mean_ale(),
        summary.mean_localized_percent(),
    )
}

/// Writes the result lines of a batch. A single run prints only its strategy lines;
/// several runs print each run under a header followed by the averages.
pub fn write_results<W: Write>(
    out: &mut W,
    runs: &[Vec<StrategyReport>],
    summaries: &[StrategySummary],
) -> io::Result<()> {
    if let [single] = runs {
        for report in single {
            writeln!(out, "{}", render_report(report))?;
        }
        return Ok(());
    }

    for (run, reports) in runs.iter().enumerate() {
        writeln!(out, "Run {}:", run + 1)?;
        for report in reports {
            writeln!(out, "{}", render_report(report))?;
        }
    }
    writeln!(out, "Mean over {} runs:", runs.len())?;
    for summary in summaries {
        writeln!(out, "{}", render_summary(summary))?;
    }
    Ok(())
}
