/// Output formatting: plain text and JSON.
///
/// Floats print the way Python's `repr` does: whole numbers keep their
/// decimal point (`1.0`, not `1`) and exponents have a sign and at least two
/// digits (`1e-05`, not `1e-5`).
use serde::Serialize;

use crate::batch::BatchReport;

/// Shortest round-trip float text with a Python-style exponent.
pub fn format_float(value: f64) -> String {
    let text = format!("{value:?}");
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => text,
    }
}

/// One tau per line in pair order, then the average.
pub fn format_tau_text(report: &BatchReport) -> String {
    let mut out = String::new();
    for pair in &report.pairs {
        out.push_str(&format!("{}\n", format_float(pair.tau)));
    }
    out.push_str(&format!("Average: {}", format_float(report.average)));
    out
}

/// Like [`format_tau_text`], but each line names its files.
pub fn format_tau_verbose(report: &BatchReport) -> String {
    let mut out = String::new();
    for pair in &report.pairs {
        out.push_str(&format!(
            "{} vs {}: {} ({} items, {} concordant, {} discordant)\n",
            pair.master.display(),
            pair.student.display(),
            format_float(pair.tau),
            pair.items,
            pair.counts.concordant,
            pair.counts.discordant,
        ));
    }
    out.push_str(&format!("Average: {}", format_float(report.average)));
    out
}

pub fn format_tau_json(report: &BatchReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

#[derive(Serialize)]
struct JsonPearson<'a> {
    file_a: &'a str,
    file_b: &'a str,
    pearson: f64,
}

pub fn format_pearson_text(r: f64) -> String {
    format_float(r)
}

pub fn format_pearson_json(file_a: &str, file_b: &str, r: f64) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonPearson { file_a, file_b, pearson: r })
}
