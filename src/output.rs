//! Flat-file artifact writers: CSV tables, the dictionary dump, and two
//! bar charts.
//!
//! This module consumes finished tables plus a target directory and
//! knows nothing about how the tables were produced. Artifacts are
//! overwritten unconditionally on every run. The charts are hand-rendered
//! SVG; a handful of rectangles does not justify a plotting dependency.

use std::borrow::Cow;
use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::generator::AttackerDictionary;
use crate::types::{DictSize, PasswordRecord, SummaryRecord, TrialOutcome};

/// Write every artifact the simulation produces into `dir`, creating the
/// directory if absent.
pub fn write_all(
    dir: &Path,
    passwords: &[PasswordRecord],
    dictionary: &AttackerDictionary,
    trials: &[TrialOutcome],
    summary: &[SummaryRecord],
) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    write_passwords_csv(&dir.join("passwords.csv"), passwords)?;
    write_dictionary(&dir.join("dictionary.txt"), dictionary)?;
    write_trials_csv(&dir.join("results.csv"), trials)?;
    write_summary_csv(&dir.join("summary.csv"), summary)?;

    // Charts show the unsalted / large-dictionary slice, cheapest
    // configuration first.
    let slice = chart_slice(summary);
    let hash_bars: Vec<(String, f64)> = slice
        .iter()
        .map(|row| (bar_label(row), row.avg_hash_time_ms))
        .collect();
    let rate_bars: Vec<(String, f64)> = slice
        .iter()
        .map(|row| (bar_label(row), row.cracked_rate))
        .collect();
    render_bar_chart(
        &dir.join("hash_time_by_algo.svg"),
        "Avg hash time (ms)",
        &hash_bars,
    )?;
    render_bar_chart(
        &dir.join("cracked_rate_by_algo.svg"),
        "Cracked rate",
        &rate_bars,
    )?;

    info!(dir = %dir.display(), "wrote simulation artifacts");
    Ok(())
}

fn writer(path: &Path) -> Result<BufWriter<File>> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    Ok(BufWriter::new(file))
}

/// Quote a CSV field only when it needs it.
fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains(['"', ',', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

fn write_passwords_csv(path: &Path, passwords: &[PasswordRecord]) -> Result<()> {
    let mut w = writer(path)?;
    writeln!(w, "id,password,strength")?;
    for record in passwords {
        writeln!(
            w,
            "{},{},{}",
            record.id,
            csv_field(&record.password),
            record.strength
        )?;
    }
    w.flush().with_context(|| format!("Failed to write {}", path.display()))
}

fn write_dictionary(path: &Path, dictionary: &AttackerDictionary) -> Result<()> {
    let mut w = writer(path)?;
    for word in dictionary.entries() {
        writeln!(w, "{word}")?;
    }
    w.flush().with_context(|| format!("Failed to write {}", path.display()))
}

fn write_trials_csv(path: &Path, trials: &[TrialOutcome]) -> Result<()> {
    let mut w = writer(path)?;
    writeln!(w, "algorithm,param,salted,dict,strength,hash_time_ms,cracked")?;
    for trial in trials {
        writeln!(
            w,
            "{},{},{},{},{},{},{}",
            trial.algorithm,
            csv_field(&trial.param),
            trial.salted,
            trial.dict,
            trial.strength,
            trial.hash_time_ms,
            trial.cracked
        )?;
    }
    w.flush().with_context(|| format!("Failed to write {}", path.display()))
}

fn write_summary_csv(path: &Path, summary: &[SummaryRecord]) -> Result<()> {
    let mut w = writer(path)?;
    writeln!(
        w,
        "algorithm,param,salted,dict,total,cracked_sum,cracked_rate,avg_hash_time_ms"
    )?;
    for row in summary {
        writeln!(
            w,
            "{},{},{},{},{},{},{},{}",
            row.algorithm,
            csv_field(&row.param),
            row.salted,
            row.dict,
            row.total,
            row.cracked_sum,
            row.cracked_rate,
            row.avg_hash_time_ms
        )?;
    }
    w.flush().with_context(|| format!("Failed to write {}", path.display()))
}

/// The summary rows shown in the charts: unsalted, large dictionary,
/// sorted ascending by mean hash time.
fn chart_slice(summary: &[SummaryRecord]) -> Vec<&SummaryRecord> {
    let mut slice: Vec<&SummaryRecord> = summary
        .iter()
        .filter(|row| !row.salted && row.dict == DictSize::Large)
        .collect();
    slice.sort_by(|a, b| a.avg_hash_time_ms.total_cmp(&b.avg_hash_time_ms));
    slice
}

fn bar_label(row: &SummaryRecord) -> String {
    if row.param.is_empty() {
        row.algorithm.clone()
    } else {
        format!("{} {}", row.algorithm, row.param)
    }
}

fn xml_escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Render a vertical bar chart: value axis on the left, rotated bar
/// labels underneath.
fn render_bar_chart(path: &Path, y_label: &str, bars: &[(String, f64)]) -> Result<()> {
    const WIDTH: f64 = 800.0;
    const HEIGHT: f64 = 500.0;
    const MARGIN_LEFT: f64 = 70.0;
    const MARGIN_RIGHT: f64 = 20.0;
    const MARGIN_TOP: f64 = 20.0;
    const MARGIN_BOTTOM: f64 = 120.0;
    const Y_TICKS: u32 = 5;

    let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let baseline = MARGIN_TOP + plot_h;
    let max = bars
        .iter()
        .map(|(_, value)| *value)
        .fold(0.0_f64, f64::max)
        .max(f64::MIN_POSITIVE);

    let mut svg = String::new();
    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" font-family="sans-serif" font-size="11">"#
    )?;
    writeln!(
        svg,
        r#"<rect width="{WIDTH}" height="{HEIGHT}" fill="white"/>"#
    )?;

    // Axes.
    writeln!(
        svg,
        r#"<line x1="{MARGIN_LEFT}" y1="{MARGIN_TOP}" x2="{MARGIN_LEFT}" y2="{baseline}" stroke="black"/>"#
    )?;
    writeln!(
        svg,
        r#"<line x1="{MARGIN_LEFT}" y1="{baseline}" x2="{x2}" y2="{baseline}" stroke="black"/>"#,
        x2 = MARGIN_LEFT + plot_w
    )?;
    writeln!(
        svg,
        r#"<text x="16" y="{y}" transform="rotate(-90 16 {y})" text-anchor="middle">{label}</text>"#,
        y = MARGIN_TOP + plot_h / 2.0,
        label = xml_escape(y_label)
    )?;

    // Value ticks.
    for tick in 0..=Y_TICKS {
        let value = max * f64::from(tick) / f64::from(Y_TICKS);
        let y = baseline - plot_h * f64::from(tick) / f64::from(Y_TICKS);
        writeln!(
            svg,
            r#"<line x1="{x1}" y1="{y}" x2="{MARGIN_LEFT}" y2="{y}" stroke="black"/>"#,
            x1 = MARGIN_LEFT - 4.0
        )?;
        writeln!(
            svg,
            r#"<text x="{x}" y="{ty}" text-anchor="end">{value:.3}</text>"#,
            x = MARGIN_LEFT - 8.0,
            ty = y + 4.0
        )?;
    }

    // Bars and rotated labels.
    let step = plot_w / (bars.len().max(1) as f64);
    let bar_w = step * 0.8;
    for (i, (label, value)) in bars.iter().enumerate() {
        let h = plot_h * value / max;
        let x = MARGIN_LEFT + step * i as f64 + (step - bar_w) / 2.0;
        let y = baseline - h;
        writeln!(
            svg,
            r#"<rect x="{x:.2}" y="{y:.2}" width="{bar_w:.2}" height="{h:.2}" fill="steelblue"/>"#
        )?;
        let lx = x + bar_w / 2.0;
        let ly = baseline + 12.0;
        writeln!(
            svg,
            r#"<text x="{lx:.2}" y="{ly:.2}" transform="rotate(-45 {lx:.2} {ly:.2})" text-anchor="end">{text}</text>"#,
            text = xml_escape(label)
        )?;
    }

    writeln!(svg, "</svg>")?;
    fs::write(path, svg).with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_field_quotes_only_when_needed() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("pa$$w0rd!"), "pa$$w0rd!");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    fn summary_row(algorithm: &str, param: &str, salted: bool, dict: DictSize, time: f64) -> SummaryRecord {
        SummaryRecord {
            algorithm: algorithm.to_string(),
            param: param.to_string(),
            salted,
            dict,
            total: 10,
            cracked_sum: 5,
            cracked_rate: 0.5,
            avg_hash_time_ms: time,
        }
    }

    #[test]
    fn chart_slice_filters_and_sorts() {
        let summary = vec![
            summary_row("bcrypt", "cost=12", false, DictSize::Large, 76.8),
            summary_row("MD5", "", false, DictSize::Large, 0.05),
            summary_row("MD5", "", true, DictSize::Large, 0.05),
            summary_row("MD5", "", false, DictSize::Small, 0.05),
            summary_row("PBKDF2", "iters=1000", false, DictSize::Large, 0.02),
        ];

        let slice = chart_slice(&summary);
        let labels: Vec<String> = slice.iter().map(|row| bar_label(row)).collect();
        assert_eq!(labels, ["PBKDF2 iters=1000", "MD5", "bcrypt cost=12"]);
    }

    #[test]
    fn bar_chart_renders_one_rect_per_bar() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("chart.svg");
        let bars = vec![
            ("MD5".to_string(), 0.05),
            ("bcrypt cost=8".to_string(), 4.8),
        ];
        render_bar_chart(&path, "Avg hash time (ms)", &bars).expect("render chart");

        let svg = fs::read_to_string(&path).expect("read svg");
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        // Background rect plus one per bar.
        assert_eq!(svg.matches("<rect").count(), 1 + bars.len());
        assert!(svg.contains("bcrypt cost=8"));
    }

    #[test]
    fn empty_chart_still_renders() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("empty.svg");
        render_bar_chart(&path, "Cracked rate", &[]).expect("render empty chart");
        let svg = fs::read_to_string(&path).expect("read svg");
        assert!(svg.contains("</svg>"));
    }
}
