/// `AuthSift` - SSH auth-log brute-force window detector
///
/// Copyright (C) 2026 AuthSift contributors
///
/// This program is free software: you can redistribute it and/or modify
/// it under the terms of the GNU General Public License as published by
/// the Free Software Foundation, either version 3 of the License, or
/// (at your option) any later version.
///
/// This program is distributed in the hope that it will be useful,
/// but WITHOUT ANY WARRANTY; without even the implied warranty of
/// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
/// GNU General Public License for more details.
///
/// You should have received a copy of the GNU General Public License
/// along with this program.  If not, see <https://www.gnu.org/licenses/>.
use anyhow::Context;
use authsift::detect::summary;
use authsift::{detect_windows, export, pipeline, DEFAULT_THRESHOLD};
use chrono::Datelike;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "authsift")]
#[command(version)]
#[command(
    about = "Flag per-host minute windows of SSH authentication bursts",
    long_about = None
)]
struct Args {
    /// Path to the auth log to analyze
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Events from one host within one minute needed to flag the window
    #[arg(long, default_value_t = DEFAULT_THRESHOLD, value_name = "N")]
    threshold: usize,

    /// Year assumed for the year-less syslog timestamps [default: current year]
    #[arg(long, value_name = "YEAR")]
    year: Option<i32>,

    /// Write the parsed records table to this CSV file
    #[arg(long, value_name = "CSV")]
    records_out: Option<PathBuf>,

    /// Write the suspicious windows to this CSV file
    #[arg(long, value_name = "CSV")]
    windows_out: Option<PathBuf>,

    /// Print the suspicious windows as JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// How many hosts to list in the activity summary
    #[arg(long, default_value_t = 10, value_name = "N")]
    top: usize,
}

fn main() -> anyhow::Result<()> {
    // Set RUST_LOG to override (e.g., RUST_LOG=debug)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args = Args::parse();
    let year = args.year.unwrap_or_else(|| chrono::Local::now().year());
    log::info!(
        "analyzing {} (threshold {}, reference year {year})",
        args.file.display(),
        args.threshold
    );

    let batch = pipeline::load_log_file(&args.file, year)
        .with_context(|| format!("failed to load {}", args.file.display()))?;

    let mut windows = detect_windows(&batch.enriched, args.threshold)?;
    export::sort_for_display(&mut windows);

    if let Some(path) = args.records_out.as_deref() {
        export::write_records_csv(path, &batch.records)
            .with_context(|| format!("failed to export records to {}", path.display()))?;
    }
    if let Some(path) = args.windows_out.as_deref() {
        export::write_windows_csv(path, &windows)
            .with_context(|| format!("failed to export windows to {}", path.display()))?;
    }

    if args.json {
        println!("{}", export::windows_to_json(&windows)?);
        return Ok(());
    }

    let stats = batch.stats;
    println!(
        "Parsed {} lines: {} records, {} without timestamp, {} malformed (dropped)",
        stats.total_lines, stats.parsed, stats.missing_timestamp, stats.malformed_timestamp
    );
    println!(
        "Suspicious windows (>= {} events from one host in one minute): {}",
        args.threshold,
        windows.len()
    );
    for window in &windows {
        println!(
            "  {:<20} {}  {} events",
            window.source_host,
            window.minute_bucket.format("%Y-%m-%d %H:%M"),
            window.count
        );
    }

    let ranked = summary::top_hosts(&batch.enriched, args.top);
    if !ranked.is_empty() {
        println!("\nTop source hosts by authentication attempts:");
        for (host, count) in &ranked {
            println!("  {host:<20} {count} attempts");
        }
    }

    let hours = summary::attempts_per_hour(&batch.enriched);
    if let Some((hour, count)) = hours
        .iter()
        .enumerate()
        .max_by_key(|(_, count)| **count)
        .filter(|(_, count)| **count > 0)
    {
        println!("\nBusiest hour: {hour:02}:00 ({count} attempts)");
    }

    let peaks = summary::peak_attempts_per_host(&windows);
    if !peaks.is_empty() {
        println!("\nBrute-force intensity (max attempts in one minute):");
        for (host, peak) in &peaks {
            println!("  {host:<20} {peak} attempts/minute");
        }
    }

    Ok(())
}
