mod tables;

use clap::ValueEnum;
use scorelens::analysis::timeseries::SeriesPoint;
use scorelens::analysis::SegmentStats;
use scorelens::{AnalysisReport, SlResult};
use strum_macros::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    Table,
    Json,
}

pub fn print_report(report: &AnalysisReport, format: OutputFormat) -> SlResult<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Table => {
            if report.is_insufficient() {
                print_insufficient_notice(report.filter.total_records);
                return Ok(());
            }
            tables::overview(report);
            tables::correlation(&report.correlation);
            tables::bands(&report.bands, report.unbanded);
            tables::industries(&report.industries);
            if let Some(custom) = &report.custom_band {
                tables::segment(custom);
            }
        }
    }
    Ok(())
}

pub fn print_segment(stats: &SegmentStats, insufficient: bool, format: OutputFormat) -> SlResult<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(stats)?),
        OutputFormat::Table => {
            if insufficient {
                print_insufficient_notice(0);
            }
            tables::segment(stats);
        }
    }
    Ok(())
}

pub fn print_series(points: &[SeriesPoint], format: OutputFormat) -> SlResult<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(points)?),
        OutputFormat::Table => {
            if points.is_empty() {
                println!("\nNo dated file carries return data yet.");
            } else {
                tables::series(points);
            }
        }
    }
    Ok(())
}

fn print_insufficient_notice(total: usize) {
    if total > 0 {
        println!(
            "\nNo return data yet: none of the {} records has an observed return.",
            total
        );
    } else {
        println!("\nNo return data yet.");
    }
}
