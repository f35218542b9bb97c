mod common;

use common::*;
use scorelens::analysis::timeseries::{
    build_series, collect_inputs, series_points, SeriesKind,
};
use scorelens::config::ColumnNames;
use scorelens::records::loader::InputFormat;
use scorelens::{analyze, AnalysisOptions, Record};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const HEADER: &str = "identified_stock_names\tindustry\tfinal_score_penalized\treturn\n";

fn write_day(dir: &TempDir, name: &str, rows: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, format!("{}{}", HEADER, rows)).unwrap();
    path
}

#[test]
fn test_series_points_cover_bands_and_industries() {
    let records = vec![
        rec_in(85.0, 2.0, "Chips"),
        rec_in(90.0, 3.0, "Chips"),
        rec_in(60.0, -0.5, "Steel"),
        rec(65.0, 1.0),
    ];
    let report = analyze(&records, &AnalysisOptions::default()).unwrap();
    let points = series_points("20240105", &report);

    let bands: Vec<(&str, usize)> = points
        .iter()
        .filter(|p| p.kind == SeriesKind::Band)
        .map(|p| (p.label.as_str(), p.count))
        .collect();
    // mid band is empty and left out
    assert_eq!(bands, vec![("high (>=80)", 2), ("low (<70)", 2)]);

    let industries: Vec<&str> = points
        .iter()
        .filter(|p| p.kind == SeriesKind::Industry)
        .map(|p| p.label.as_str())
        .collect();
    assert_eq!(industries, vec!["Chips", "Steel"]);

    assert!(points.iter().all(|p| p.date == "20240105"));
    assert_close(points[0].mean_return, 2.5);
}

#[test]
fn test_series_points_empty_without_returns() {
    let records = vec![Record::without_return(80.0)];
    let report = analyze(&records, &AnalysisOptions::default()).unwrap();
    assert!(series_points("20240105", &report).is_empty());
}

#[test]
fn test_collect_inputs_sorts_directory_by_date() {
    let dir = tempfile::tempdir().unwrap();
    write_day(&dir, "parallel_result_20240108.tsv", "A\tChips\t85\t1.0\n");
    write_day(&dir, "parallel_result_20240105.tsv", "A\tChips\t85\t1.0\n");
    fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

    let inputs = collect_inputs(&[dir.path().to_path_buf()], InputFormat::Tsv).unwrap();
    let dates: Vec<&str> = inputs.iter().map(|i| i.date.as_str()).collect();
    assert_eq!(dates, vec!["20240105", "20240108"]);
}

#[test]
fn test_build_series_skips_dates_without_outcomes() {
    let dir = tempfile::tempdir().unwrap();
    let settled = write_day(
        &dir,
        "parallel_result_20240105.tsv",
        "A\tChips\t85\t2.0\nB\tChips\t72\t-1.0\nC\tSteel\t60\t-0.5\n",
    );
    let fresh = write_day(&dir, "parallel_result_20240108.tsv", "A\tChips\t88\t\n");
    let broken = dir.path().join("parallel_result_20240109.tsv");
    fs::write(&broken, "name\tscore\nA\t1\n").unwrap();

    let inputs = collect_inputs(&[fresh, broken, settled], InputFormat::Tsv).unwrap();
    let points = build_series(
        &inputs,
        InputFormat::Tsv,
        &ColumnNames::default(),
        &AnalysisOptions::default(),
    );

    assert!(!points.is_empty());
    assert!(points.iter().all(|p| p.date == "20240105"));
    assert_eq!(points.iter().filter(|p| p.kind == SeriesKind::Band).count(), 3);
}
