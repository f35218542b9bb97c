use crate::analysis::{analyze, AnalysisOptions, AnalysisReport};
use crate::config::ColumnNames;
use crate::error::{ScoreLensError, SlResult};
use crate::records::loader::{load_records, InputFormat};
use crate::records::UNCLASSIFIED;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use strum_macros::Display;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SeriesKind {
    Band,
    Industry,
}

/// Mean return of one segment on one date.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPoint {
    pub date: String,
    pub kind: SeriesKind,
    pub label: String,
    pub mean_return: f64,
    pub count: usize,
}

/// One input file with the date taken from its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatedInput {
    pub date: String,
    pub path: PathBuf,
}

/// `parallel_result_20240105.tsv` -> `20240105`: the last `_`-separated part
/// of the file stem, or the whole stem when it has no `_`.
pub fn date_from_path(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    let date = stem.rsplit('_').next().unwrap_or(stem);
    (!date.is_empty()).then(|| date.to_string())
}

/// Expands directories into the files they hold with the extension of
/// `format`, dates every file and sorts the result by date.
pub fn collect_inputs(paths: &[PathBuf], format: InputFormat) -> SlResult<Vec<DatedInput>> {
    let extension = format.to_string();
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            for entry in fs::read_dir(path)? {
                let file = entry?.path();
                let matches = file
                    .extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|e| e.eq_ignore_ascii_case(&extension));
                if file.is_file() && matches {
                    files.push(file);
                }
            }
        } else {
            files.push(path.clone());
        }
    }

    let mut dated = Vec::with_capacity(files.len());
    for path in files {
        let date = date_from_path(&path).ok_or_else(|| {
            ScoreLensError::Validation(format!("cannot take a date from '{}'", path.display()))
        })?;
        dated.push(DatedInput { date, path });
    }
    dated.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.path.cmp(&b.path)));

    debug!("   -> {} dated input files.", dated.len());
    Ok(dated)
}

/// Rows for one date: every non-empty canonical band, then every classified
/// industry in report order. A report without outcome data yields nothing.
pub fn series_points(date: &str, report: &AnalysisReport) -> Vec<SeriesPoint> {
    if report.is_insufficient() {
        return Vec::new();
    }

    let bands = report
        .bands
        .iter()
        .filter(|s| s.count > 0)
        .map(|s| (SeriesKind::Band, s));
    let industries = report
        .industries
        .iter()
        .filter(|s| s.label != UNCLASSIFIED)
        .map(|s| (SeriesKind::Industry, s));

    bands
        .chain(industries)
        .map(|(kind, s)| SeriesPoint {
            date: date.to_string(),
            kind,
            label: s.label.clone(),
            mean_return: s.mean_return,
            count: s.count,
        })
        .collect()
}

/// Analyzes each file on its own and concatenates the per-date rows.
///
/// Files that cannot be read or analyzed are logged and skipped, as are
/// dates with no outcome data yet.
pub fn build_series(
    inputs: &[DatedInput],
    format: InputFormat,
    columns: &ColumnNames,
    options: &AnalysisOptions,
) -> Vec<SeriesPoint> {
    let mut points = Vec::new();

    for input in inputs {
        let report = load_records(&input.path, format, columns)
            .and_then(|loaded| analyze(&loaded.records, options));
        let report = match report {
            Ok(report) => report,
            Err(e) => {
                warn!("⚠️  [{}] skipped: {}", input.date, e);
                continue;
            }
        };

        if report.is_insufficient() {
            info!("   [{}] no outcome data yet, skipped.", input.date);
            continue;
        }
        points.extend(series_points(&input.date, &report));
    }

    points
}
