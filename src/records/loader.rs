use crate::config::ColumnNames;
use crate::error::{ScoreLensError, SlResult};
use crate::records::{Record, ReturnValue};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use strum_macros::{Display, EnumString};
use tracing::{debug, info};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    #[default]
    Tsv,
    Csv,
    Json,
}

/// Records read from one file, plus what the loader had to drop.
#[derive(Debug, Default)]
pub struct LoadedRecords {
    pub records: Vec<Record>,
    /// Rows that were unreadable or too short to hold a score.
    pub skipped_rows: usize,
    /// Rows whose stock-name column was present but blank.
    pub unnamed_rows: usize,
}

pub fn load_records<P: AsRef<Path>>(
    path: P,
    format: InputFormat,
    columns: &ColumnNames,
) -> SlResult<LoadedRecords> {
    let path = path.as_ref();
    info!("📂 Loading {} records from: {}", format, path.display());

    let file = File::open(path).map_err(|e| {
        ScoreLensError::Io(std::io::Error::new(
            e.kind(),
            format!("Could not open '{}': {}", path.display(), e),
        ))
    })?;
    let reader = BufReader::new(file);

    let loaded = match format {
        InputFormat::Tsv => read_delimited(reader, b'\t', columns)?,
        InputFormat::Csv => read_delimited(reader, b',', columns)?,
        InputFormat::Json => read_json(reader, columns)?,
    };

    debug!(
        "   -> Loaded {} records ({} skipped, {} without a stock name).",
        loaded.records.len(),
        loaded.skipped_rows,
        loaded.unnamed_rows
    );
    Ok(loaded)
}

pub fn read_delimited<R: Read>(
    reader: R,
    delimiter: u8,
    columns: &ColumnNames,
) -> SlResult<LoadedRecords> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let find = |name: &str| headers.iter().position(|h| h.trim() == name);

    let score_idx = find(&columns.score_column).ok_or_else(|| {
        ScoreLensError::Validation(format!(
            "score column '{}' not found in header",
            columns.score_column
        ))
    })?;
    let return_idx = find(&columns.return_column);
    let industry_idx = find(&columns.industry_column);
    let name_idx = find(&columns.name_column);

    if return_idx.is_none() {
        debug!(
            "   Column '{}' absent; no record will carry a return.",
            columns.return_column
        );
    }

    let mut out = LoadedRecords::default();

    for (row_idx, result) in rdr.records().enumerate() {
        let row = match result {
            Ok(row) => row,
            Err(e) => {
                debug!("   ⚠️  [Row {}] CSV Parse Error: {}", row_idx + 1, e);
                out.skipped_rows += 1;
                continue;
            }
        };

        if row.len() <= score_idx {
            out.skipped_rows += 1;
            continue;
        }

        let cell = |idx: Option<usize>| {
            idx.and_then(|i| row.get(i))
                .map(str::trim)
                .filter(|s| !s.is_empty())
        };

        if name_idx.is_some() && cell(name_idx).is_none() {
            out.unnamed_rows += 1;
            continue;
        }

        let score = row[score_idx].trim().parse::<f64>().unwrap_or(f64::NAN);
        let ret = cell(return_idx).map(ReturnValue::from);
        let industry = cell(industry_idx).map(str::to_string);

        out.records.push(Record::new(score, ret, industry));
    }

    Ok(out)
}

pub fn read_json<R: Read>(reader: R, columns: &ColumnNames) -> SlResult<LoadedRecords> {
    let rows: Vec<Map<String, Value>> = serde_json::from_reader(reader)?;

    if !rows.is_empty() && rows.iter().all(|o| !o.contains_key(&columns.score_column)) {
        return Err(ScoreLensError::Validation(format!(
            "score field '{}' not present in any object",
            columns.score_column
        )));
    }

    let mut out = LoadedRecords::default();

    for obj in &rows {
        if let Some(name) = obj.get(&columns.name_column) {
            if json_text(name).is_none() {
                out.unnamed_rows += 1;
                continue;
            }
        }

        let score = obj
            .get(&columns.score_column)
            .and_then(json_number)
            .unwrap_or(f64::NAN);
        let ret = obj.get(&columns.return_column).and_then(json_return);
        let industry = obj
            .get(&columns.industry_column)
            .and_then(json_text)
            .map(str::to_string);

        out.records.push(Record::new(score, ret, industry));
    }

    Ok(out)
}

fn json_text(v: &Value) -> Option<&str> {
    v.as_str().map(str::trim).filter(|s| !s.is_empty())
}

fn json_number(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn json_return(v: &Value) -> Option<ReturnValue> {
    match v {
        Value::Number(n) => n.as_f64().map(ReturnValue::Number),
        Value::String(s) if !s.trim().is_empty() => Some(ReturnValue::Text(s.clone())),
        _ => None,
    }
}
