use crate::analysis::types::FilterSummary;
use crate::error::{ScoreLensError, SlResult};
use crate::records::Record;
use serde::Serialize;
use tracing::{debug, warn};

/// One record that survived filtering: both numbers are finite.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SamplePoint {
    pub score: f64,
    pub ret: f64,
    pub industry: String,
}

/// Records with a usable score and an observed return, in input order.
/// Immutable once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalyzableSample {
    points: Vec<SamplePoint>,
}

impl AnalyzableSample {
    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn scores(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.score).collect()
    }

    pub fn returns(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.ret).collect()
    }
}

/// Builds the analyzable subset of `records`.
///
/// Missing or unparsable returns are expected (recent days have no outcome yet)
/// and are dropped silently. The only error is a record set in which not a
/// single score is a finite number.
pub fn build_sample(records: &[Record]) -> SlResult<(AnalyzableSample, FilterSummary)> {
    let mut summary = FilterSummary {
        total_records: records.len(),
        ..Default::default()
    };
    let mut points = Vec::with_capacity(records.len());

    for (idx, rec) in records.iter().enumerate() {
        if !rec.score.is_finite() {
            debug!("   [Record {}] dropped: score is not a number", idx);
            summary.invalid_score += 1;
            continue;
        }

        let Some(ret) = rec.ret.as_ref().and_then(|r| r.to_finite()) else {
            summary.missing_return += 1;
            continue;
        };

        points.push(SamplePoint {
            score: rec.score,
            ret,
            industry: rec.industry_label().to_string(),
        });
    }

    if !records.is_empty() && summary.invalid_score == records.len() {
        return Err(ScoreLensError::MalformedInput(format!(
            "none of the {} records carries a numeric score",
            records.len()
        )));
    }

    if summary.invalid_score > 0 {
        warn!(
            "⚠️  {} of {} records had no numeric score and were ignored.",
            summary.invalid_score, summary.total_records
        );
    }

    summary.analyzable = points.len();
    debug!(
        "   -> {} analyzable of {} records ({} without a return).",
        summary.analyzable, summary.total_records, summary.missing_return
    );

    Ok((AnalyzableSample { points }, summary))
}
