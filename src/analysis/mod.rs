pub mod correlation;
pub mod filter;
pub mod segment;
pub mod timeseries;
pub mod types;

use self::correlation::{correlate, CorrelationResult, RankMethod};
use self::filter::{build_sample, AnalyzableSample};
use self::segment::{
    band_breakdown, count_unbanded, industry_breakdown, segment_stats, ScoreBand, Segment,
    MIN_CORRELATION_MEMBERS,
};
pub use self::types::{FilterSummary, ReturnStats, SampleSummary, SegmentStats};
use crate::error::SlResult;
use crate::records::Record;
use serde::Serialize;
use strum_macros::Display;
use tracing::info;

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOptions {
    pub custom_band: Option<ScoreBand>,
    pub rank_method: RankMethod,
    pub min_industry_members: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            custom_band: None,
            rank_method: RankMethod::Ordinal,
            min_industry_members: MIN_CORRELATION_MEMBERS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SampleStatus {
    Complete,
    /// No record carried an observed return.
    InsufficientData,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub status: SampleStatus,
    pub filter: FilterSummary,
    pub overall: SampleSummary,
    pub correlation: CorrelationResult,
    /// `high, mid, low`.
    pub bands: Vec<SegmentStats>,
    /// Points scored outside `[0, 101)`; `bands` counts plus this equal the sample size.
    pub unbanded: usize,
    pub custom_band: Option<SegmentStats>,
    /// Sorted by descending mean return.
    pub industries: Vec<SegmentStats>,
}

impl AnalysisReport {
    pub fn is_insufficient(&self) -> bool {
        self.status == SampleStatus::InsufficientData
    }
}

/// Runs the full pipeline over one record set.
///
/// Fails only when the records are unusable as a whole (no numeric score at all).
pub fn analyze(records: &[Record], options: &AnalysisOptions) -> SlResult<AnalysisReport> {
    let (sample, filter) = build_sample(records)?;
    Ok(analyze_sample(&sample, filter, options))
}

pub fn analyze_sample(
    sample: &AnalyzableSample,
    filter: FilterSummary,
    options: &AnalysisOptions,
) -> AnalysisReport {
    let status = if sample.is_empty() {
        info!("No outcome data available yet; reporting an empty sample.");
        SampleStatus::InsufficientData
    } else {
        SampleStatus::Complete
    };

    let custom_band = options.custom_band.as_ref().map(|band| {
        segment_stats(
            sample,
            &Segment::Band(band.clone()),
            options.min_industry_members,
        )
    });

    AnalysisReport {
        status,
        filter,
        overall: summarize(sample),
        correlation: correlate(sample, options.rank_method),
        bands: band_breakdown(sample),
        unbanded: count_unbanded(sample),
        custom_band,
        industries: industry_breakdown(sample, options.min_industry_members),
    }
}

pub fn summarize(sample: &AnalyzableSample) -> SampleSummary {
    if sample.is_empty() {
        return SampleSummary::default();
    }

    let returns = sample.returns();
    let scores = sample.scores();
    let stats = ReturnStats::from_returns(returns.iter().copied());

    SampleSummary {
        count: stats.count,
        mean_return: stats.mean,
        median_return: types::median(&returns),
        min_return: stats.min,
        max_return: stats.max,
        positive: stats.positive,
        non_positive: stats.non_positive,
        positive_rate: stats.positive_rate,
        mean_score: scores.iter().sum::<f64>() / scores.len() as f64,
        min_score: scores.iter().copied().fold(f64::INFINITY, f64::min),
        max_score: scores.iter().copied().fold(f64::NEG_INFINITY, f64::max),
    }
}
