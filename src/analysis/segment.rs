use crate::analysis::correlation::pearson;
use crate::analysis::filter::{AnalyzableSample, SamplePoint};
use crate::analysis::types::{ReturnStats, SegmentStats};
use crate::error::{ScoreLensError, SlResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

pub const HIGH_BAND_MIN: f64 = 80.0;
pub const MID_BAND_MIN: f64 = 70.0;
pub const LOW_BAND_MIN: f64 = 0.0;
/// Above the best attainable score so that 100 still lands in `High`.
pub const BAND_CEILING: f64 = 101.0;

/// Fewest members for which a segment's own correlation is reported.
pub const MIN_CORRELATION_MEMBERS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString, Display)]
#[strum(serialize_all = "snake_case")]
pub enum BandKind {
    High,
    Mid,
    Low,
}

impl BandKind {
    pub fn band(self) -> ScoreBand {
        match self {
            Self::High => ScoreBand::half_open("high (>=80)", HIGH_BAND_MIN, BAND_CEILING),
            Self::Mid => ScoreBand::half_open("mid (70-80)", MID_BAND_MIN, HIGH_BAND_MIN),
            Self::Low => ScoreBand::half_open("low (<70)", LOW_BAND_MIN, MID_BAND_MIN),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UpperBound {
    Exclusive(f64),
    Inclusive(f64),
}

/// A score range. The lower bound is always inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBand {
    pub label: String,
    pub min: f64,
    pub upper: UpperBound,
}

impl ScoreBand {
    pub fn half_open(label: &str, min: f64, max: f64) -> Self {
        Self {
            label: label.to_string(),
            min,
            upper: UpperBound::Exclusive(max),
        }
    }

    /// Caller-chosen `[min, max]`, may overlap the canonical bands.
    pub fn custom(min: f64, max: f64) -> SlResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ScoreLensError::Validation(format!(
                "custom band bounds must be finite (got {} - {})",
                min, max
            )));
        }
        if min > max {
            return Err(ScoreLensError::Validation(format!(
                "custom band minimum {} exceeds maximum {}",
                min, max
            )));
        }
        Ok(Self {
            label: format!("custom ({}-{})", min, max),
            min,
            upper: UpperBound::Inclusive(max),
        })
    }

    pub fn contains(&self, score: f64) -> bool {
        score >= self.min
            && match self.upper {
                UpperBound::Exclusive(max) => score < max,
                UpperBound::Inclusive(max) => score <= max,
            }
    }
}

/// `[high, mid, low]`: disjoint, and together they cover `[0, 101)`.
pub fn canonical_bands() -> Vec<ScoreBand> {
    BandKind::iter().map(BandKind::band).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    Band(ScoreBand),
    Industry(String),
}

impl Segment {
    pub fn label(&self) -> &str {
        match self {
            Self::Band(band) => &band.label,
            Self::Industry(name) => name,
        }
    }

    pub fn contains(&self, point: &SamplePoint) -> bool {
        match self {
            Self::Band(band) => band.contains(point.score),
            Self::Industry(name) => point.industry == *name,
        }
    }
}

/// Stats for the members of `segment`, recomputed from the sample on each call.
///
/// Only industry segments with at least `min_corr_members` members get a
/// correlation; everything else reports `None`.
pub fn segment_stats(
    sample: &AnalyzableSample,
    segment: &Segment,
    min_corr_members: usize,
) -> SegmentStats {
    let members: Vec<&SamplePoint> = sample
        .points()
        .iter()
        .filter(|p| segment.contains(p))
        .collect();

    let stats = ReturnStats::from_returns(members.iter().map(|p| p.ret));

    let pearson = match segment {
        Segment::Industry(_) if members.len() >= min_corr_members => {
            let scores: Vec<f64> = members.iter().map(|p| p.score).collect();
            let returns: Vec<f64> = members.iter().map(|p| p.ret).collect();
            Some(pearson(&scores, &returns))
        }
        _ => None,
    };

    SegmentStats::from_parts(segment.label().to_string(), stats, pearson)
}

/// Stats for the three canonical bands, in `high, mid, low` order.
pub fn band_breakdown(sample: &AnalyzableSample) -> Vec<SegmentStats> {
    canonical_bands()
        .into_iter()
        .map(|band| segment_stats(sample, &Segment::Band(band), MIN_CORRELATION_MEMBERS))
        .collect()
}

/// Points whose score falls outside every canonical band.
pub fn count_unbanded(sample: &AnalyzableSample) -> usize {
    let bands = canonical_bands();
    sample
        .points()
        .iter()
        .filter(|p| !bands.iter().any(|b| b.contains(p.score)))
        .count()
}

/// One entry per distinct industry, best mean return first.
/// Equal means keep the order in which the industries first appear.
pub fn industry_breakdown(sample: &AnalyzableSample, min_corr_members: usize) -> Vec<SegmentStats> {
    let mut seen = HashSet::new();
    let industries: Vec<&str> = sample
        .points()
        .iter()
        .map(|p| p.industry.as_str())
        .filter(|name| seen.insert(*name))
        .collect();

    let mut stats: Vec<SegmentStats> = industries
        .into_iter()
        .map(|name| {
            segment_stats(
                sample,
                &Segment::Industry(name.to_string()),
                min_corr_members,
            )
        })
        .collect();

    stats.sort_by(|a, b| b.mean_return.total_cmp(&a.mean_return));
    stats
}
