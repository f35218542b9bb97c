use serde::{Deserialize, Serialize};

/// Descriptive statistics over a list of returns.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnStats {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub positive: usize,
    pub non_positive: usize,
    /// Fraction in [0, 1]; 0 when `count` is 0.
    pub positive_rate: f64,
}

impl ReturnStats {
    /// Zero-member input yields all-zero stats, never NaN.
    pub fn from_returns<I>(returns: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut stats = Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            ..Default::default()
        };
        let mut sum = 0.0;

        for r in returns {
            stats.count += 1;
            sum += r;
            stats.min = stats.min.min(r);
            stats.max = stats.max.max(r);
            if r > 0.0 {
                stats.positive += 1;
            } else {
                stats.non_positive += 1;
            }
        }

        if stats.count == 0 {
            return Self::default();
        }

        stats.mean = sum / stats.count as f64;
        stats.positive_rate = stats.positive as f64 / stats.count as f64;
        stats
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentStats {
    pub label: String,
    pub count: usize,
    pub mean_return: f64,
    pub min_return: f64,
    pub max_return: f64,
    pub positive: usize,
    pub non_positive: usize,
    pub positive_rate: f64,
    /// `None` = not computed (band segments, or too few members).
    pub pearson: Option<f64>,
}

impl SegmentStats {
    pub fn from_parts(label: String, stats: ReturnStats, pearson: Option<f64>) -> Self {
        Self {
            label,
            count: stats.count,
            mean_return: stats.mean,
            min_return: stats.min,
            max_return: stats.max,
            positive: stats.positive,
            non_positive: stats.non_positive,
            positive_rate: stats.positive_rate,
            pearson,
        }
    }
}

/// Headline numbers over the whole analyzable sample.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleSummary {
    pub count: usize,
    pub mean_return: f64,
    pub median_return: f64,
    pub min_return: f64,
    pub max_return: f64,
    pub positive: usize,
    pub non_positive: usize,
    pub positive_rate: f64,
    pub mean_score: f64,
    pub min_score: f64,
    pub max_score: f64,
}

/// What the filter kept and why it dropped the rest.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSummary {
    pub total_records: usize,
    pub analyzable: usize,
    pub missing_return: usize,
    pub invalid_score: usize,
}

pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}
