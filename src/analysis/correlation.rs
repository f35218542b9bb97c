use crate::analysis::filter::AnalyzableSample;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// How tied values are ranked before computing Spearman's rho.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RankMethod {
    /// Ties take consecutive ranks in order of first occurrence.
    #[default]
    Ordinal,
    /// Ties share the mean of the ranks they span.
    Average,
}

/// Same label in tables (`Display`) and JSON.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
pub enum Strength {
    #[strum(serialize = "strong")]
    #[serde(rename = "strong")]
    Strong,
    #[strum(serialize = "fairly strong")]
    #[serde(rename = "fairly strong")]
    FairlyStrong,
    #[strum(serialize = "moderate")]
    #[serde(rename = "moderate")]
    Moderate,
    #[strum(serialize = "weak")]
    #[serde(rename = "weak")]
    Weak,
    #[strum(serialize = "negligible")]
    #[serde(rename = "negligible")]
    Negligible,
}

impl Strength {
    /// Lower bounds are exclusive: exactly 0.7 is `FairlyStrong`.
    pub fn classify(corr: f64) -> Self {
        let abs = corr.abs();
        if abs > 0.7 {
            Self::Strong
        } else if abs > 0.5 {
            Self::FairlyStrong
        } else if abs > 0.3 {
            Self::Moderate
        } else if abs > 0.1 {
            Self::Weak
        } else {
            Self::Negligible
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrelationResult {
    pub pearson: f64,
    pub spearman: f64,
    /// Label for `pearson`.
    pub strength: Strength,
    pub spearman_strength: Strength,
    /// False when computed over an empty sample; the zeros then carry no signal.
    pub meaningful: bool,
}

impl CorrelationResult {
    pub fn not_meaningful() -> Self {
        Self {
            pearson: 0.0,
            spearman: 0.0,
            strength: Strength::Negligible,
            spearman_strength: Strength::Negligible,
            meaningful: false,
        }
    }
}

/// Score/return correlation over the whole sample.
pub fn correlate(sample: &AnalyzableSample, method: RankMethod) -> CorrelationResult {
    if sample.is_empty() {
        return CorrelationResult::not_meaningful();
    }

    let scores = sample.scores();
    let returns = sample.returns();
    let pearson = pearson(&scores, &returns);
    let spearman = spearman(&scores, &returns, method);

    CorrelationResult {
        pearson,
        spearman,
        strength: Strength::classify(pearson),
        spearman_strength: Strength::classify(spearman),
        meaningful: true,
    }
}

/// Product-moment correlation.
///
/// Returns 0 for empty input, mismatched lengths, or when either side has
/// zero variance.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    if x.is_empty() || x.len() != y.len() || is_constant(x) || is_constant(y) {
        return 0.0;
    }

    // Unit-scaled so the squared deviations stay representable at any magnitude.
    let scale_x = max_abs(x);
    let scale_y = max_abs(y);
    if !(scale_x > 0.0 && scale_x.is_finite() && scale_y > 0.0 && scale_y.is_finite()) {
        return 0.0;
    }

    let n = x.len() as f64;
    let mean_x = x.iter().map(|v| v / scale_x).sum::<f64>() / n;
    let mean_y = y.iter().map(|v| v / scale_y).sum::<f64>() / n;

    let mut num = 0.0;
    let mut den_x = 0.0;
    let mut den_y = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi / scale_x - mean_x;
        let dy = yi / scale_y - mean_y;
        num += dx * dy;
        den_x += dx * dx;
        den_y += dy * dy;
    }

    let den = (den_x * den_y).sqrt();
    if den > 0.0 && den.is_finite() {
        (num / den).clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

/// Pearson over the rank-transformed inputs.
///
/// Constant input yields 0 under either tie policy (ordinal ranks of a flat
/// sequence would be `1..=n`).
pub fn spearman(x: &[f64], y: &[f64], method: RankMethod) -> f64 {
    if x.is_empty() || x.len() != y.len() || is_constant(x) || is_constant(y) {
        return 0.0;
    }
    pearson(&ranks(x, method), &ranks(y, method))
}

/// Rank 1 goes to the largest value.
pub fn ranks(values: &[f64], method: RankMethod) -> Vec<f64> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    // Stable: equal values keep their input order.
    order.sort_by(|&a, &b| values[b].total_cmp(&values[a]));

    let mut ranks = vec![0.0; values.len()];
    match method {
        RankMethod::Ordinal => {
            for (pos, &idx) in order.iter().enumerate() {
                ranks[idx] = (pos + 1) as f64;
            }
        }
        RankMethod::Average => {
            let mut start = 0;
            while start < order.len() {
                let val = values[order[start]];
                let mut end = start + 1;
                while end < order.len() && values[order[end]] == val {
                    end += 1;
                }
                // positions start..end hold ranks start+1..=end
                let shared = (start + 1 + end) as f64 / 2.0;
                for &idx in &order[start..end] {
                    ranks[idx] = shared;
                }
                start = end;
            }
        }
    }
    ranks
}

fn max_abs(values: &[f64]) -> f64 {
    values.iter().fold(0.0, |acc: f64, v| acc.max(v.abs()))
}

fn is_constant(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] == w[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pearson_perfect() {
        let x = [1.0, 2.0, 3.0];
        assert!((pearson(&x, &[1.0, 2.0, 3.0]) - 1.0).abs() < 1e-12);
        assert!((pearson(&x, &[3.0, 2.0, 1.0]) + 1.0).abs() < 1e-12);
        assert_eq!(pearson(&x, &[1.0, 1.0, 1.0]), 0.0);
    }

    #[test]
    fn test_pearson_degenerate_lengths() {
        assert_eq!(pearson(&[], &[]), 0.0);
        assert_eq!(pearson(&[5.0], &[2.0]), 0.0);
        assert_eq!(pearson(&[1.0, 2.0], &[1.0]), 0.0);
    }

    #[test]
    fn test_ranks_descending() {
        assert_eq!(ranks(&[10.0, 30.0, 20.0], RankMethod::Ordinal), vec![3.0, 1.0, 2.0]);
    }
}
