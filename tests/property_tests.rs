mod common;

use common::*;
use proptest::prelude::*;
use scorelens::analysis::correlation::{pearson, spearman, RankMethod};
use scorelens::analysis::filter::build_sample;
use scorelens::analysis::segment::{band_breakdown, count_unbanded};
use scorelens::{analyze, AnalysisOptions, Record};

// --- STRATEGIES ---

prop_compose! {
    fn arb_pairs()(
        pairs in proptest::collection::vec((0.0..100.0f64, -50.0..50.0f64), 2..60)
    ) -> (Vec<f64>, Vec<f64>) {
        pairs.into_iter().unzip()
    }
}

prop_compose! {
    fn arb_records()(
        rows in proptest::collection::vec(
            (0.0..=100.0f64, proptest::option::of(-20.0..20.0f64), 0usize..4),
            0..80
        )
    ) -> Vec<Record> {
        const INDUSTRIES: [&str; 3] = ["Banks", "Chips", "Retail"];
        rows.into_iter()
            .map(|(score, ret, ind)| {
                let rec = match ret {
                    Some(r) => Record::with_return(score, r),
                    None => Record::without_return(score),
                };
                match INDUSTRIES.get(ind) {
                    Some(name) => rec.in_industry(name),
                    None => rec,
                }
            })
            .collect()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_pearson_bounded_and_symmetric((x, y) in arb_pairs()) {
        let r = pearson(&x, &y);
        prop_assert!((-1.0..=1.0).contains(&r));
        prop_assert_eq!(r, pearson(&y, &x));
    }

    #[test]
    fn prop_pearson_exact_for_linear(
        x in proptest::collection::vec(0.0..100.0f64, 3..40),
        a in 0.1..10.0f64,
        b in -100.0..100.0f64,
        negate in any::<bool>()
    ) {
        prop_assume!(x.windows(2).any(|w| (w[0] - w[1]).abs() > 1e-6));
        let slope = if negate { -a } else { a };
        let y: Vec<f64> = x.iter().map(|v| slope * v + b).collect();
        let expected = if negate { -1.0 } else { 1.0 };
        prop_assert!((pearson(&x, &y) - expected).abs() < 1e-6);
    }

    #[test]
    fn prop_zero_variance_gives_zero(
        c in -100.0..100.0f64,
        y in proptest::collection::vec(-50.0..50.0f64, 1..40)
    ) {
        let x = vec![c; y.len()];
        prop_assert_eq!(pearson(&x, &y), 0.0);
        prop_assert_eq!(spearman(&x, &y, RankMethod::Ordinal), 0.0);
        prop_assert_eq!(spearman(&x, &y, RankMethod::Average), 0.0);
    }

    #[test]
    fn prop_spearman_ignores_monotone_transform(
        ints in proptest::collection::vec(1u32..1000, 2..40),
        y in proptest::collection::vec(-50.0..50.0f64, 40),
        c in -10.0..10.0f64
    ) {
        let x: Vec<f64> = ints.iter().map(|&i| i as f64).collect();
        let y = &y[..x.len()];
        // Strictly increasing on positive inputs, so ranks and ties are preserved.
        let squashed: Vec<f64> = x.iter().map(|v| v * v + c).collect();
        for method in [RankMethod::Ordinal, RankMethod::Average] {
            let before = spearman(&x, y, method);
            let after = spearman(&squashed, y, method);
            prop_assert!((before - after).abs() < 1e-9);
        }
    }

    #[test]
    fn prop_canonical_bands_cover_score_domain(records in arb_records()) {
        prop_assume!(!records.is_empty());
        let (sample, _) = build_sample(&records).unwrap();
        let banded: usize = band_breakdown(&sample).iter().map(|b| b.count).sum();
        prop_assert_eq!(count_unbanded(&sample), 0);
        prop_assert_eq!(banded, sample.len());
    }

    #[test]
    fn prop_report_rates_are_fractions(records in arb_records()) {
        let report = analyze(&records, &AnalysisOptions::default()).unwrap();
        prop_assert!((0.0..=1.0).contains(&report.overall.positive_rate));
        for seg in report.bands.iter().chain(report.industries.iter()) {
            prop_assert!((0.0..=1.0).contains(&seg.positive_rate));
            prop_assert!(seg.mean_return.is_finite());
            prop_assert_eq!(seg.positive + seg.non_positive, seg.count);
        }
        let members: usize = report.industries.iter().map(|s| s.count).sum();
        prop_assert_eq!(members, report.overall.count);
    }

    #[test]
    fn prop_analysis_is_deterministic(records in arb_records()) {
        let options = AnalysisOptions::default();
        let first = analyze(&records, &options).unwrap();
        let second = analyze(&records, &options).unwrap();
        prop_assert_eq!(first, second);
    }
}

#[test]
fn test_scenario_a_survives_reordering() {
    let mut records = scenario_a();
    let forward = analyze(&records, &AnalysisOptions::default()).unwrap();
    records.reverse();
    let backward = analyze(&records, &AnalysisOptions::default()).unwrap();
    assert_close(forward.correlation.pearson, backward.correlation.pearson);
    assert_eq!(forward.bands, backward.bands);
}
