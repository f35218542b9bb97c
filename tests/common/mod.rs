#![allow(dead_code)]

use scorelens::analysis::filter::{build_sample, AnalyzableSample};
use scorelens::Record;

pub const EPS: f64 = 1e-9;

pub fn rec(score: f64, ret: f64) -> Record {
    Record::with_return(score, ret)
}

pub fn rec_in(score: f64, ret: f64, industry: &str) -> Record {
    Record::with_return(score, ret).in_industry(industry)
}

pub fn sample_of(records: &[Record]) -> AnalyzableSample {
    build_sample(records).expect("test records must be valid").0
}

/// Four records used across the band tests.
pub fn scenario_a() -> Vec<Record> {
    vec![rec(85.0, 2.0), rec(72.0, -1.0), rec(90.0, 3.0), rec(60.0, -0.5)]
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPS,
        "expected {}, got {}",
        expected,
        actual
    );
}
