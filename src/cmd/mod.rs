pub mod analyze;
pub mod band;
pub mod timeseries;

use clap::Args;
use scorelens::analysis::AnalysisOptions;
use scorelens::config::AnalysisConfig;
use scorelens::records::loader::{load_records, InputFormat};
use scorelens::{analyze, AnalysisReport, SlResult};
use std::path::PathBuf;
use tracing::debug;

#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Daily record file.
    pub input: PathBuf,

    #[arg(short = 'i', long, value_enum, default_value_t = InputFormat::Tsv)]
    pub input_format: InputFormat,
}

pub fn load_and_analyze(
    input: &InputArgs,
    config: &AnalysisConfig,
    options: &AnalysisOptions,
) -> SlResult<AnalysisReport> {
    let loaded = load_records(&input.input, input.input_format, &config.columns)?;
    debug!("   Options: {:?}", options);
    analyze(&loaded.records, options)
}
