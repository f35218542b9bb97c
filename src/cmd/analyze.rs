use super::{load_and_analyze, InputArgs};
use crate::reports::{self, OutputFormat};
use clap::Args;
use scorelens::config::AnalysisConfig;
use scorelens::SlResult;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub config: AnalysisConfig,
}

pub fn run(args: &AnalyzeArgs, config: &AnalysisConfig, format: OutputFormat) -> SlResult<()> {
    let options = config.to_options()?;
    let report = load_and_analyze(&args.input, config, &options)?;

    info!(
        "🔎 Analyzed {} of {} records ({}).",
        report.filter.analyzable, report.filter.total_records, report.status
    );

    reports::print_report(&report, format)
}
