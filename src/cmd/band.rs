use super::{load_and_analyze, InputArgs};
use crate::reports::{self, OutputFormat};
use clap::Args;
use scorelens::config::AnalysisConfig;
use scorelens::{ScoreLensError, SlResult};

#[derive(Args, Debug, Clone)]
pub struct BandArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub config: AnalysisConfig,
}

pub fn run(args: &BandArgs, config: &AnalysisConfig, format: OutputFormat) -> SlResult<()> {
    let options = config.to_options()?;
    if options.custom_band.is_none() {
        return Err(ScoreLensError::Config(
            "band requires --custom-min and --custom-max".to_string(),
        ));
    }

    let report = load_and_analyze(&args.input, config, &options)?;

    match report.custom_band.as_ref() {
        Some(stats) => reports::print_segment(stats, report.is_insufficient(), format),
        None => Ok(()),
    }
}
