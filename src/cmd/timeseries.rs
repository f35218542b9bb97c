use crate::reports::{self, OutputFormat};
use clap::Args;
use scorelens::analysis::timeseries::{build_series, collect_inputs};
use scorelens::config::AnalysisConfig;
use scorelens::records::loader::InputFormat;
use scorelens::{ScoreLensError, SlResult};
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct TimeseriesArgs {
    /// Daily record files, or directories holding them. Each file is dated
    /// from the last `_`-separated part of its name.
    #[arg(required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,

    #[arg(short = 'i', long, value_enum, default_value_t = InputFormat::Tsv)]
    pub input_format: InputFormat,

    #[command(flatten)]
    pub config: AnalysisConfig,
}

pub fn run(args: &TimeseriesArgs, config: &AnalysisConfig, format: OutputFormat) -> SlResult<()> {
    let options = config.to_options()?;
    let inputs = collect_inputs(&args.inputs, args.input_format)?;
    if inputs.is_empty() {
        return Err(ScoreLensError::Validation(format!(
            "no .{} files found in the given inputs",
            args.input_format
        )));
    }

    let points = build_series(&inputs, args.input_format, &config.columns, &options);
    info!(
        "📈 {} series rows from {} dated files.",
        points.len(),
        inputs.len()
    );

    reports::print_series(&points, format)
}
