use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use reports::OutputFormat;
use scorelens::config::AnalysisConfig;
use scorelens::SlResult;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// JSON file with analysis settings; explicit flags override it.
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Correlation, score bands and industries for one record file.
    Analyze(cmd::analyze::AnalyzeArgs),
    /// Stats for a single caller-chosen score range.
    Band(cmd::band::BandArgs),
    /// Per-date band and industry mean returns across several daily files.
    Timeseries(cmd::timeseries::TimeseriesArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let (cli_config, sub_name) = match &cli.command {
        Commands::Analyze(args) => (&args.config, "analyze"),
        Commands::Band(args) => (&args.config, "band"),
        Commands::Timeseries(args) => (&args.config, "timeseries"),
    };
    let sub_matches = matches.subcommand_matches(sub_name).unwrap_or(&matches);

    let config = resolve_config(cli.config.as_deref(), cli_config, sub_matches).unwrap_or_else(|e| {
        error!("❌ {}", e);
        process::exit(1);
    });

    let result = match &cli.command {
        Commands::Analyze(args) => cmd::analyze::run(args, &config, cli.format),
        Commands::Band(args) => cmd::band::run(args, &config, cli.format),
        Commands::Timeseries(args) => cmd::timeseries::run(args, &config, cli.format),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}

fn resolve_config(
    path: Option<&str>,
    cli_config: &AnalysisConfig,
    sub_matches: &clap::ArgMatches,
) -> SlResult<AnalysisConfig> {
    match path {
        Some(path) => {
            info!("⚙️  Loading settings from: {}", path);
            let mut file_config = AnalysisConfig::load_from_file(path)?;
            file_config.merge_from_cli(cli_config, sub_matches);
            Ok(file_config)
        }
        None => Ok(cli_config.clone()),
    }
}
