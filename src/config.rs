use crate::analysis::correlation::RankMethod;
use crate::analysis::segment::{ScoreBand, MIN_CORRELATION_MEMBERS};
use crate::analysis::AnalysisOptions;
use crate::error::{ScoreLensError, SlResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisConfig {
    #[command(flatten)]
    pub columns: ColumnNames,
    #[command(flatten)]
    pub params: AnalysisParams,
}

/// Header names used by the loader.
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    #[arg(long, default_value = "final_score_penalized")]
    pub score_column: String,
    #[arg(long, default_value = "return")]
    pub return_column: String,
    #[arg(long, default_value = "industry")]
    pub industry_column: String,
    #[arg(long, default_value = "identified_stock_names")]
    pub name_column: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            score_column: "final_score_penalized".to_string(),
            return_column: "return".to_string(),
            industry_column: "industry".to_string(),
            name_column: "identified_stock_names".to_string(),
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisParams {
    // === CUSTOM BAND (inclusive on both ends) ===
    #[arg(long)]
    pub custom_min: Option<f64>,
    #[arg(long)]
    pub custom_max: Option<f64>,

    // === CORRELATION ===
    #[arg(long, value_enum, default_value_t = RankMethod::Ordinal)]
    pub rank_method: RankMethod,

    // Industries smaller than this report no correlation
    #[arg(long, default_value_t = MIN_CORRELATION_MEMBERS)]
    pub min_industry_members: usize,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            custom_min: None,
            custom_max: None,
            rank_method: RankMethod::Ordinal,
            min_industry_members: MIN_CORRELATION_MEMBERS,
        }
    }
}

impl AnalysisConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SlResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ScoreLensError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Overwrites fields with values the user typed on the command line.
    /// Defaults filled in by clap do not count.
    pub fn merge_from_cli(&mut self, cli: &AnalysisConfig, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($group:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$group.$field = cli.$group.$field.clone();
                }
            };
        }

        update_if_present!(columns.score_column);
        update_if_present!(columns.return_column);
        update_if_present!(columns.industry_column);
        update_if_present!(columns.name_column);

        update_if_present!(params.custom_min);
        update_if_present!(params.custom_max);
        update_if_present!(params.rank_method);
        update_if_present!(params.min_industry_members);
    }

    pub fn to_options(&self) -> SlResult<AnalysisOptions> {
        let p = &self.params;

        if p.min_industry_members < MIN_CORRELATION_MEMBERS {
            return Err(ScoreLensError::Config(format!(
                "--min-industry-members must be at least {}",
                MIN_CORRELATION_MEMBERS
            )));
        }

        let custom_band = match (p.custom_min, p.custom_max) {
            (Some(min), Some(max)) => Some(ScoreBand::custom(min, max)?),
            (None, None) => None,
            _ => {
                return Err(ScoreLensError::Config(
                    "--custom-min and --custom-max must be given together".to_string(),
                ))
            }
        };

        Ok(AnalysisOptions {
            custom_band,
            rank_method: p.rank_method,
            min_industry_members: p.min_industry_members,
        })
    }
}
