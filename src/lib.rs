pub mod analysis;
pub mod config;
pub mod error;
pub mod records;
// cmd and reports belong to the binary (main.rs).

pub use analysis::{analyze, AnalysisOptions, AnalysisReport, SampleStatus};
pub use error::{ScoreLensError, SlResult};
pub use records::{Record, ReturnValue};
