use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreLensError {
    #[error("Record file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Delimited record parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON records/settings parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid analysis settings: {0}")]
    Config(String),

    #[error("Rejected input: {0}")]
    Validation(String),

    /// The caller handed over records that cannot be analysed at all
    /// (e.g. no record carries a usable score).
    #[error("Unusable record set: {0}")]
    MalformedInput(String),
}

pub type SlResult<T> = Result<T, ScoreLensError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_failing_stage() {
        let err = ScoreLensError::Validation("score column 'x' not found in header".into());
        assert_eq!(err.to_string(), "Rejected input: score column 'x' not found in header");

        let err = ScoreLensError::MalformedInput("none of the 2 records carries a numeric score".into());
        assert!(err.to_string().starts_with("Unusable record set"));

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert_eq!(ScoreLensError::from(io).to_string(), "Record file I/O error: gone");
    }
}
