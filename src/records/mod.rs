pub mod loader;

/// Category used for records that carry no industry.
pub const UNCLASSIFIED: &str = "unclassified";

/// Raw return cell as supplied by the loading layer.
#[derive(Debug, Clone, PartialEq)]
pub enum ReturnValue {
    Number(f64),
    Text(String),
}

impl ReturnValue {
    /// Numeric conversion. `None` for unparsable text and for non-finite values.
    pub fn to_finite(&self) -> Option<f64> {
        let value = match self {
            Self::Number(v) => *v,
            Self::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for ReturnValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for ReturnValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// One identified stock mention for a single day.
///
/// `score` is `NaN` when the upstream value could not be read as a number;
/// the filter rejects such records instead of the loader.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub score: f64,
    pub ret: Option<ReturnValue>,
    pub industry: Option<String>,
}

impl Record {
    pub fn new(score: f64, ret: Option<ReturnValue>, industry: Option<String>) -> Self {
        Self {
            score,
            ret,
            industry,
        }
    }

    pub fn with_return(score: f64, ret: impl Into<ReturnValue>) -> Self {
        Self::new(score, Some(ret.into()), None)
    }

    pub fn without_return(score: f64) -> Self {
        Self::new(score, None, None)
    }

    pub fn in_industry(mut self, industry: &str) -> Self {
        self.industry = Some(industry.to_string());
        self
    }

    /// Industry label, matched exactly. Missing or all-blank values become
    /// [`UNCLASSIFIED`]; anything else is kept byte for byte.
    pub fn industry_label(&self) -> &str {
        match self.industry.as_deref() {
            Some(s) if !s.trim().is_empty() => s,
            _ => UNCLASSIFIED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_return_text_is_trimmed() {
        assert_eq!(ReturnValue::from(" 1.25 ").to_finite(), Some(1.25));
    }

    #[test]
    fn test_return_rejects_garbage_and_non_finite() {
        assert_eq!(ReturnValue::from("n/a").to_finite(), None);
        assert_eq!(ReturnValue::from("NaN").to_finite(), None);
        assert_eq!(ReturnValue::from("inf").to_finite(), None);
        assert_eq!(ReturnValue::Number(f64::NAN).to_finite(), None);
    }

    #[test]
    fn test_blank_industry_is_unclassified() {
        let rec = Record::with_return(50.0, 1.0).in_industry("   ");
        assert_eq!(rec.industry_label(), UNCLASSIFIED);
        assert_eq!(Record::without_return(1.0).industry_label(), UNCLASSIFIED);
    }

    #[test]
    fn test_industry_label_is_not_trimmed() {
        let rec = Record::with_return(50.0, 1.0).in_industry("Chips ");
        assert_eq!(rec.industry_label(), "Chips ");
    }
}
