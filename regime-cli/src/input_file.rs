//! Optional TOML input file with the nine business figures.
//!
//! Every key is optional; missing keys fall back to zero (or the 2026
//! VAT threshold). Explicit command-line flags override file values.
//!
//! ```toml
//! trainings = 8_000_000
//! camps = 0
//! royalty = 6_000_000
//! goods = 1_000_000
//! usn_expenses = 1_200_000
//! ausn_expenses = 1_200_000
//! prev_year_revenue = 15_000_000
//! vat_threshold = 10_000_000
//! patent_cost = 200_000
//! ```

use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading an input file.
#[derive(Debug, Error)]
pub enum InputFileError {
    #[error("cannot read input file '{path}'")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid input file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// The deserialized input file. Field names double as the `field = value`
/// names the interactive mode accepts.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputFile {
    pub trainings: Option<Decimal>,
    pub camps: Option<Decimal>,
    pub royalty: Option<Decimal>,
    pub goods: Option<Decimal>,
    pub usn_expenses: Option<Decimal>,
    pub ausn_expenses: Option<Decimal>,
    pub prev_year_revenue: Option<Decimal>,
    pub vat_threshold: Option<Decimal>,
    pub patent_cost: Option<Decimal>,
}

impl InputFile {
    /// Reads and parses a TOML input file.
    pub fn load(path: &Path) -> Result<Self, InputFileError> {
        let text = std::fs::read_to_string(path).map_err(|e| InputFileError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        toml::from_str(&text).map_err(|e| InputFileError::Parse {
            path: path.display().to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parses_a_full_file() {
        let file: InputFile = toml::from_str(
            r#"
            trainings = 8000000
            camps = 0
            royalty = 6000000
            goods = 1000000
            usn_expenses = 1200000
            ausn_expenses = 1200000
            prev_year_revenue = 15000000
            vat_threshold = 10000000
            patent_cost = 200000
            "#,
        )
        .unwrap();

        assert_eq!(file.trainings, Some(dec!(8000000)));
        assert_eq!(file.patent_cost, Some(dec!(200000)));
    }

    #[test]
    fn missing_keys_stay_unset() {
        let file: InputFile = toml::from_str("royalty = 500000").unwrap();

        assert_eq!(file.royalty, Some(dec!(500000)));
        assert_eq!(file.trainings, None);
        assert_eq!(file.vat_threshold, None);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<InputFile, _> = toml::from_str("revenue = 1");

        assert!(result.is_err());
    }
}
