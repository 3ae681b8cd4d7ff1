//! Discount Codes

use std::{num::ParseIntError, str::FromStr};

use rustc_hash::FxHashMap;
use thiserror::Error;

/// Static mapping from code to a fixed deduction in minor units.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscountTable {
    codes: FxHashMap<String, u64>,
}

impl DiscountTable {
    #[must_use]
    pub fn amount_for(&self, code: &str) -> Option<u64> {
        self.codes.get(code).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl FromIterator<(String, u64)> for DiscountTable {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        Self {
            codes: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DiscountParseError {
    #[error("expected CODE=amount, got {0:?}")]
    MissingSeparator(String),

    #[error("discount code must not be empty")]
    EmptyCode,

    #[error("invalid amount for {code}: {source}")]
    InvalidAmount {
        code: String,
        #[source]
        source: ParseIntError,
    },
}

/// Parses a comma separated `CODE=amount` list, e.g.
/// `AMOUNT100=10000,AMOUNT200=20000`.
impl FromStr for DiscountTable {
    type Err = DiscountParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        value
            .split(',')
            .map(str::trim)
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (code, amount) = pair
                    .split_once('=')
                    .ok_or_else(|| DiscountParseError::MissingSeparator(pair.to_string()))?;

                let code = code.trim();

                if code.is_empty() {
                    return Err(DiscountParseError::EmptyCode);
                }

                let amount = amount
                    .trim()
                    .parse::<u64>()
                    .map_err(|source| DiscountParseError::InvalidAmount {
                        code: code.to_string(),
                        source,
                    })?;

                Ok((code.to_string(), amount))
            })
            .collect()
    }
}
