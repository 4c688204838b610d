//! Currency codes and the configured currency list.
//!
//! Codes are free-form (any short alphanumeric code the trip settings list),
//! not a closed enum: expenses are only ever grouped by code.

use serde::{Deserialize, Deserializer, Serialize};

use crate::EngineError;

/// ISO-like currency code attached to every expense.
///
/// Trips usually mix a home currency with the local one (for example `TWD`
/// and `EUR`), and each code is settled on its own: amounts in different
/// currencies are never added together.
///
/// Codes are trimmed and upper-cased on construction, so `" eur"` and `"EUR"`
/// name the same currency.
///
/// ## Minor units
///
/// `minor_units()` returns how many decimal digits are shown when presenting
/// an amount. The engine itself never rounds: balances and transfers keep full
/// `f64` precision and callers format them with [`CurrencyCode::format_amount`].
///
/// ```rust
/// use engine::CurrencyCode;
///
/// let eur = CurrencyCode::try_from("eur").unwrap();
/// assert_eq!(eur.code(), "EUR");
/// assert_eq!(eur.format_amount(12.346), "12.35");
///
/// let twd = CurrencyCode::try_from("TWD").unwrap();
/// assert_eq!(twd.format_amount(1234.4), "1234");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

/// Currencies displayed without fraction digits.
const ZERO_DECIMAL_CODES: [&str; 3] = ["TWD", "JPY", "KRW"];

impl CurrencyCode {
    /// Canonical currency code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.0
    }

    /// Number of fraction digits used when formatting amounts.
    #[must_use]
    pub fn minor_units(&self) -> usize {
        if ZERO_DECIMAL_CODES.contains(&self.0.as_str()) {
            0
        } else {
            2
        }
    }

    /// Formats `amount` with the currency's minor units.
    #[must_use]
    pub fn format_amount(&self, amount: f64) -> String {
        format!("{amount:.prec$}", prec = self.minor_units())
    }
}

impl core::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl TryFrom<&str> for CurrencyCode {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let code = value.trim().to_ascii_uppercase();
        if code.is_empty() {
            return Err(EngineError::InvalidCurrency(
                "currency code must not be empty".to_string(),
            ));
        }
        if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(EngineError::InvalidCurrency(format!(
                "unsupported currency: {code}"
            )));
        }
        Ok(Self(code))
    }
}

impl<'de> Deserialize<'de> for CurrencyCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        CurrencyCode::try_from(raw.as_str()).map_err(serde::de::Error::custom)
    }
}

/// A currency recognized by the trip settings, with its display name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyConfig {
    pub code: CurrencyCode,
    #[serde(default)]
    pub name: String,
}
