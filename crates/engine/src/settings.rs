//! Trip settings: the family roster and the recognized currencies.

use serde::{Deserialize, Serialize};

use crate::CurrencyConfig;

/// Settings document shared by every trip view.
///
/// `family_members` is both the set of valid payers and the equal-split
/// cohort; its order drives report ordering. `currencies` is iterated in
/// configured order when building settlements.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub family_members: Vec<String>,
    #[serde(default)]
    pub currencies: Vec<CurrencyConfig>,
    #[serde(default)]
    pub categories: Vec<String>,
}

impl Settings {
    /// Returns `true` if `code` is one of the configured currencies.
    pub fn has_currency(&self, code: &str) -> bool {
        self.currencies.iter().any(|c| c.code.code() == code)
    }

    /// Returns `true` if `name` is on the roster.
    pub fn has_member(&self, name: &str) -> bool {
        self.family_members.iter().any(|m| m == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_stored_settings() {
        let raw = r#"{
            "currency": "EUR",
            "timezone": "Europe/Vienna",
            "currencies": [{"code": "EUR", "name": "Euro"}, {"code": "twd", "name": "New Taiwan dollar"}],
            "familyMembers": ["Dad", "Mom", "Kid A", "Kid B"],
            "categories": ["Food", "Tickets"]
        }"#;

        let settings: Settings = serde_json::from_str(raw).unwrap();
        assert_eq!(settings.family_members.len(), 4);
        assert!(settings.has_currency("TWD"));
        assert!(!settings.has_currency("JPY"));
        assert!(settings.has_member("Kid A"));
        assert!(!settings.has_member("Grandma"));
    }
}
