//! Per-currency settlement report.
//!
//! The report is the artifact handed to display and export code. Values keep
//! full `f64` precision; rounding is left to presentation.

use serde::{Serialize, Serializer};

use crate::{
    CurrencyCode, MemberBalance, ResultEngine,
    balances::compute_balances,
    grouping::CurrencyGroup,
    matcher::{Transfer, settle_balances},
};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencySettlement {
    #[serde(skip)]
    pub currency: CurrencyCode,
    pub total: f64,
    pub per_person: f64,
    pub balances: Vec<MemberBalance>,
    pub transactions: Vec<Transfer>,
}

/// Settlements keyed by currency, in configured currency order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SettlementReport {
    currencies: Vec<CurrencySettlement>,
}

impl SettlementReport {
    pub fn get(&self, code: &str) -> Option<&CurrencySettlement> {
        self.currencies.iter().find(|s| s.currency.code() == code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CurrencySettlement> {
        self.currencies.iter()
    }

    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }
}

impl<'a> IntoIterator for &'a SettlementReport {
    type Item = &'a CurrencySettlement;
    type IntoIter = std::slice::Iter<'a, CurrencySettlement>;

    fn into_iter(self) -> Self::IntoIter {
        self.currencies.iter()
    }
}

/// Serialized as an object keyed by currency code.
impl Serialize for SettlementReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.currencies.iter().map(|s| (s.currency.code(), s)))
    }
}

/// Builds the report from already grouped expenses.
pub fn build_report(
    groups: &[CurrencyGroup<'_>],
    members: &[String],
    tolerance: f64,
) -> ResultEngine<SettlementReport> {
    let mut currencies = Vec::with_capacity(groups.len());

    for group in groups {
        let balances = compute_balances(&group.expenses, members)?;
        let transactions = settle_balances(&balances.balances, tolerance);
        tracing::debug!(
            currency = %group.currency,
            expenses = group.expenses.len(),
            total = balances.total,
            transfers = transactions.len(),
            "settled currency"
        );
        currencies.push(CurrencySettlement {
            currency: group.currency.clone(),
            total: balances.total,
            per_person: balances.per_person,
            balances: balances.balances,
            transactions,
        });
    }

    Ok(SettlementReport { currencies })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::{Expense, ExpenseSource, matcher::DEFAULT_TOLERANCE};

    fn expense(payer: &str, amount: f64, currency: &str) -> Expense {
        Expense {
            id: format!("{payer}-{currency}-{amount}"),
            amount,
            currency: CurrencyCode::try_from(currency).unwrap(),
            description: String::new(),
            payer: payer.to_string(),
            category: String::new(),
            date: NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
            note: None,
            source: ExpenseSource::Independent,
        }
    }

    #[test]
    fn serializes_as_map_in_group_order() {
        let twd = expense("A", 1000.0, "TWD");
        let eur = expense("B", 100.0, "EUR");
        let groups = vec![
            CurrencyGroup {
                currency: twd.currency.clone(),
                expenses: vec![&twd],
            },
            CurrencyGroup {
                currency: eur.currency.clone(),
                expenses: vec![&eur],
            },
        ];
        let members = vec!["A".to_string(), "B".to_string()];

        let report = build_report(&groups, &members, DEFAULT_TOLERANCE).unwrap();
        assert_eq!(report.len(), 2);

        let json = serde_json::to_string(&report).unwrap();
        assert!(
            json.starts_with(r#"{"TWD":{"total":1000.0,"perPerson":500.0"#)
        );
        assert!(json.contains(r#""EUR":{"total":100.0"#));
        assert!(
            json.contains(r#""transactions":[{"from":"A","to":"B","amount":50.0}]"#)
        );
    }

    #[test]
    fn propagates_empty_roster() {
        let eur = expense("A", 10.0, "EUR");
        let groups = vec![CurrencyGroup {
            currency: eur.currency.clone(),
            expenses: vec![&eur],
        }];
        assert!(build_report(&groups, &[], DEFAULT_TOLERANCE).is_err());
        assert!(build_report(&[], &[], DEFAULT_TOLERANCE).unwrap().is_empty());
    }
}
