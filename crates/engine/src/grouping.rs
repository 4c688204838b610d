//! Per-currency partitioning of the flat expense list.

use serde::Serialize;

use crate::{CurrencyCode, CurrencyConfig, Day, Expense, aggregate::day_expenses};

/// The expenses of one configured currency, in list order.
#[derive(Clone, Debug, PartialEq)]
pub struct CurrencyGroup<'a> {
    pub currency: CurrencyCode,
    pub expenses: Vec<&'a Expense>,
}

/// Sum of amounts spent in one currency.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CurrencyTotal {
    pub currency: CurrencyCode,
    pub total: f64,
}

/// Partitions `expenses` by the configured currencies.
///
/// Groups follow the order of `currencies`, not encounter order. Currencies
/// without expenses produce no group, and a code configured twice is grouped
/// once at its first position. Expenses in a currency that is not configured
/// are left out.
pub fn group_by_currency<'a>(
    expenses: &'a [Expense],
    currencies: &[CurrencyConfig],
) -> Vec<CurrencyGroup<'a>> {
    let mut groups: Vec<CurrencyGroup<'a>> = Vec::with_capacity(currencies.len());

    for config in currencies {
        if groups.iter().any(|g| g.currency == config.code) {
            continue;
        }
        let in_currency: Vec<&Expense> = expenses
            .iter()
            .filter(|expense| expense.currency == config.code)
            .collect();
        if in_currency.is_empty() {
            continue;
        }
        groups.push(CurrencyGroup {
            currency: config.code.clone(),
            expenses: in_currency,
        });
    }

    groups
}

/// Totals per currency in first-encounter order, over every expense.
pub fn totals_by_currency(expenses: &[Expense]) -> Vec<CurrencyTotal> {
    let mut totals: Vec<CurrencyTotal> = Vec::new();
    for expense in expenses {
        match totals.iter_mut().find(|t| t.currency == expense.currency) {
            Some(entry) => entry.total += expense.amount,
            None => totals.push(CurrencyTotal {
                currency: expense.currency.clone(),
                total: expense.amount,
            }),
        }
    }
    totals
}

/// Totals per currency of a single day's activity expenses.
pub fn daily_totals(day: &Day) -> Vec<CurrencyTotal> {
    totals_by_currency(&day_expenses(day).expenses)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::{Activity, ExpenseRecord, ExpenseSource};

    fn code(value: &str) -> CurrencyCode {
        CurrencyCode::try_from(value).unwrap()
    }

    fn config(value: &str) -> CurrencyConfig {
        CurrencyConfig {
            code: code(value),
            name: value.to_string(),
        }
    }

    fn expense(id: &str, amount: f64, currency: &str) -> Expense {
        Expense {
            id: id.to_string(),
            amount,
            currency: code(currency),
            description: String::new(),
            payer: "Dad".to_string(),
            category: String::new(),
            date: NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
            note: None,
            source: ExpenseSource::Independent,
        }
    }

    #[test]
    fn groups_follow_configured_order() {
        let expenses = vec![
            expense("e1", 10.0, "TWD"),
            expense("e2", 5.0, "EUR"),
            expense("e3", 20.0, "TWD"),
        ];
        let groups = group_by_currency(&expenses, &[config("EUR"), config("TWD")]);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].currency.code(), "EUR");
        assert_eq!(groups[1].currency.code(), "TWD");
        let twd_ids: Vec<_> = groups[1].expenses.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(twd_ids, ["e1", "e3"]);
    }

    #[test]
    fn omits_empty_and_unconfigured_currencies() {
        let expenses = vec![expense("e1", 10.0, "JPY"), expense("e2", 5.0, "EUR")];
        let groups = group_by_currency(&expenses, &[config("TWD"), config("EUR"), config("EUR")]);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].currency.code(), "EUR");
        assert_eq!(groups[0].expenses.len(), 1);
    }

    #[test]
    fn totals_keep_encounter_order() {
        let expenses = vec![
            expense("e1", 10.0, "TWD"),
            expense("e2", 5.5, "EUR"),
            expense("e3", 20.0, "TWD"),
            expense("e4", 1.0, "JPY"),
        ];
        let totals = totals_by_currency(&expenses);

        let flat: Vec<_> = totals
            .iter()
            .map(|t| (t.currency.code(), t.total))
            .collect();
        assert_eq!(flat, [("TWD", 30.0), ("EUR", 5.5), ("JPY", 1.0)]);
    }

    #[test]
    fn daily_totals_cover_one_day() {
        let day = Day {
            index: 0,
            date: NaiveDate::from_ymd_opt(2026, 3, 30).unwrap(),
            activities: vec![Activity {
                id: "a1".to_string(),
                name: Some("Train".to_string()),
                expenses: vec![
                    ExpenseRecord {
                        id: "e1".to_string(),
                        amount: Some(30.0),
                        currency: Some("EUR".to_string()),
                        ..Default::default()
                    },
                    ExpenseRecord {
                        id: "e2".to_string(),
                        amount: Some(3.5),
                        currency: Some("EUR".to_string()),
                        ..Default::default()
                    },
                    ExpenseRecord {
                        id: "broken".to_string(),
                        amount: None,
                        currency: Some("EUR".to_string()),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            }],
        };

        let totals = daily_totals(&day);
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].total, 33.5);
    }
}
