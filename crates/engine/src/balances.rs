//! Equal-split balances for one currency.
//!
//! Every roster member owes the same share of the currency's total. A
//! member's balance is what they paid minus that share: positive balances are
//! owed money, negative balances owe money. Amounts are summed as plain `f64`
//! with no intermediate rounding.

use serde::Serialize;

use crate::{EngineError, Expense, ResultEngine};

/// One member's position in a currency.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MemberBalance {
    pub member: String,
    pub paid: f64,
    pub balance: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyBalances {
    pub total: f64,
    pub per_person: f64,
    /// One entry per roster member, in roster order.
    pub balances: Vec<MemberBalance>,
}

/// Computes total, per-person share and member balances.
///
/// Fails with [`EngineError::InvalidConfiguration`] when `members` is empty
/// and with [`EngineError::UnknownMember`] when an expense's payer is not on
/// the roster.
pub fn compute_balances(
    expenses: &[&Expense],
    members: &[String],
) -> ResultEngine<CurrencyBalances> {
    if members.is_empty() {
        return Err(EngineError::InvalidConfiguration(
            "cannot split expenses without family members".to_string(),
        ));
    }

    let mut paid = vec![0.0_f64; members.len()];
    let mut total = 0.0_f64;
    for expense in expenses {
        let position = members
            .iter()
            .position(|member| *member == expense.payer)
            .ok_or_else(|| EngineError::UnknownMember(expense.payer.clone()))?;
        paid[position] += expense.amount;
        total += expense.amount;
    }

    let per_person = total / members.len() as f64;
    let balances = members
        .iter()
        .zip(paid)
        .map(|(member, paid)| MemberBalance {
            member: member.clone(),
            paid,
            balance: paid - per_person,
        })
        .collect();

    Ok(CurrencyBalances {
        total,
        per_person,
        balances,
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::{CurrencyCode, ExpenseSource};

    fn members(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn paid_by(payer: &str, amount: f64) -> Expense {
        Expense {
            id: format!("{payer}-{amount}"),
            amount,
            currency: CurrencyCode::try_from("EUR").unwrap(),
            description: String::new(),
            payer: payer.to_string(),
            category: String::new(),
            date: NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
            note: None,
            source: ExpenseSource::Independent,
        }
    }

    #[test]
    fn splits_equally() {
        let expenses = [paid_by("A", 90.0)];
        let refs: Vec<&Expense> = expenses.iter().collect();
        let result = compute_balances(&refs, &members(&["A", "B", "C"])).unwrap();

        assert_eq!(result.total, 90.0);
        assert_eq!(result.per_person, 30.0);
        let flat: Vec<_> = result
            .balances
            .iter()
            .map(|b| (b.member.as_str(), b.paid, b.balance))
            .collect();
        assert_eq!(
            flat,
            [("A", 90.0, 60.0), ("B", 0.0, -30.0), ("C", 0.0, -30.0)]
        );
    }

    #[test]
    fn empty_roster_is_a_configuration_error() {
        let expenses = [paid_by("A", 10.0)];
        let refs: Vec<&Expense> = expenses.iter().collect();
        let err = compute_balances(&refs, &[]).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfiguration(_)));
    }

    #[test]
    fn unknown_payer_is_rejected() {
        let expenses = [paid_by("Grandma", 10.0)];
        let refs: Vec<&Expense> = expenses.iter().collect();
        let err = compute_balances(&refs, &members(&["A", "B"])).unwrap_err();
        assert_eq!(err, EngineError::UnknownMember("Grandma".to_string()));
    }

    #[test]
    fn balances_sum_to_zero() {
        let expenses = [
            paid_by("A", 4.5),
            paid_by("B", 30.0),
            paid_by("A", 3.5),
            paid_by("C", 22.0),
        ];
        let refs: Vec<&Expense> = expenses.iter().collect();
        let result = compute_balances(&refs, &members(&["A", "B", "C", "D"])).unwrap();

        let sum: f64 = result.balances.iter().map(|b| b.balance).sum();
        assert!(sum.abs() < 1e-9);
    }
}
