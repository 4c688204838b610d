//! Greedy debt netting.
//!
//! Debtors are taken most negative first and creditors most positive first;
//! each step moves the smaller of the two open amounts. This tends to keep
//! the number of transfers low but is not a proven minimum for every balance
//! distribution.

use serde::Serialize;

use crate::MemberBalance;

/// Absolute tolerance below which a balance or transfer counts as zero.
///
/// The same constant applies to every currency.
pub const DEFAULT_TOLERANCE: f64 = 0.01;

/// A payment from a debtor to a creditor.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Transfer {
    pub from: String,
    pub to: String,
    pub amount: f64,
}

struct Open<'a> {
    member: &'a str,
    remaining: f64,
}

/// Produces the transfers that bring every balance within `tolerance` of zero.
///
/// Never fails. Members whose balance is within `tolerance` of zero take no
/// part, and dust left over by floating-point drift is dropped.
pub fn settle_balances(balances: &[MemberBalance], tolerance: f64) -> Vec<Transfer> {
    let mut debtors: Vec<Open<'_>> = balances
        .iter()
        .filter(|b| b.balance < 0.0 && b.balance.abs() >= tolerance)
        .map(|b| Open {
            member: &b.member,
            remaining: b.balance,
        })
        .collect();
    let mut creditors: Vec<Open<'_>> = balances
        .iter()
        .filter(|b| b.balance > 0.0 && b.balance.abs() >= tolerance)
        .map(|b| Open {
            member: &b.member,
            remaining: b.balance,
        })
        .collect();

    // Stable sorts: equal balances keep roster order.
    debtors.sort_by(|a, b| a.remaining.total_cmp(&b.remaining));
    creditors.sort_by(|a, b| b.remaining.total_cmp(&a.remaining));

    let mut transfers = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < debtors.len() && j < creditors.len() {
        let debtor = &mut debtors[i];
        let creditor = &mut creditors[j];
        let amount = (-debtor.remaining).min(creditor.remaining);

        if amount > tolerance {
            transfers.push(Transfer {
                from: debtor.member.to_string(),
                to: creditor.member.to_string(),
                amount,
            });
        }

        debtor.remaining += amount;
        creditor.remaining -= amount;

        if debtor.remaining.abs() < tolerance {
            i += 1;
        }
        if creditor.remaining.abs() < tolerance {
            j += 1;
        }
    }

    transfers
}
