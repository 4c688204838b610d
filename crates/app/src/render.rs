//! Human readable output, one line per item.
//!
//! Amounts are rounded with the currency's minor units (TWD without decimals,
//! most others with two).

use std::io::Write;

use engine::{CurrencyTotal, Expense, SettlementReport};

use crate::error::Result;

pub fn settlements(out: &mut impl Write, report: &SettlementReport) -> Result<()> {
    if report.is_empty() {
        writeln!(out, "No expenses to settle.")?;
        return Ok(());
    }

    for settlement in report {
        let currency = &settlement.currency;
        writeln!(out, "{currency} settlement")?;
        writeln!(
            out,
            "  total: {} {currency}, per person: {} {currency}",
            currency.format_amount(settlement.total),
            currency.format_amount(settlement.per_person),
        )?;
        if settlement.transactions.is_empty() {
            writeln!(out, "  nothing to settle")?;
        }
        for transfer in &settlement.transactions {
            writeln!(
                out,
                "  {} → {}: {} {currency}",
                transfer.from,
                transfer.to,
                currency.format_amount(transfer.amount),
            )?;
        }
    }
    Ok(())
}

pub fn expenses(out: &mut impl Write, expenses: &[Expense]) -> Result<()> {
    for expense in expenses {
        let mut line = format!(
            "{} {} {} {}",
            expense.date,
            expense.currency.format_amount(expense.amount),
            expense.currency,
            expense.description,
        );
        if let Some(activity) = expense.activity_name() {
            line.push_str(&format!(" ({activity})"));
        }
        line.push_str(&format!(" • {}", expense.payer));
        if !expense.category.is_empty() {
            line.push_str(&format!(" • {}", expense.category));
        }
        writeln!(out, "{line}")?;
    }
    Ok(())
}

pub fn totals(out: &mut impl Write, totals: &[CurrencyTotal]) -> Result<()> {
    for total in totals {
        writeln!(
            out,
            "{} {}",
            total.currency.format_amount(total.total),
            total.currency
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use engine::{Engine, Settings, TripData};

    use super::*;

    fn summary() -> engine::TripSummary {
        let settings: Settings = serde_json::from_str(
            r#"{"familyMembers": ["Dad", "Mom"],
                "currencies": [{"code": "EUR", "name": "Euro"}, {"code": "TWD", "name": "NTD"}]}"#,
        )
        .unwrap();
        let trip: TripData = serde_json::from_str(
            r#"{"days": [{"index": 0, "date": "2026-03-30", "activities": [
                    {"id": "a1", "description": "Ferry", "expenses": [
                        {"id": "e1", "amount": 3.5, "currency": "EUR", "payer": "Dad",
                         "description": "Ferry", "category": "Transport"}]}]}],
                "independentExpenses": [
                    {"id": "i1", "amount": 1502, "currency": "TWD", "payer": "Mom",
                     "description": "Airport bus", "date": "2026-03-29"}]}"#,
        )
        .unwrap();
        Engine::builder()
            .settings(settings)
            .build()
            .unwrap()
            .summarize(&trip)
            .unwrap()
    }

    #[test]
    fn renders_settlements_with_minor_units() {
        let mut out = Vec::new();
        settlements(&mut out, &summary().settlements).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "EUR settlement\n  total: 3.50 EUR, per person: 1.75 EUR\n  Mom → Dad: 1.75 EUR\n\
             TWD settlement\n  total: 1502 TWD, per person: 751 TWD\n  Dad → Mom: 751 TWD\n"
        );
    }

    #[test]
    fn renders_expenses_by_date() {
        let mut out = Vec::new();
        expenses(&mut out, &summary().expenses).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "2026-03-29 1502 TWD Airport bus • Mom",
                "2026-03-30 3.50 EUR Ferry (Ferry) • Dad • Transport",
            ]
        );
    }

    #[test]
    fn renders_empty_report() {
        let mut out = Vec::new();
        settlements(&mut out, &SettlementReport::default()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No expenses to settle.\n");
    }
}
