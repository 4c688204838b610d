//! CSV export of the finance views.

use std::io::Write;

use csv::Writer;
use engine::{CurrencyTotal, Expense, SettlementReport};
use serde::Serialize;

use crate::error::Result;

#[derive(Serialize)]
struct TransferRow<'a> {
    currency: &'a str,
    from: &'a str,
    to: &'a str,
    amount: String,
}

#[derive(Serialize)]
struct ExpenseRow<'a> {
    date: String,
    description: &'a str,
    activity: &'a str,
    category: &'a str,
    payer: &'a str,
    amount: String,
    currency: &'a str,
    note: &'a str,
}

#[derive(Serialize)]
struct TotalRow<'a> {
    currency: &'a str,
    total: String,
}

pub fn settlements(out: impl Write, report: &SettlementReport) -> Result<()> {
    let mut writer = Writer::from_writer(out);
    for settlement in report {
        for transfer in &settlement.transactions {
            writer.serialize(TransferRow {
                currency: settlement.currency.code(),
                from: &transfer.from,
                to: &transfer.to,
                amount: settlement.currency.format_amount(transfer.amount),
            })?;
        }
    }
    writer.flush()?;
    Ok(())
}

pub fn expenses(out: impl Write, expenses: &[Expense]) -> Result<()> {
    let mut writer = Writer::from_writer(out);
    for expense in expenses {
        writer.serialize(ExpenseRow {
            date: expense.date.to_string(),
            description: &expense.description,
            activity: expense.activity_name().unwrap_or_default(),
            category: &expense.category,
            payer: &expense.payer,
            amount: expense.currency.format_amount(expense.amount),
            currency: expense.currency.code(),
            note: expense.note.as_deref().unwrap_or_default(),
        })?;
    }
    writer.flush()?;
    Ok(())
}

pub fn totals(out: impl Write, totals: &[CurrencyTotal]) -> Result<()> {
    let mut writer = Writer::from_writer(out);
    for total in totals {
        writer.serialize(TotalRow {
            currency: total.currency.code(),
            total: total.currency.format_amount(total.total),
        })?;
    }
    writer.flush()?;
    Ok(())
}
