//! Flattens a trip into one dated list of expenses.
//!
//! Activity expenses are walked in itinerary order (days, then activities,
//! then expenses) and independent expenses follow. The result is stably
//! sorted by date, so expenses on the same day keep that relative order.

use chrono::NaiveDate;
use serde::Serialize;

use crate::{
    CurrencyCode, Day, Expense, ExpenseRecord, ExpenseSource, SkipReason, SkippedExpense, TripData,
};

/// Output of an aggregation: the valid expenses plus the records left out.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Aggregation {
    pub expenses: Vec<Expense>,
    pub skipped: Vec<SkippedExpense>,
}

impl Aggregation {
    fn push(&mut self, record: &ExpenseRecord, date: NaiveDate, source: ExpenseSource) {
        match validate(record) {
            Ok((amount, currency)) => self.expenses.push(Expense {
                id: record.id.clone(),
                amount,
                currency,
                description: record.description.clone(),
                payer: record
                    .payer
                    .as_deref()
                    .map(str::trim)
                    .unwrap_or_default()
                    .to_string(),
                category: record.category.clone().unwrap_or_default(),
                date,
                note: record.note.clone(),
                source,
            }),
            Err(reason) => self.skip(record, reason),
        }
    }

    fn skip(&mut self, record: &ExpenseRecord, reason: SkipReason) {
        tracing::warn!(expense_id = %record.id, %reason, "skipping expense record");
        self.skipped.push(SkippedExpense::new(record.id.clone(), reason));
    }

    fn push_day(&mut self, day: &Day) {
        for activity in &day.activities {
            for record in &activity.expenses {
                self.push(
                    record,
                    day.date,
                    ExpenseSource::Activity {
                        activity_id: activity.id.clone(),
                        activity_name: activity.display_name().to_string(),
                        day_index: day.index,
                    },
                );
            }
        }
    }

    fn sort_by_date(mut self) -> Self {
        // `sort_by_key` is stable: same-day expenses keep itinerary order.
        self.expenses.sort_by_key(|expense| expense.date);
        self
    }
}

/// Aggregates every expense of the trip.
pub fn aggregate(trip: &TripData) -> Aggregation {
    let mut aggregation = Aggregation::default();

    for day in &trip.days {
        aggregation.push_day(day);
    }

    for record in &trip.independent_expenses {
        match parse_date(record.date.as_deref()) {
            Ok(date) => aggregation.push(record, date, ExpenseSource::Independent),
            Err(reason) => aggregation.skip(record, reason),
        }
    }

    aggregation.sort_by_date()
}

/// Aggregates the activity expenses of a single day.
pub fn day_expenses(day: &Day) -> Aggregation {
    let mut aggregation = Aggregation::default();
    aggregation.push_day(day);
    aggregation
}

fn validate(record: &ExpenseRecord) -> Result<(f64, CurrencyCode), SkipReason> {
    let amount = record.amount.ok_or(SkipReason::MissingAmount)?;
    if !amount.is_finite() || amount < 0.0 {
        return Err(SkipReason::InvalidAmount);
    }

    let raw_currency = record
        .currency
        .as_deref()
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .ok_or(SkipReason::MissingCurrency)?;
    CurrencyCode::try_from(raw_currency)
        .map(|currency| (amount, currency))
        .map_err(|_| SkipReason::InvalidCurrency)
}

fn parse_date(value: Option<&str>) -> Result<NaiveDate, SkipReason> {
    let value = value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(SkipReason::MissingDate)?;
    // Stored dates are `YYYY-MM-DD`; tolerate a trailing time component.
    let date_part = value.get(..10).unwrap_or(value);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").map_err(|_| SkipReason::InvalidDate)
}
