//! Validated expense primitives.
//!
//! An `Expense` is a single monetary outlay that passed validation: its amount
//! is finite and non-negative, its currency code is well formed and its date
//! is known. Where the expense came from is carried by [`ExpenseSource`].

use chrono::NaiveDate;
use serde::Serialize;

use crate::CurrencyCode;

/// Where an expense was logged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum ExpenseSource {
    /// Logged against an itinerary activity; dated by the owning day.
    #[serde(rename_all = "camelCase")]
    Activity {
        activity_id: String,
        activity_name: String,
        day_index: u32,
    },
    /// Owned directly by the trip, carrying its own date.
    Independent,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub amount: f64,
    pub currency: CurrencyCode,
    pub description: String,
    pub payer: String,
    pub category: String,
    pub date: NaiveDate,
    pub note: Option<String>,
    #[serde(flatten)]
    pub source: ExpenseSource,
}

impl Expense {
    pub fn is_independent(&self) -> bool {
        matches!(self.source, ExpenseSource::Independent)
    }

    /// Name of the owning activity, if any.
    pub fn activity_name(&self) -> Option<&str> {
        match &self.source {
            ExpenseSource::Activity { activity_name, .. } => Some(activity_name),
            ExpenseSource::Independent => None,
        }
    }
}

/// Why an expense record was left out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    MissingAmount,
    InvalidAmount,
    MissingCurrency,
    InvalidCurrency,
    MissingDate,
    InvalidDate,
    UnknownPayer,
    UnconfiguredCurrency,
}

impl SkipReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingAmount => "missing amount",
            Self::InvalidAmount => "amount is negative or not a number",
            Self::MissingCurrency => "missing currency",
            Self::InvalidCurrency => "invalid currency code",
            Self::MissingDate => "missing date",
            Self::InvalidDate => "date is not an ISO date",
            Self::UnknownPayer => "payer is not a family member",
            Self::UnconfiguredCurrency => "currency is not configured",
        }
    }
}

impl core::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Warning collected for a record that did not take part in a computation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedExpense {
    pub expense_id: String,
    pub reason: SkipReason,
}

impl SkippedExpense {
    pub fn new(expense_id: impl Into<String>, reason: SkipReason) -> Self {
        Self {
            expense_id: expense_id.into(),
            reason,
        }
    }
}
